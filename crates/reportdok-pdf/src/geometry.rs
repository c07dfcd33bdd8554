//! Page geometry
//!
//! Layout works in millimetres with the origin at the top-left corner of
//! the page and y growing downwards. The backend converts to PDF points.

/// Points per millimetre
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to PDF points
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Convert PDF points to millimetres
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

/// An axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Page margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Page size plus margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    /// A4 portrait (210 x 297 mm)
    pub fn a4(margins: Margins) -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margins,
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margins.left
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margins.right
    }

    pub fn content_width(&self) -> f32 {
        self.content_right() - self.content_left()
    }

    /// First usable y on a page
    pub fn content_top(&self) -> f32 {
        self.margins.top
    }

    /// Last usable y on a page; content must not extend past it
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margins.bottom
    }

    pub fn content_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }
}
