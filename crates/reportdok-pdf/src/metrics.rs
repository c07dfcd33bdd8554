//! Font metrics and text encoding
//!
//! Text is set in the standard-14 Helvetica family, which every PDF viewer
//! provides, so no font program is embedded. Advance widths come from the
//! Adobe AFM files in units of 1/1000 em. The oblique faces share the
//! widths of their upright counterparts.

use crate::geometry::pt_to_mm;
use crate::markup::SpanStyle;

/// One face of the Helvetica family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl Font {
    pub const ALL: [Font; 4] = [Font::Regular, Font::Bold, Font::Italic, Font::BoldItalic];

    pub fn from_style(style: SpanStyle) -> Self {
        match (style.bold, style.italic) {
            (false, false) => Font::Regular,
            (true, false) => Font::Bold,
            (false, true) => Font::Italic,
            (true, true) => Font::BoldItalic,
        }
    }

    /// Resource name used in page content streams
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Font::Regular => b"F1",
            Font::Bold => b"F2",
            Font::Italic => b"F3",
            Font::BoldItalic => b"F4",
        }
    }

    /// PostScript name of the standard font
    pub fn base_font(self) -> &'static [u8] {
        match self {
            Font::Regular => b"Helvetica",
            Font::Bold => b"Helvetica-Bold",
            Font::Italic => b"Helvetica-Oblique",
            Font::BoldItalic => b"Helvetica-BoldOblique",
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, Font::Bold | Font::BoldItalic)
    }
}

/// Text measurement used by wrapping and table layout
pub trait TextMeasure {
    /// Advance width of `c` in 1/1000 em
    fn char_width(&self, c: char, font: Font) -> u16;

    /// Width of `text` in millimetres at `size` points
    fn text_width(&self, text: &str, font: Font, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c, font))).sum();
        pt_to_mm(units as f32 * size / 1000.0)
    }
}

/// AFM widths of the Helvetica family
#[derive(Debug, Clone, Copy, Default)]
pub struct Helvetica;

impl TextMeasure for Helvetica {
    fn char_width(&self, c: char, font: Font) -> u16 {
        let table = if font.is_bold() { &BOLD } else { &REGULAR };
        let c = base_letter(c);
        match c {
            ' '..='~' => table[c as usize - 0x20],
            'ß' => 611,
            '•' => 350,
            '–' | '€' | '«' | '»' | '§' => 556,
            '—' | '…' => 1000,
            '°' => 400,
            '·' => 278,
            '‘' | '’' | '‚' => {
                if font.is_bold() {
                    278
                } else {
                    222
                }
            }
            '“' | '”' | '„' => {
                if font.is_bold() {
                    500
                } else {
                    333
                }
            }
            '\u{a0}' => 278,
            _ => 556,
        }
    }
}

/// Fold accented Latin-1 letters to the base glyph they share widths with
fn base_letter(c: char) -> char {
    match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '\t' => ' ',
        other => other,
    }
}

/// Encode text as WinAnsiEncoding bytes; unmappable characters become `?`
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\t' => b' ',
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[rustfmt::skip]
const REGULAR: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];
