//! Greedy word wrap over styled spans

use crate::markup::{Span, SpanStyle};
use crate::metrics::{Font, TextMeasure};

/// Tolerance for floating point width comparisons (mm)
const EPSILON: f32 = 1e-3;

/// A styled piece of a wrapped line
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub style: SpanStyle,
}

/// One output line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub fragments: Vec<Fragment>,
    /// Rendered width in millimetres
    pub width: f32,
}

impl Line {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, style: SpanStyle, width: f32) {
        match self.fragments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.fragments.push(Fragment {
                text: text.to_string(),
                style,
            }),
        }
        self.width += width;
    }
}

enum Token {
    /// A run of non-space characters, possibly mixing styles
    Word(Vec<Fragment>),
    Space(SpanStyle),
    Break,
}

/// Wrap `spans` into lines no wider than `max_width` millimetres.
///
/// Words move to the next line when they do not fit; a word wider than a
/// whole line is broken between characters. Every `\n` starts a new line.
/// The result always holds at least one (possibly empty) line.
pub fn wrap(spans: &[Span], max_width: f32, font_size: f32, measure: &dyn TextMeasure) -> Vec<Line> {
    let mut wrapper = Wrapper {
        max_width,
        font_size,
        measure,
        lines: Vec::new(),
        current: Line::default(),
    };
    let mut pending_space: Option<SpanStyle> = None;

    for token in tokenize(spans) {
        match token {
            Token::Break => {
                wrapper.finish_line();
                pending_space = None;
            }
            Token::Space(style) => {
                if !wrapper.current.is_empty() {
                    pending_space = Some(style);
                }
            }
            Token::Word(word) => {
                let word_width = wrapper.word_width(&word);
                if let Some(style) = pending_space.take() {
                    let space = wrapper.width(" ", style);
                    if wrapper.current.width + space + word_width <= max_width + EPSILON {
                        wrapper.current.push(" ", style, space);
                    } else {
                        wrapper.finish_line();
                    }
                }
                if wrapper.current.width + word_width <= max_width + EPSILON {
                    for fragment in &word {
                        let width = wrapper.width(&fragment.text, fragment.style);
                        wrapper.current.push(&fragment.text, fragment.style, width);
                    }
                } else {
                    wrapper.break_word(&word);
                }
            }
        }
    }

    let Wrapper {
        mut lines, current, ..
    } = wrapper;
    lines.push(current);
    lines
}

/// Number of lines `spans` occupy at `max_width`; at least 1
pub fn line_count(spans: &[Span], max_width: f32, font_size: f32, measure: &dyn TextMeasure) -> usize {
    wrap(spans, max_width, font_size, measure).len()
}

struct Wrapper<'a> {
    max_width: f32,
    font_size: f32,
    measure: &'a dyn TextMeasure,
    lines: Vec<Line>,
    current: Line,
}

impl Wrapper<'_> {
    fn width(&self, text: &str, style: SpanStyle) -> f32 {
        self.measure
            .text_width(text, Font::from_style(style), self.font_size)
    }

    fn word_width(&self, word: &[Fragment]) -> f32 {
        word.iter().map(|f| self.width(&f.text, f.style)).sum()
    }

    fn finish_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn break_word(&mut self, word: &[Fragment]) {
        let mut buf = [0u8; 4];
        for fragment in word {
            for c in fragment.text.chars() {
                let ch: &str = c.encode_utf8(&mut buf);
                let width = self.width(ch, fragment.style);
                if !self.current.is_empty() && self.current.width + width > self.max_width + EPSILON
                {
                    self.finish_line();
                }
                self.current.push(ch, fragment.style, width);
            }
        }
    }
}

fn tokenize(spans: &[Span]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word: Vec<Fragment> = Vec::new();

    for span in spans {
        for c in span.text.chars() {
            match c {
                '\n' | ' ' => {
                    if !word.is_empty() {
                        tokens.push(Token::Word(std::mem::take(&mut word)));
                    }
                    tokens.push(if c == '\n' {
                        Token::Break
                    } else {
                        Token::Space(span.style)
                    });
                }
                _ => match word.last_mut() {
                    Some(last) if last.style == span.style => last.text.push(c),
                    _ => word.push(Fragment {
                        text: c.to_string(),
                        style: span.style,
                    }),
                },
            }
        }
    }
    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }
    tokens
}
