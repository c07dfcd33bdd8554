//! Inline markup
//!
//! Dataset text may carry a small AsciiDoc-style inline syntax:
//!
//! - `*bold*` and `_italic_` (constrained: the opening marker must not
//!   follow a letter or digit, the closing marker must not precede one)
//! - `[role]#text#` to color text with a theme role
//! - `\` escapes the next character
//!
//! Markers may nest. A marker without a valid partner is kept as literal
//! text, so `snake_case` and `a * b` come through unchanged. Newlines are
//! preserved in the span text and become forced line breaks when wrapped.

use std::str::FromStr;

/// Semantic color role, resolved against a [`crate::Theme`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Brand,
    Muted,
    Success,
    Warning,
    Danger,
    Light,
    White,
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand" => Ok(Role::Brand),
            "muted" => Ok(Role::Muted),
            "success" => Ok(Role::Success),
            "warning" => Ok(Role::Warning),
            "danger" => Ok(Role::Danger),
            "light" => Ok(Role::Light),
            "white" => Ok(Role::White),
            _ => Err(()),
        }
    }
}

/// Style of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub role: Option<Role>,
}

impl SpanStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }
}

/// A run of text with a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::default())
    }
}

/// Parse inline markup into styled spans.
///
/// Adjacent runs with the same style are merged and empty runs dropped,
/// so plain text yields exactly one span (or none for an empty string).
pub fn parse_markup(input: &str) -> Vec<Span> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    let mut parser = Parser {
        chars: &chars,
        out: &mut out,
    };
    parser.parse(0, chars.len(), SpanStyle::default());
    out
}

/// Escape text so that it renders literally when embedded in markup
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '_' | '#' | '[' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Concatenated text of all spans with markup removed
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

struct Parser<'a> {
    chars: &'a [char],
    out: &'a mut Vec<Span>,
}

impl Parser<'_> {
    fn parse(&mut self, start: usize, end: usize, style: SpanStyle) {
        let mut literal = String::new();
        let mut i = start;

        while i < end {
            let c = self.chars[i];
            match c {
                '\\' if i + 1 < end => {
                    literal.push(self.chars[i + 1]);
                    i += 2;
                }
                '*' | '_' => match self.find_closer(c, i, end) {
                    Some(close) => {
                        self.flush(&mut literal, style);
                        let mut inner = style;
                        if c == '*' {
                            inner.bold = true;
                        } else {
                            inner.italic = true;
                        }
                        self.parse(i + 1, close, inner);
                        i = close + 1;
                    }
                    None => {
                        literal.push(c);
                        i += 1;
                    }
                },
                '[' => match self.role_span(i, end) {
                    Some((role, open, close)) => {
                        self.flush(&mut literal, style);
                        self.parse(open, close, style.with_role(role));
                        i = close + 1;
                    }
                    None => {
                        literal.push(c);
                        i += 1;
                    }
                },
                _ => {
                    literal.push(c);
                    i += 1;
                }
            }
        }
        self.flush(&mut literal, style);
    }

    /// Index of the marker closing the one at `open`, honoring the
    /// constrained-formatting boundary rules
    fn find_closer(&self, marker: char, open: usize, end: usize) -> Option<usize> {
        let before_ok = open == 0 || !self.chars[open - 1].is_alphanumeric();
        let after_ok = self
            .chars
            .get(open + 1)
            .is_some_and(|c| open + 1 < end && !c.is_whitespace() && *c != marker);
        if !before_ok || !after_ok {
            return None;
        }

        let mut j = open + 1;
        while j < end {
            let c = self.chars[j];
            if c == '\\' {
                j += 2;
                continue;
            }
            if c == marker
                && !self.chars[j - 1].is_whitespace()
                && self
                    .chars
                    .get(j + 1)
                    .map_or(true, |next| !next.is_alphanumeric())
            {
                return Some(j);
            }
            j += 1;
        }
        None
    }

    /// Parse `[role]#...#` starting at `open`; returns the role and the
    /// content range
    fn role_span(&self, open: usize, end: usize) -> Option<(Role, usize, usize)> {
        let name_end = (open + 1..end).find(|&j| self.chars[j] == ']')?;
        let name: String = self.chars[open + 1..name_end].iter().collect();
        let role = name.parse::<Role>().ok()?;
        if self.chars.get(name_end + 1) != Some(&'#') {
            return None;
        }
        let content = name_end + 2;
        let mut j = content;
        while j < end {
            match self.chars[j] {
                '\\' => j += 2,
                '#' => return Some((role, content, j)),
                _ => j += 1,
            }
        }
        None
    }

    fn flush(&mut self, literal: &mut String, style: SpanStyle) {
        if literal.is_empty() {
            return;
        }
        let text = std::mem::take(literal);
        match self.out.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.out.push(Span { text, style }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> SpanStyle {
        SpanStyle::bold()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_markup("Hello world"), vec![Span::plain("Hello world")]);
        assert!(parse_markup("").is_empty());
    }

    #[test]
    fn test_bold_and_italic() {
        let spans = parse_markup("a *shift scheduling SaaS* for _you_.");
        assert_eq!(
            spans,
            vec![
                Span::plain("a "),
                Span::new("shift scheduling SaaS", bold()),
                Span::plain(" for "),
                Span::new(
                    "you",
                    SpanStyle {
                        italic: true,
                        ..SpanStyle::default()
                    }
                ),
                Span::plain("."),
            ]
        );
    }

    #[test]
    fn test_intraword_markers_are_literal() {
        assert_eq!(
            parse_markup("requester_shifts and time_entries"),
            vec![Span::plain("requester_shifts and time_entries")]
        );
        assert_eq!(parse_markup("2 * 3 = 6"), vec![Span::plain("2 * 3 = 6")]);
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        assert_eq!(parse_markup("*open only"), vec![Span::plain("*open only")]);
    }

    #[test]
    fn test_nested_styles() {
        let spans = parse_markup("*bold _both_*");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], Span::new("bold ", bold()));
        assert_eq!(
            spans[1].style,
            SpanStyle {
                bold: true,
                italic: true,
                role: None
            }
        );
    }

    #[test]
    fn test_role_span() {
        let spans = parse_markup("[success]#*70 done*# of 94");
        assert_eq!(spans[0], Span::new("70 done", bold().with_role(Role::Success)));
        assert_eq!(spans[1], Span::plain(" of 94"));
    }

    #[test]
    fn test_unknown_role_is_literal() {
        let text = "src/app/api/shifts/[id]/route.ts";
        assert_eq!(parse_markup(text), vec![Span::plain(text)]);
        assert_eq!(parse_markup("[neon]#x#"), vec![Span::plain("[neon]#x#")]);
    }

    #[test]
    fn test_escape() {
        assert_eq!(parse_markup(r"\*not bold*"), vec![Span::plain("*not bold*")]);
        let escaped = escape_markup("C# *literal*");
        assert_eq!(plain_text(&parse_markup(&escaped)), "C# *literal*");
    }

    #[test]
    fn test_newline_kept_in_text() {
        let spans = parse_markup("Line one\n*two*");
        assert_eq!(spans[0].text, "Line one\n");
        assert_eq!(spans[1], Span::new("two", bold()));
    }

    #[test]
    fn test_same_style_spans_merge() {
        let spans = parse_markup("*a* *b*");
        assert_eq!(spans.len(), 3);
        let spans = parse_markup("x\\*y");
        assert_eq!(spans, vec![Span::plain("x*y")]);
    }
}
