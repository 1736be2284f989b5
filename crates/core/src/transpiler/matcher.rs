//! Line-level literal matching and span rewriting.
//!
//! Generated drawing code is regular enough that each literal-use idiom can
//! be recognized by a pair of fixed delimiters, or by the call that follows
//! the literal. Matchers report the byte span of the literal inside the line
//! so the rewriter can substitute exactly that span.

use std::ops::Range;

/// A literal recognized inside a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMatch<'a> {
    /// Byte range of `text` within the line.
    pub span: Range<usize>,
    /// The captured literal.
    pub text: &'a str,
    /// Whether the closing delimiter was present.
    pub closed: bool,
}

/// Matches the text between a left and a right delimiter.
///
/// The capture starts after the first occurrence of `left` and stops at the
/// first `right`, but never runs past the next `left`. A missing `right`
/// captures the rest of that segment.
#[derive(Debug, Clone, Copy)]
pub struct Delimited {
    pub left: &'static str,
    pub right: &'static str,
}

impl Delimited {
    pub const fn new(left: &'static str, right: &'static str) -> Self {
        Self { left, right }
    }

    pub fn find<'a>(&self, line: &'a str) -> Option<LiteralMatch<'a>> {
        let start = line.find(self.left)? + self.left.len();
        let rest = &line[start..];
        let segment = rest.find(self.left).map_or(rest, |i| &rest[..i]);

        let (text, closed) = match segment.find(self.right) {
            Some(i) => (&segment[..i], true),
            None => (segment, false),
        };

        if text.is_empty() {
            return None;
        }

        Some(LiteralMatch { span: start..start + text.len(), text, closed })
    }
}

/// Matches the receiver expression of a call such as `<expr>.setFill()`.
#[derive(Debug, Clone, Copy)]
pub struct CallSuffix {
    pub marker: &'static str,
}

impl CallSuffix {
    pub const fn new(marker: &'static str) -> Self {
        Self { marker }
    }

    pub fn find<'a>(&self, line: &'a str) -> Option<LiteralMatch<'a>> {
        let idx = line.find(self.marker)?;
        let head = &line[..idx];
        let text = head.trim();

        if text.is_empty() {
            return None;
        }

        let start = head.len() - head.trim_start().len();
        Some(LiteralMatch { span: start..start + text.len(), text, closed: true })
    }
}

/// Replace `span` in `line` with `replacement`.
pub fn rewrite(line: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..span.start]);
    out.push_str(replacement);
    out.push_str(&line[span.end..]);
    out
}

/// Extract a `CGRect(x: ...)` argument from a draw call.
///
/// `label2.draw(in: CGRect(x: 68.97, y: 5, width: 45, height: 15))` yields
/// `CGRect(x: 68.97, y: 5, width: 45, height: 15)`.
pub fn extract_rect(line: &str) -> Option<String> {
    let start = line.find("CGRect(x:")?;
    let end = start + line[start..].find("))")?;
    Some(format!("{})", &line[start..end]))
}

/// Iterate lines together with the byte offset at which each one starts.
///
/// Line terminators (`\n` or `\r\n`) are stripped, as with [`str::lines`].
pub fn lines_with_offsets(source: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    source.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        (start, line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: Delimited = Delimited::new(".addAttribute(.font, value: ", ", range: ");

    #[test]
    fn delimited_captures_between_markers() {
        let line = r#"label.addAttribute(.font, value: UIFont(name: "Avenir", size: 11)!, range: r)"#;
        let m = FONT.find(line).unwrap();
        assert_eq!(m.text, r#"UIFont(name: "Avenir", size: 11)!"#);
        assert_eq!(&line[m.span.clone()], m.text);
        assert!(m.closed);
    }

    #[test]
    fn delimited_without_right_runs_to_segment_end() {
        let m = FONT.find("x.addAttribute(.font, value: f").unwrap();
        assert_eq!(m.text, "f");
        assert!(!m.closed);
    }

    #[test]
    fn delimited_stops_at_next_left() {
        let d = Delimited::new("<", ">");
        let m = d.find("a<bc<de>").unwrap();
        assert_eq!(m.text, "bc");
        assert!(!m.closed);
    }

    #[test]
    fn delimited_rejects_missing_or_empty() {
        assert!(FONT.find("no attribute here").is_none());
        assert!(FONT.find("x.addAttribute(.font, value: , range: r").is_none());
    }

    #[test]
    fn call_suffix_captures_trimmed_receiver() {
        let fill = CallSuffix::new(".setFill()");
        let line = "        UIColor.white.setFill()";
        let m = fill.find(line).unwrap();
        assert_eq!(m.text, "UIColor.white");
        assert_eq!(m.span, 8..21);
        assert!(fill.find("        .setFill()").is_none());
    }

    #[test]
    fn rewrite_replaces_only_span() {
        assert_eq!(rewrite("abcdef", 2..4, "XY"), "abXYef");
        assert_eq!(rewrite("abc", 0..3, ""), "");
    }

    #[test]
    fn extracts_rect_from_draw_call() {
        let line = "        label2.draw(in: CGRect(x: 68.97, y: 5, width: 45, height: 15))";
        assert_eq!(
            extract_rect(line).as_deref(),
            Some("CGRect(x: 68.97, y: 5, width: 45, height: 15)")
        );
        assert_eq!(extract_rect("label2.draw(in: rect)"), None);
        assert_eq!(extract_rect("f()) CGRect(x: 1"), None);
    }

    #[test]
    fn offsets_point_at_line_starts() {
        let src = "ab\r\ncd\n\nef";
        let lines: Vec<_> = lines_with_offsets(src).collect();
        assert_eq!(lines, vec![(0, "ab"), (4, "cd"), (7, ""), (8, "ef")]);
        assert_eq!(lines_with_offsets("").count(), 0);
    }
}
