//! Literal extractors for colors, text and fonts.
//!
//! Each extractor makes one pass over the source, rewrites the literals it
//! recognizes and returns the variables it created in source order.
//! Literals with no annotated group are left in place.

use tracing::debug;

use crate::transpiler::annotation::AnnotationLocator;
use crate::transpiler::correlator::TextCorrelator;
use crate::transpiler::matcher::{
    CallSuffix, Delimited, LiteralMatch, lines_with_offsets, rewrite,
};
use crate::transpiler::variable::{
    ColorType, ColorVariable, FontVariable, Group, TextVariable,
};

const STROKE: CallSuffix = CallSuffix::new(".setStroke()");
const FILL: CallSuffix = CallSuffix::new(".setFill()");
const FOREGROUND: Delimited =
    Delimited::new(".addAttribute(.foregroundColor, value: ", ", range");
const FOREGROUND_COLOR_LITERAL: &str = ".addAttribute(.foregroundColor, value: UIColor";
const TEXT: Delimited = Delimited::new("NSMutableAttributedString(string: \"", "\")");
const FONT: Delimited = Delimited::new(".addAttribute(.font, value: ", ", range: ");

/// Result of one extraction pass.
#[derive(Debug, Clone)]
pub struct Extraction<V> {
    pub source: String,
    pub variables: Vec<V>,
}

fn match_color(line: &str) -> Option<(ColorType, LiteralMatch<'_>)> {
    if line.contains(FOREGROUND_COLOR_LITERAL)
        && let Some(m) = FOREGROUND.find(line)
    {
        return Some((ColorType::Text, m));
    }

    if let Some(m) = FILL.find(line) {
        return Some((ColorType::Fill, m));
    }

    STROKE.find(line).map(|m| (ColorType::Stroke, m))
}

pub fn extract_colors(
    source: &str,
    locator: &AnnotationLocator,
) -> Extraction<ColorVariable> {
    let mut lines = Vec::new();
    let mut variables = Vec::new();

    for (offset, line) in lines_with_offsets(source) {
        let Some((color_type, m)) = match_color(line) else {
            lines.push(line.to_string());
            continue;
        };

        let Some(group) = locator.group_before(source, offset) else {
            lines.push(line.to_string());
            continue;
        };

        let variable = ColorVariable::new(Group::new(group), m.text, color_type);
        let name = variable.name();
        debug!(name = %name, color = %variable.color, "extracted color");

        lines.push(rewrite(line, m.span, &format!("self.{name}")));
        variables.push(variable);
    }

    Extraction { source: lines.join("\n"), variables }
}

/// Extract string literals and correlate each with its draw call.
pub fn extract_texts(source: &str, locator: &AnnotationLocator) -> Extraction<TextVariable> {
    let mut lines = Vec::new();
    let mut variables = Vec::new();
    let mut correlator = TextCorrelator::new();

    for (offset, line) in lines_with_offsets(source) {
        if let Some(m) = TEXT.find(line).filter(|m| m.closed) {
            match locator.group_before(source, offset) {
                Some(group) => {
                    let variable = TextVariable::new(Group::new(group), m.text);
                    debug!(name = %variable.name(), text = %variable.text, "extracted text");

                    // The delimiters end and start with the quotes.
                    let quoted = m.span.start - 1..m.span.end + 1;
                    lines.push(rewrite(line, quoted, &variable.name()));
                    correlator.remember(&variable);
                    variables.push(variable);
                }
                None => lines.push(line.to_string()),
            }
            continue;
        }

        let inserted = correlator.correlate(line);
        if !inserted.is_empty() {
            debug!(line = %line.trim(), "correlated text draw call");
        }
        lines.extend(inserted);
        lines.push(line.to_string());
    }

    Extraction { source: lines.join("\n"), variables }
}

pub fn extract_fonts(source: &str, locator: &AnnotationLocator) -> Extraction<FontVariable> {
    let mut lines = Vec::new();
    let mut variables = Vec::new();

    for (offset, line) in lines_with_offsets(source) {
        let found = FONT
            .find(line)
            .and_then(|m| locator.group_before(source, offset).map(|group| (m, group)));

        match found {
            Some((m, group)) => {
                let variable = FontVariable::new(Group::new(group), m.text);
                debug!(name = %variable.name(), font = %variable.text, "extracted font");

                lines.push(rewrite(line, m.span, &variable.name()));
                variables.push(variable);
            }
            None => lines.push(line.to_string()),
        }
    }

    Extraction { source: lines.join("\n"), variables }
}
