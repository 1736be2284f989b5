//! Correlates an extracted text literal with the line that draws it.
//!
//! After a text literal is extracted the correlator waits for the layer's
//! `draw(in:)` call. That line yields the frame assignment and an override
//! hook for attributed text. Only the most recent text variable is tracked:
//! a second literal seen before the first one is drawn takes its place.

use crate::transpiler::matcher::extract_rect;
use crate::transpiler::variable::TextVariable;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    code_name: String,
    frame_name: String,
    attributed_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum CorrelatorState {
    #[default]
    Idle,
    Awaiting(Pending),
}

#[derive(Debug, Default)]
pub struct TextCorrelator {
    state: CorrelatorState,
}

impl TextCorrelator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start waiting for the draw call of `variable`'s layer.
    pub fn remember(&mut self, variable: &TextVariable) {
        self.state = CorrelatorState::Awaiting(Pending {
            code_name: variable.group.code_name(),
            frame_name: variable.frame_name(),
            attributed_name: variable.attributed_name(),
        });
    }

    #[cfg(test)]
    fn is_awaiting(&self) -> bool {
        matches!(self.state, CorrelatorState::Awaiting(_))
    }

    /// Lines to insert before `line`.
    ///
    /// Empty unless `line` draws the remembered layer, in which case the
    /// correlator returns to idle.
    pub fn correlate(&mut self, line: &str) -> Vec<String> {
        let CorrelatorState::Awaiting(pending) = &self.state else {
            return Vec::new();
        };

        if !line.contains(&format!("{}.draw(in: ", pending.code_name)) {
            return Vec::new();
        }

        let mut inserted = Vec::with_capacity(5);

        if let Some(rect) = extract_rect(line) {
            inserted.push(format!(
                "        {} = convertRectToViewSpace({rect}, context: context)",
                pending.frame_name
            ));
        }

        let code = &pending.code_name;
        inserted.push(format!("            // if explicit text for {code} was defined, use that"));
        inserted.push(format!(
            "            if let attributedText = {} {{",
            pending.attributed_name
        ));
        inserted.push(format!("                {code}.setAttributedString(attributedText)"));
        inserted.push("            }".to_string());

        self.state = CorrelatorState::Idle;
        inserted
    }
}
