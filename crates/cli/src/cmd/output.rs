//! JSON report for `--json`.

use fumes_core::Declaration;
use serde::Serialize;

/// Formatted declaration for JSON output.
#[derive(Debug, Serialize)]
pub struct DeclarationOutput {
    pub name: String,
    pub kind: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: String,
    pub group: String,
    pub visibility: String,
}

impl From<&Declaration> for DeclarationOutput {
    fn from(decl: &Declaration) -> Self {
        Self {
            name: decl.name.clone(),
            kind: decl.kind.as_str().to_string(),
            type_name: decl.type_name.clone(),
            value: decl.value.clone(),
            group: decl.group.clone(),
            visibility: decl.visibility.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub input: String,
    pub dialect: String,
    /// Files written, empty when the result went to the clipboard.
    pub outputs: Vec<String>,
    pub declarations: Vec<DeclarationOutput>,
    pub duplicates: Vec<String>,
}
