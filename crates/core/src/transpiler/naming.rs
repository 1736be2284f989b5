//! Identifier derivation and collision tracking.

use std::collections::HashSet;

use tracing::warn;

/// Base identifier for a group: underscores trimmed, first character
/// lower-cased, whitespace removed.
///
/// `"_Big Triangle"` becomes `"bigTriangle"`.
pub fn base_identifier(group_name: &str) -> String {
    let mut ident = lower_first(group_name.trim_matches('_'));
    ident.retain(|c| !c.is_whitespace());
    ident
}

/// The identifier generated drawing code already uses for a layer object:
/// the group name with its first character lower-cased.
pub fn code_identifier(group_name: &str) -> String {
    lower_first(group_name)
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Camel-case a free-form label such as `"Dot_fill_color"` or
/// `"_Big Triangle_stroke_color"`.
///
/// Words split on any non-alphanumeric character and on case boundaries
/// (`fooBar`, `XMLHttp`). A later word that starts with a digit keeps an
/// underscore in front of it.
pub fn camel_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());

    for (idx, word) in split_words(label).iter().enumerate() {
        if idx == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if first.is_ascii_digit() {
                out.push('_');
            }
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }

    out
}

fn split_words(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
            let next = chars.get(i + 1).copied();
            let lower_to_upper =
                (prev.is_lowercase() || prev.is_ascii_digit()) && c.is_uppercase();
            let acronym_end = prev.is_uppercase()
                && c.is_uppercase()
                && next.is_some_and(char::is_lowercase);

            if (lower_to_upper || acronym_end) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Tracks every declaration name issued during one run.
#[derive(Debug, Default)]
pub struct NameAllocator {
    issued: HashSet<String>,
    duplicates: Vec<String>,
    verbose: bool,
}

impl NameAllocator {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, ..Default::default() }
    }

    /// Reserve `name`. Returns `false` if it was already issued; the caller
    /// must then skip the declaration.
    pub fn claim(&mut self, name: &str) -> bool {
        if self.issued.contains(name) {
            if self.verbose {
                warn!("duplicate variable named {name}. Consider renaming your source files.");
            }
            self.duplicates.push(name.to_string());
            return false;
        }

        self.issued.insert(name.to_string());
        true
    }

    /// Names rejected so far, in rejection order.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn into_duplicates(self) -> Vec<String> {
        self.duplicates
    }
}
