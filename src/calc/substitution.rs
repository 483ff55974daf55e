use crate::error::{EvalError, Result};
use log::debug;

/// How variable names are located in the expression text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SubstitutionMode {
    /// Raw substring replacement. A name that occurs inside another name or
    /// inside a number is replaced there as well.
    #[default]
    Textual,
    /// Replaces a name only where it is not touching an ASCII alphanumeric
    /// character or `_` on either side.
    WholeWord,
}

/// Ordered `(name, value)` pairs parsed from `"name value name value ..."`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableBindings {
    pairs: Vec<(String, String)>,
}

impl VariableBindings {
    /// Splits on whitespace and pairs up the items in order. An odd number of
    /// items is rejected.
    pub fn parse(assignments: &str) -> Result<Self> {
        let parts: Vec<&str> = assignments.split_whitespace().collect();
        if parts.len() % 2 != 0 {
            return Err(EvalError::MalformedVariableAssignment { count: parts.len() });
        }

        let pairs = parts
            .chunks_exact(2)
            .map(|pair| (pair[0].to_string(), pair[1].to_string()))
            .collect();
        Ok(Self { pairs })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Replaces every occurrence of each name, pair by pair in the given order,
    /// so a later pair sees the output of the earlier ones.
    pub fn apply(&self, expression: &str, mode: SubstitutionMode) -> String {
        let mut text = expression.to_string();
        for (name, value) in self.iter() {
            text = match mode {
                SubstitutionMode::Textual => text.replace(name, value),
                SubstitutionMode::WholeWord => replace_whole_word(&text, name, value),
            };
        }
        debug!("Substituted expression: {text:?}");
        text
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn replace_whole_word(text: &str, name: &str, value: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for (start, matched) in text.match_indices(name) {
        let end = start + matched.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            continue;
        }
        result.push_str(&text[last..start]);
        result.push_str(value);
        last = end;
    }

    result.push_str(&text[last..]);
    result
}
