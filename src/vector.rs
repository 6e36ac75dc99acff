//! Vector string tokenization
//!
//! A CVSS vector is a `/`-separated list of `NAME:VALUE` tokens. Extraction
//! records every token positionally, deferring all value validation to the
//! metric groups — with one global precondition: a metric name that appears
//! more than once invalidates the entire list, so a malformed vector can
//! never partially score.

use log::debug;
use std::collections::HashSet;

/// One `NAME:VALUE` token from a vector string.
///
/// `value` is `None` when the token had no `:` separator. The position is
/// the token's index in the vector and is kept for diagnostics only; scoring
/// never consults it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: Option<String>,
    pub position: usize,
}

/// The tokenized form of one vector string.
///
/// `token_count` is the raw number of tokens seen, preserved even when the
/// property list is cleared by the duplicate-name rule; the scoring engines
/// compare it against the version's required base metric count before any
/// per-group validation runs.
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: Vec<Property>,
    token_count: usize,
}

impl PropertySet {
    /// Tokenize a raw vector string.
    pub fn extract(vector: &str) -> Self {
        let mut tokens: Vec<&str> = vector.split('/').collect();
        // A trailing separator contributes no token.
        while tokens.last() == Some(&"") {
            tokens.pop();
        }

        let token_count = tokens.len();
        let mut properties = Vec::with_capacity(token_count);
        for (position, token) in tokens.iter().enumerate() {
            let mut parts = token.split(':');
            let name = parts.next().unwrap_or_default().to_string();
            let value = parts.next().filter(|v| !v.is_empty()).map(String::from);
            properties.push(Property {
                name,
                value,
                position,
            });
        }

        if has_duplicate_names(&properties) {
            debug!("duplicate metric name in vector, discarding all properties: {vector}");
            properties.clear();
        }

        Self {
            properties,
            token_count,
        }
    }

    /// The extracted properties, empty when the duplicate rule fired.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Raw token count of the vector, independent of the duplicate rule.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// The value recorded for a metric name, if the token carried one.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
    }
}

fn has_duplicate_names(properties: &[Property]) -> bool {
    let mut seen = HashSet::new();
    properties.iter().any(|p| !seen.insert(p.name.as_str()))
}
