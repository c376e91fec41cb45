//! Protocol name extraction
//!
//! Names are discovered with two lazy patterns:
//! - ` protocol <name> {` for plain declarations
//! - ` protocol <name> : ` for declarations with a conformance list
//!
//! All brace-form matches come first (document order), then all colon-form
//! matches (document order). Duplicates keep their first position.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Regex for declarations opening directly with a brace
static BRACE_DECLARATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" protocol (.*?) \{").expect("Valid regex pattern"));

/// Regex for declarations followed by a conformance list
static CONFORMANCE_DECLARATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" protocol (.*?) : ").expect("Valid regex pattern"));

/// Ordered set of protocol names, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolNames {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ProtocolNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name, returning false if it was already present
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.order.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<'a> Extend<&'a str> for ProtocolNames {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

impl<'a> FromIterator<&'a str> for ProtocolNames {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut names = Self::new();
        names.extend(iter);
        names
    }
}

/// Pure: Names of all ` protocol <name> {` declarations, in document order
pub fn find_brace_declarations(text: &str) -> Vec<&str> {
    capture_names(&BRACE_DECLARATION_REGEX, text)
}

/// Pure: Names of all ` protocol <name> : ` declarations, in document order
pub fn find_conformance_declarations(text: &str) -> Vec<&str> {
    capture_names(&CONFORMANCE_DECLARATION_REGEX, text)
}

fn capture_names<'t>(regex: &Regex, text: &'t str) -> Vec<&'t str> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Pure: Extract the distinct protocol names of a document
///
/// Brace-form names precede colon-only names; within each form the
/// document order is kept.
///
/// # Examples
///
/// ```
/// use protosplit::rewrite::extract_protocol_names;
///
/// let text = " protocol B : Base\n protocol A {\n protocol A {";
/// let names = extract_protocol_names(text);
/// assert_eq!(names.as_slice(), &["A".to_string(), "B".to_string()]);
/// ```
pub fn extract_protocol_names(text: &str) -> ProtocolNames {
    find_brace_declarations(text)
        .into_iter()
        .chain(find_conformance_declarations(text))
        .collect()
}
