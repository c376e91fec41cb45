//! Protocol declaration rewriting
//!
//! Every ` protocol <name> {` opening is split into an empty declaration
//! followed by an extension block of the same name:
//!
//! ```text
//!  protocol View {        =>   protocol View{ }
//!                              extension View {
//! ```
//!
//! Names are discovered with [`extract_protocol_names`], then one
//! [`RewriteRule`] per distinct name is applied to the whole document in
//! first-seen order. Names found only in ` protocol <name> : ` form yield a
//! rule that matches nothing.
//!
//! # Examples
//!
//! ```
//! use protosplit::rewrite::rewrite_protocols;
//!
//! let output = rewrite_protocols("foo protocol Sample { bar }");
//! assert_eq!(output, "foo protocol Sample{ }\n extension Sample { bar }");
//! ```

pub mod extract;
pub mod report;
pub mod rule;

pub use extract::{
    extract_protocol_names, find_brace_declarations, find_conformance_declarations,
    ProtocolNames,
};
pub use report::{RewriteReport, RuleApplication};
pub use rule::RewriteRule;

use tracing::debug;

/// Rewritten document plus the summary of the pass that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub report: RewriteReport,
}

/// Pure: Rewrite all protocol declarations in `input`
pub fn rewrite_protocols(input: &str) -> String {
    rewrite_with_report(input).text
}

/// Pure: Rewrite all protocol declarations and report what changed
pub fn rewrite_with_report(input: &str) -> Rewrite {
    let names = extract_protocol_names(input);
    debug!("Discovered {} distinct protocol name(s)", names.len());

    let mut text = input.to_string();
    let mut report = RewriteReport::default();

    for name in names.iter() {
        let rule = RewriteRule::new(name);
        let (rewritten, replacements) = rule.apply(&text);
        debug!(protocol = name, replacements, "Applied rewrite rule");
        text = rewritten;
        report.record(name, replacements);
    }

    Rewrite { text, report }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn protocol_name() -> impl Strategy<Value = String> {
        r"[A-Z][a-zA-Z0-9]{0,12}"
    }

    // Text that can never contain the " protocol " marker
    fn plain_text() -> impl Strategy<Value = String> {
        r"[a-oq-z0-9 {}:\n]{0,80}"
    }

    proptest! {
        #[test]
        fn prop_text_without_protocols_is_unchanged(text in plain_text()) {
            prop_assert_eq!(rewrite_protocols(&text), text);
        }

        #[test]
        fn prop_rewrite_is_deterministic(text in ".{0,120}") {
            prop_assert_eq!(rewrite_protocols(&text), rewrite_protocols(&text));
        }

        #[test]
        fn prop_no_plain_declaration_remains(
            names in prop::collection::vec(protocol_name(), 1..6),
        ) {
            let input: String = names
                .iter()
                .map(|name| format!(" protocol {name} {{ }}\n"))
                .collect();
            let rewrite = rewrite_with_report(&input);

            for name in &names {
                let plain = format!(" protocol {name} {{");
                let split = format!(" protocol {name}{{ }}\n extension {name} {{");
                prop_assert!(!rewrite.text.contains(&plain));
                prop_assert!(rewrite.text.contains(&split));
            }
        }

        #[test]
        fn prop_each_name_applied_once(
            names in prop::collection::vec(protocol_name(), 1..6),
        ) {
            let input: String = names
                .iter()
                .map(|name| format!(" protocol {name} {{ }}\n"))
                .collect();
            let rewrite = rewrite_with_report(&input);

            let mut unique: Vec<String> = Vec::new();
            for name in &names {
                if !unique.contains(name) {
                    unique.push(name.clone());
                }
            }

            prop_assert_eq!(&rewrite.report.names, &unique);
            prop_assert_eq!(rewrite.report.total_replacements(), names.len());
        }
    }
}
