//! Literal rewrite rules, one per discovered protocol name

/// Literal find-and-replace-all rule for a single protocol name
///
/// Matches ` protocol <name> {` and replaces it with
/// ` protocol <name>{ }\n extension <name> {`. The name is never
/// interpreted as a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    name: String,
    pattern: String,
    replacement: String,
}

impl RewriteRule {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let pattern = format!(" protocol {name} {{");
        let replacement = format!(" protocol {name}{{ }}\n extension {name} {{");
        Self {
            name,
            pattern,
            replacement,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The literal text this rule looks for
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The literal text each match is replaced with
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Pure: Replace every occurrence of the pattern in `text`
    ///
    /// Returns the rewritten text together with the number of occurrences
    /// that were replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = text.matches(self.pattern.as_str()).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        (text.replace(&self.pattern, &self.replacement), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_literals() {
        let rule = RewriteRule::new("Sample");
        assert_eq!(rule.name(), "Sample");
        assert_eq!(rule.pattern(), " protocol Sample {");
        assert_eq!(rule.replacement(), " protocol Sample{ }\n extension Sample {");
    }

    #[test]
    fn test_apply_replaces_all_occurrences() {
        let rule = RewriteRule::new("X");
        let (text, count) = rule.apply("a protocol X { } b protocol X { }");

        assert_eq!(count, 2);
        assert_eq!(
            text,
            "a protocol X{ }\n extension X { } b protocol X{ }\n extension X { }"
        );
    }

    #[test]
    fn test_apply_without_match_is_identity() {
        let rule = RewriteRule::new("Missing");
        let (text, count) = rule.apply(" protocol Other { }");

        assert_eq!(count, 0);
        assert_eq!(text, " protocol Other { }");
    }

    #[test]
    fn test_apply_treats_name_literally() {
        let rule = RewriteRule::new("A.*");
        let (_, count) = rule.apply(" protocol AB {");
        assert_eq!(count, 0);

        let (text, count) = rule.apply(" protocol A.* {");
        assert_eq!(count, 1);
        assert_eq!(text, " protocol A.*{ }\n extension A.* {");
    }

    #[test]
    fn test_rewritten_text_is_not_matched_again() {
        let rule = RewriteRule::new("X");
        let (once, _) = rule.apply(" protocol X {");
        let (twice, count) = rule.apply(&once);

        assert_eq!(count, 0);
        assert_eq!(once, twice);
    }
}
