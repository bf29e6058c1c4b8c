//! Error-message templates with named placeholders.
//!
//! Each expression variant exposes a closed set of placeholders (`{field}`,
//! `{value}`, ...) filled from the variant's own data. Rendering is total:
//! a placeholder the variant does not provide stays in the output verbatim,
//! `{{` / `}}` escape to literal braces, and malformed syntax is passed
//! through unchanged rather than rejected. A user typo in a message template
//! must never abort an evaluation run.

use smallvec::SmallVec;

/// Placeholder table for one render.
///
/// Placeholder names are static by construction; no variant exposes more than
/// six, so the table lives inline.
#[derive(Debug, Default)]
pub(crate) struct TemplateVars {
    entries: SmallVec<[(&'static str, String); 6]>,
}

impl TemplateVars {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add one placeholder value.
    #[must_use]
    pub(crate) fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((name, value.into()));
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Substitute this table into `template`.
    pub(crate) fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;

        loop {
            let Some(pos) = rest.find(['{', '}']) else {
                out.push_str(rest);
                return out;
            };
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if let Some(after) = tail.strip_prefix("{{") {
                out.push('{');
                rest = after;
            } else if let Some(after) = tail.strip_prefix("}}") {
                out.push('}');
                rest = after;
            } else if let Some(after) = tail.strip_prefix('}') {
                // Unpaired closing brace; emit as-is.
                out.push('}');
                rest = after;
            } else {
                // `tail` starts with a single `{`.
                match tail[1..].find(['{', '}']) {
                    Some(end) if tail.as_bytes()[1 + end] == b'}' => {
                        let name = &tail[1..1 + end];
                        match self.get(name) {
                            Some(value) => out.push_str(value),
                            // Unknown placeholder; keep it visible.
                            None => {
                                out.push('{');
                                out.push_str(name);
                                out.push('}');
                            }
                        }
                        rest = &tail[2 + end..];
                    }
                    _ => {
                        // `{` never closed before the next brace; emit as-is.
                        out.push('{');
                        rest = &tail[1..];
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn substitutes_known_placeholders() {
        let vars = TemplateVars::new()
            .with("field", "age")
            .with("value", "25");
        assert_eq!(
            vars.render("{field} must not be {value}"),
            "age must not be 25"
        );
    }

    #[test]
    fn repeated_placeholder_renders_each_time() {
        let vars = TemplateVars::new().with("field", "x");
        assert_eq!(vars.render("{field}, again: {field}"), "x, again: x");
    }

    #[test]
    fn unknown_placeholder_stays_verbatim() {
        let vars = TemplateVars::new().with("field", "age");
        assert_eq!(vars.render("{field}: {wat}"), "age: {wat}");
    }

    #[test]
    fn escaped_braces_become_literal() {
        let vars = TemplateVars::new().with("field", "age");
        assert_eq!(vars.render("{{field}} is {field}"), "{field} is age");
        assert_eq!(vars.render("{{{field}}}"), "{age}");
    }

    #[test]
    fn malformed_syntax_passes_through() {
        let vars = TemplateVars::new().with("a", "1");
        assert_eq!(vars.render("open {a"), "open {a");
        assert_eq!(vars.render("lone } brace"), "lone } brace");
        assert_eq!(vars.render("{x{a}"), "{x1");
        assert_eq!(vars.render("{}"), "{}");
    }

    #[test]
    fn empty_table_renders_placeholders_verbatim() {
        assert_eq!(
            TemplateVars::new().render("{field} stays"),
            "{field} stays"
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let vars = TemplateVars::new().with("field", "色");
        assert_eq!(vars.render("{field}が不正です"), "色が不正です");
    }

    proptest! {
        #[test]
        fn brace_free_text_renders_unchanged(text in "[^{}]*") {
            let vars = TemplateVars::new().with("field", "x");
            prop_assert_eq!(vars.render(&text), text);
        }

        #[test]
        fn rendering_never_panics(text in ".*") {
            let vars = TemplateVars::new().with("field", "x");
            let _ = vars.render(&text);
        }
    }
}
