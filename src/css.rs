use std::fmt;

const INDENT: &str = "  ";

/// Media types that are written bare (`@media print`) instead of as a
/// parenthesised feature query.
const MEDIA_TYPES: [&str; 3] = ["all", "print", "screen"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// One generated CSS rule before it is turned into text.
///
/// `declarations` are set once by the base class; variants only ever touch
/// the selector-shaping fields and the wrapping at-rule lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub pseudo_classes: Vec<String>,
    pub pseudo_elements: Vec<String>,
    pub child_combinator: Option<String>,
    pub media_queries: Vec<String>,
    pub supports_statements: Vec<String>,
    pub attribute_selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedRule {
    pub rule: Rule,
    pub order: i32,
}

impl OrderedRule {
    pub fn new(rule: Rule, order: i32) -> Self {
        Self { rule, order }
    }

    pub fn from_declarations(declarations: Vec<Declaration>, order: i32) -> Self {
        Self {
            rule: Rule {
                declarations,
                ..Rule::default()
            },
            order,
        }
    }

    pub fn selector(&self) -> &str {
        &self.rule.selector
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AtRule {
    Media,
    Supports,
}

impl Rule {
    /// The full selector: escaped class, attribute selectors, optional
    /// descendant combinator, then pseudo-classes and pseudo-elements.
    pub fn selector_text(&self) -> String {
        let mut out = String::with_capacity(self.selector.len() + 16);
        out.push('.');
        out.push_str(&escape_selector(&self.selector));
        for attribute in &self.attribute_selectors {
            out.push_str(attribute);
        }
        if let Some(combinator) = self.child_combinator.as_deref() {
            out.push(' ');
            out.push_str(combinator);
        }
        for pseudo in &self.pseudo_classes {
            out.push(':');
            out.push_str(pseudo);
        }
        for pseudo in &self.pseudo_elements {
            out.push_str("::");
            out.push_str(pseudo);
        }
        out
    }

    pub fn render(&self) -> String {
        let mut block = format!("{} {{\n", self.selector_text());
        for declaration in &self.declarations {
            block.push_str(INDENT);
            block.push_str(&declaration.property);
            block.push_str(": ");
            block.push_str(&declaration.value);
            block.push_str(";\n");
        }
        block.push_str("}\n");

        let wrappers = self
            .media_queries
            .iter()
            .map(|query| (AtRule::Media, query.as_str()))
            .chain(
                self.supports_statements
                    .iter()
                    .map(|statement| (AtRule::Supports, statement.as_str())),
            )
            .collect::<Vec<_>>();
        wrap_in_at_rules(&wrappers, &block)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn at_rule_header(kind: AtRule, condition: &str) -> String {
    match kind {
        AtRule::Media if MEDIA_TYPES.contains(&condition) => format!("@media {} {{", condition),
        AtRule::Media => format!("@media ({}) {{", condition),
        AtRule::Supports => format!("@supports ({}) {{", condition),
    }
}

/// Nests `block` inside one at-rule per wrapper, first wrapper outermost,
/// indenting one level per wrapper.
fn wrap_in_at_rules(wrappers: &[(AtRule, &str)], block: &str) -> String {
    if wrappers.is_empty() {
        return block.to_string();
    }

    let depth = wrappers.len();
    let mut out = String::with_capacity(block.len() + depth * 32);
    for (level, (kind, condition)) in wrappers.iter().enumerate() {
        out.push_str(&INDENT.repeat(level));
        out.push_str(&at_rule_header(*kind, condition));
        out.push('\n');
    }
    let padding = INDENT.repeat(depth);
    for line in block.lines() {
        if !line.is_empty() {
            out.push_str(&padding);
            out.push_str(line);
        }
        out.push('\n');
    }
    for level in (0..depth).rev() {
        out.push_str(&INDENT.repeat(level));
        out.push_str("}\n");
    }
    out
}

/// Escapes the characters of a class token that would otherwise end the
/// class selector: `[`, `]` and `:`.
pub fn escape_selector(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() * 2);
    for ch in class.chars() {
        match ch {
            '[' => escaped.push_str("\\["),
            ']' => escaped.push_str("\\]"),
            ':' => escaped.push_str("\\:"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{Declaration, Rule, escape_selector};

    fn rule(selector: &str, property: &str, value: &str) -> Rule {
        Rule {
            selector: selector.to_string(),
            declarations: vec![Declaration::new(property, value)],
            ..Rule::default()
        }
    }

    #[test]
    fn renders_plain_rule() {
        let css = rule("aspect-video", "aspect-ratio", "16 / 9").render();
        assert_eq!(css, ".aspect-video {\n  aspect-ratio: 16 / 9;\n}\n");
    }

    #[test]
    fn escapes_brackets_and_colons_only() {
        assert_eq!(
            escape_selector("md:aspect-[4/3]"),
            "md\\:aspect-\\[4/3\\]"
        );
        assert_eq!(escape_selector("basis-1/2"), "basis-1/2");
    }

    #[test]
    fn renders_nested_media_queries_with_growing_indentation() {
        let mut css = rule("x", "display", "none");
        css.media_queries = vec![
            "min-width: 768px".to_string(),
            "prefers-color-scheme: dark".to_string(),
        ];

        let expected = "\
@media (min-width: 768px) {
  @media (prefers-color-scheme: dark) {
    .x {
      display: none;
    }
  }
}
";
        assert_eq!(css.render(), expected);
    }

    #[test]
    fn supports_statements_nest_inside_media_queries() {
        let mut css = rule("supports-[display:grid]:md:grid", "display", "grid");
        css.media_queries = vec!["min-width: 768px".to_string()];
        css.supports_statements = vec!["display:grid".to_string()];

        let rendered = css.render();
        let media = rendered.find("@media (min-width: 768px) {").expect("media wrapper");
        let supports = rendered
            .find("  @supports (display:grid) {")
            .expect("supports wrapper");
        assert!(media < supports);
        assert!(rendered.contains("    .supports-\\[display\\:grid\\]\\:md\\:grid {"));
    }

    #[test]
    fn print_media_type_is_not_parenthesised() {
        let mut css = rule("print:hidden", "display", "none");
        css.media_queries = vec!["print".to_string()];
        assert!(css.render().starts_with("@media print {\n"));
    }

    #[test]
    fn selector_chains_pseudo_classes_and_elements() {
        let mut css = rule("x", "color", "red");
        css.pseudo_classes = vec!["hover".to_string(), "focus".to_string()];
        css.pseudo_elements = vec!["before".to_string()];
        assert_eq!(css.selector_text(), ".x:hover:focus::before");
    }

    #[test]
    fn child_combinator_follows_attributes() {
        let mut css = rule("x", "color", "red");
        css.attribute_selectors = vec!["[open]".to_string()];
        css.child_combinator = Some("*".to_string());
        css.pseudo_elements = vec!["marker".to_string()];
        assert_eq!(css.selector_text(), ".x[open] *::marker");
    }

    #[test]
    fn display_matches_render() {
        let css = rule("grow", "flex-grow", "1");
        assert_eq!(css.to_string(), css.render());
    }
}
