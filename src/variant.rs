use crate::config::ResolvedTheme;
use crate::css::Rule;
use std::collections::BTreeMap;

const PSEUDO_CLASSES: &[(&str, &str)] = &[
    ("hover", "hover"),
    ("focus", "focus"),
    ("focus-within", "focus-within"),
    ("focus-visible", "focus-visible"),
    ("active", "active"),
    ("visited", "visited"),
    ("target", "target"),
    ("first", "first-child"),
    ("last", "last-child"),
    ("odd", "nth-child(odd)"),
    ("even", "nth-child(even)"),
    ("disabled", "disabled"),
    ("checked", "checked"),
];

const PSEUDO_ELEMENTS: &[(&str, &str)] = &[
    ("before", "before"),
    ("after", "after"),
    ("placeholder", "placeholder"),
    ("file", "file-selector-button"),
    ("first-line", "first-line"),
    ("first-letter", "first-letter"),
    ("backdrop", "backdrop"),
    ("selection", "selection"),
];

const MEDIA_PREFERENCES: &[(&str, &str)] = &[
    ("dark", "prefers-color-scheme: dark"),
    ("motion-reduce", "prefers-reduced-motion: reduce"),
    ("motion-safe", "prefers-reduced-motion: no-preference"),
    ("contrast-more", "prefers-contrast: more"),
    ("contrast-less", "prefers-contrast: less"),
    ("forced-colors", "forced-colors: active"),
    ("portrait", "orientation: portrait"),
    ("landscape", "orientation: landscape"),
    ("print", "print"),
];

const ARIA_STATES: &[&str] = &[
    "busy", "checked", "disabled", "expanded", "hidden", "pressed", "readonly", "required",
    "selected",
];

/// What a variant did to one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Single(Rule),
    /// The rule was split in two; the second is a new, independent branch.
    Fork(Rule, Rule),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    PseudoClass { name: String, selector: String },
    PseudoElement { name: String, element: String },
    /// Styles the element's pseudo-element and that of every descendant.
    ForkingPseudoElement { name: String, element: String },
    Media { name: String, query: String },
    Breakpoint { name: String, width: String },
    /// `min-[...]` / `max-[...]`; `feature` is `min-width` or `max-width`.
    ArbitraryBreakpoint { name: String, feature: String },
    Supports { name: String },
    Attribute { name: String, selector: String },
    /// `aria-[...]` / `data-[...]`.
    ArbitraryAttribute { name: String, prefix: String },
}

impl Variant {
    pub fn name(&self) -> &str {
        match self {
            Variant::PseudoClass { name, .. }
            | Variant::PseudoElement { name, .. }
            | Variant::ForkingPseudoElement { name, .. }
            | Variant::Media { name, .. }
            | Variant::Breakpoint { name, .. }
            | Variant::ArbitraryBreakpoint { name, .. }
            | Variant::Supports { name }
            | Variant::Attribute { name, .. }
            | Variant::ArbitraryAttribute { name, .. } => name,
        }
    }

    fn takes_arbitrary(&self) -> bool {
        matches!(
            self,
            Variant::ArbitraryBreakpoint { .. }
                | Variant::Supports { .. }
                | Variant::ArbitraryAttribute { .. }
        )
    }

    /// Rewrites `rule` for this variant. `None` rejects the token: keyword
    /// variants refuse bracket text, bracket variants require it, and no
    /// variant takes a `/` modifier.
    pub fn apply(&self, arbitrary: Option<&str>, modifier: Option<&str>, mut rule: Rule) -> Option<Applied> {
        if modifier.is_some() || arbitrary.is_some() != self.takes_arbitrary() {
            return None;
        }

        match self {
            Variant::PseudoClass { selector, .. } => rule.pseudo_classes.push(selector.clone()),
            Variant::PseudoElement { element, .. } => rule.pseudo_elements.push(element.clone()),
            Variant::ForkingPseudoElement { element, .. } => {
                rule.pseudo_elements.push(element.clone());
                let mut descendants = rule.clone();
                descendants.child_combinator = Some("*".to_string());
                return Some(Applied::Fork(rule, descendants));
            }
            Variant::Media { query, .. } => rule.media_queries.push(query.clone()),
            Variant::Breakpoint { width, .. } => {
                rule.media_queries.push(format!("min-width: {}", width))
            }
            Variant::ArbitraryBreakpoint { feature, .. } => {
                rule.media_queries
                    .push(format!("{}: {}", feature, arbitrary?))
            }
            Variant::Supports { .. } => rule.supports_statements.push(arbitrary?.to_string()),
            Variant::Attribute { selector, .. } => rule.attribute_selectors.push(selector.clone()),
            Variant::ArbitraryAttribute { prefix, .. } => rule
                .attribute_selectors
                .push(format!("[{}-{}]", prefix, arbitrary?)),
        }
        Some(Applied::Single(rule))
    }
}

pub fn default_variants(screens: &BTreeMap<String, String>) -> Vec<Variant> {
    let mut variants = Vec::new();
    variants.extend(PSEUDO_CLASSES.iter().map(|(name, selector)| Variant::PseudoClass {
        name: name.to_string(),
        selector: selector.to_string(),
    }));
    variants.extend(PSEUDO_ELEMENTS.iter().map(|(name, element)| Variant::PseudoElement {
        name: name.to_string(),
        element: element.to_string(),
    }));
    variants.push(Variant::ForkingPseudoElement {
        name: "marker".to_string(),
        element: "marker".to_string(),
    });
    variants.extend(MEDIA_PREFERENCES.iter().map(|(name, query)| Variant::Media {
        name: name.to_string(),
        query: query.to_string(),
    }));
    variants.push(Variant::ArbitraryBreakpoint {
        name: "min".to_string(),
        feature: "min-width".to_string(),
    });
    variants.push(Variant::ArbitraryBreakpoint {
        name: "max".to_string(),
        feature: "max-width".to_string(),
    });
    variants.push(Variant::Supports {
        name: "supports".to_string(),
    });
    variants.push(Variant::Attribute {
        name: "open".to_string(),
        selector: "[open]".to_string(),
    });
    variants.extend(ARIA_STATES.iter().map(|state| Variant::Attribute {
        name: format!("aria-{}", state),
        selector: format!("[aria-{}=\"true\"]", state),
    }));
    for prefix in ["aria", "data"] {
        variants.push(Variant::ArbitraryAttribute {
            name: prefix.to_string(),
            prefix: prefix.to_string(),
        });
    }
    // Built-in variant names cannot be taken over by a theme screen.
    for (name, width) in screens {
        if variants.iter().any(|variant| variant.name() == name) {
            tracing::warn!(screen = %name, "screen name shadows a built-in variant, skipping");
            continue;
        }
        variants.push(Variant::Breakpoint {
            name: name.clone(),
            width: width.clone(),
        });
    }
    variants
}

/// Immutable name → variant table. Later entries win on duplicate names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRegistry {
    variants: BTreeMap<String, Variant>,
}

impl VariantRegistry {
    pub fn new(variants: Vec<Variant>) -> Self {
        Self {
            variants: variants
                .into_iter()
                .map(|variant| (variant.name().to_string(), variant))
                .collect(),
        }
    }

    pub fn from_theme(theme: &ResolvedTheme) -> Self {
        Self::new(default_variants(&theme.screens))
    }

    pub fn with_defaults() -> Self {
        Self::from_theme(&ResolvedTheme::default())
    }

    pub fn lookup(&self, name: &str) -> Option<&Variant> {
        self.variants.get(name)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
