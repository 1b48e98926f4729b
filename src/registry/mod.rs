//! Base class registry.
//!
//! Every base class belongs to one of a closed set of kinds. A kind knows how
//! to expand itself into its ready-made classes and, when it accepts
//! arbitrary values, how to build a rule from `name-[text]`.

pub mod defaults;

use crate::config::ResolvedTheme;
use crate::css::{Declaration, OrderedRule};
use std::collections::BTreeMap;

const KEYWORD_OFFSET: i32 = 0;
const NUMBER_OFFSET: i32 = 1;
const FRACTION_OFFSET: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseClass {
    /// `prefix-key` for each value; the empty key names the bare prefix and
    /// an empty prefix names the bare key.
    Keyword {
        prefix: String,
        property: String,
        values: Vec<(String, String)>,
        order: i32,
        arbitrary: bool,
    },
    /// Spacing steps (`n / 4` rem), fractions (percentages) and keywords.
    NumericScale {
        prefix: String,
        property: String,
        keywords: Vec<(String, String)>,
        order: i32,
    },
    /// One class per palette colour; takes an opacity modifier.
    ColorScale {
        prefix: String,
        property: String,
        order: i32,
    },
    /// `[property:value;...]` with no name.
    ArbitraryPassthrough { order: i32 },
}

impl BaseClass {
    pub fn order(&self) -> i32 {
        match self {
            BaseClass::Keyword { order, .. }
            | BaseClass::NumericScale { order, .. }
            | BaseClass::ColorScale { order, .. }
            | BaseClass::ArbitraryPassthrough { order } => *order,
        }
    }

    /// The name `name-[...]` must use to reach this class, if any.
    pub fn arbitrary_name(&self) -> Option<&str> {
        match self {
            BaseClass::Keyword {
                prefix, arbitrary, ..
            } => arbitrary.then_some(prefix.as_str()),
            BaseClass::NumericScale { prefix, .. } | BaseClass::ColorScale { prefix, .. } => {
                Some(prefix.as_str())
            }
            BaseClass::ArbitraryPassthrough { .. } => Some(""),
        }
    }

    pub fn produce_defaults(&self, palette: &BTreeMap<String, String>) -> Vec<(String, OrderedRule)> {
        match self {
            BaseClass::Keyword {
                prefix,
                property,
                values,
                order,
                ..
            } => values
                .iter()
                .map(|(key, value)| {
                    (
                        join_class_name(prefix, key),
                        single_declaration(property, value, *order),
                    )
                })
                .collect(),
            BaseClass::NumericScale {
                prefix,
                property,
                keywords,
                order,
            } => {
                let mut out = Vec::new();
                for step in defaults::SPACING_STEPS {
                    let Some(value) = spacing_value(step) else {
                        continue;
                    };
                    out.push((
                        join_class_name(prefix, step),
                        single_declaration(property, &value, order + NUMBER_OFFSET),
                    ));
                }
                for fraction in defaults::FRACTIONS {
                    let Some(value) = fraction_value(fraction) else {
                        continue;
                    };
                    out.push((
                        join_class_name(prefix, fraction),
                        single_declaration(property, &value, order + FRACTION_OFFSET),
                    ));
                }
                for (key, value) in keywords {
                    out.push((
                        join_class_name(prefix, key),
                        single_declaration(property, value, order + KEYWORD_OFFSET),
                    ));
                }
                out
            }
            BaseClass::ColorScale {
                prefix,
                property,
                order,
            } => palette
                .iter()
                .map(|(color, value)| {
                    (
                        join_class_name(prefix, color),
                        single_declaration(property, value, *order),
                    )
                })
                .collect(),
            BaseClass::ArbitraryPassthrough { .. } => Vec::new(),
        }
    }

    /// Builds a fresh rule from bracket text. `None` when the kind takes no
    /// arbitrary values, the text is unusable, or a modifier was given to a
    /// kind that has no use for one.
    pub fn build_from_arbitrary(&self, text: &str, modifier: Option<&str>) -> Option<OrderedRule> {
        match self {
            BaseClass::Keyword {
                property,
                order,
                arbitrary: true,
                ..
            }
            | BaseClass::NumericScale {
                property, order, ..
            } => {
                if modifier.is_some() {
                    return None;
                }
                Some(single_declaration(property, text, *order))
            }
            BaseClass::Keyword { .. } => None,
            BaseClass::ColorScale {
                property, order, ..
            } => {
                let value = match modifier {
                    Some(modifier) => with_opacity(text, modifier)?,
                    None => text.to_string(),
                };
                Some(single_declaration(property, &value, *order))
            }
            BaseClass::ArbitraryPassthrough { order } => {
                if modifier.is_some() {
                    return None;
                }
                let declarations = parse_raw_declarations(text)?;
                Some(OrderedRule::from_declarations(declarations, *order))
            }
        }
    }

    /// Applies a `/modifier` to one of this kind's ready-made rules.
    pub fn apply_modifier(&self, rule: &OrderedRule, modifier: &str) -> Option<OrderedRule> {
        let BaseClass::ColorScale { .. } = self else {
            return None;
        };
        let declarations = rule
            .rule
            .declarations
            .iter()
            .map(|declaration| {
                with_opacity(&declaration.value, modifier)
                    .map(|value| Declaration::new(declaration.property.clone(), value))
            })
            .collect::<Option<Vec<_>>>()?;
        Some(OrderedRule::from_declarations(declarations, rule.order))
    }
}

fn join_class_name(prefix: &str, key: &str) -> String {
    match (prefix.is_empty(), key.is_empty()) {
        (true, _) => key.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}-{}", prefix, key),
    }
}

fn single_declaration(property: &str, value: &str, order: i32) -> OrderedRule {
    OrderedRule::from_declarations(vec![Declaration::new(property, value)], order)
}

fn spacing_value(step: &str) -> Option<String> {
    let step = step.parse::<f64>().ok()?;
    Some(format!("{}rem", step / 4.0))
}

fn fraction_value(fraction: &str) -> Option<String> {
    let (numerator, denominator) = fraction.split_once('/')?;
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(format!("{}%", numerator * 100.0 / denominator))
}

/// `50` → `50%`, `[0.35]` → `0.35`.
fn opacity_amount(modifier: &str) -> Option<String> {
    if let Some(raw) = modifier.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if raw.is_empty() {
            return None;
        }
        return Some(raw.to_string());
    }
    if modifier.is_empty() || !modifier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let percent = modifier.parse::<u8>().ok()?;
    if percent > 100 {
        return None;
    }
    Some(format!("{}%", percent))
}

fn with_opacity(color: &str, modifier: &str) -> Option<String> {
    let amount = opacity_amount(modifier)?;
    Some(format!(
        "color-mix(in srgb, {} {}, transparent)",
        color, amount
    ))
}

/// `color:red;display:block` → two declarations. Every non-empty segment
/// needs a property and a value.
fn parse_raw_declarations(text: &str) -> Option<Vec<Declaration>> {
    let mut declarations = Vec::new();
    for segment in text.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (property, value) = segment.split_once(':')?;
        let (property, value) = (property.trim(), value.trim());
        if property.is_empty() || value.is_empty() {
            return None;
        }
        declarations.push(Declaration::new(property, value));
    }
    if declarations.is_empty() {
        return None;
    }
    Some(declarations)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    rule: OrderedRule,
    class: usize,
}

/// Immutable lookup tables built once from a list of base classes. Later
/// classes win when two produce the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseClassRegistry {
    classes: Vec<BaseClass>,
    ready_made: BTreeMap<String, Entry>,
    arbitrary: BTreeMap<String, usize>,
}

impl BaseClassRegistry {
    pub fn new(classes: Vec<BaseClass>, palette: &BTreeMap<String, String>) -> Self {
        let mut ready_made = BTreeMap::new();
        let mut arbitrary = BTreeMap::new();

        for (idx, class) in classes.iter().enumerate() {
            for (name, rule) in class.produce_defaults(palette) {
                ready_made.insert(name, Entry { rule, class: idx });
            }
            if let Some(name) = class.arbitrary_name() {
                arbitrary.insert(name.to_string(), idx);
            }
        }

        Self {
            classes,
            ready_made,
            arbitrary,
        }
    }

    pub fn from_theme(theme: &ResolvedTheme) -> Self {
        Self::new(defaults::default_base_classes(), &theme.colors)
    }

    pub fn with_defaults() -> Self {
        Self::from_theme(&ResolvedTheme::default())
    }

    pub fn lookup(&self, name: &str) -> Option<&OrderedRule> {
        self.ready_made.get(name).map(|entry| &entry.rule)
    }

    pub fn lookup_arbitrary(&self, name: &str) -> Option<&BaseClass> {
        self.arbitrary.get(name).map(|idx| &self.classes[*idx])
    }

    /// Resolves `name/modifier`: a ready-made class spelled with the slash
    /// (fractions such as `basis-1/2`) wins, otherwise the modifier is handed
    /// to the kind that produced `name`.
    pub fn lookup_modified(&self, name: &str, modifier: &str) -> Option<OrderedRule> {
        if let Some(entry) = self.ready_made.get(&format!("{}/{}", name, modifier)) {
            return Some(entry.rule.clone());
        }
        let entry = self.ready_made.get(name)?;
        self.classes[entry.class].apply_modifier(&entry.rule, modifier)
    }

    /// Every ready-made class, by name.
    pub fn ready_made(&self) -> impl Iterator<Item = (&str, &OrderedRule)> {
        self.ready_made
            .iter()
            .map(|(name, entry)| (name.as_str(), &entry.rule))
    }

    pub fn len(&self) -> usize {
        self.ready_made.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready_made.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseClass, BaseClassRegistry};
    use crate::css::Declaration;
    use std::collections::BTreeMap;

    fn declaration(registry: &BaseClassRegistry, name: &str) -> Declaration {
        registry
            .lookup(name)
            .unwrap_or_else(|| panic!("{} should be registered", name))
            .rule
            .declarations[0]
            .clone()
    }

    #[test]
    fn default_registry_contains_keyword_classes() {
        let registry = BaseClassRegistry::with_defaults();
        assert_eq!(
            declaration(&registry, "aspect-video"),
            Declaration::new("aspect-ratio", "16 / 9")
        );
        assert_eq!(
            declaration(&registry, "hidden"),
            Declaration::new("display", "none")
        );
        assert_eq!(
            declaration(&registry, "grow"),
            Declaration::new("flex-grow", "1")
        );
        assert_eq!(
            declaration(&registry, "clear-both"),
            Declaration::new("clear", "both")
        );
        assert_eq!(
            declaration(&registry, "flex-col"),
            Declaration::new("flex-direction", "column")
        );
    }

    #[test]
    fn numeric_scale_produces_rem_and_percent_values() {
        let registry = BaseClassRegistry::with_defaults();
        assert_eq!(declaration(&registry, "basis-0").value, "0rem");
        assert_eq!(declaration(&registry, "basis-1").value, "0.25rem");
        assert_eq!(declaration(&registry, "basis-4").value, "1rem");
        assert_eq!(declaration(&registry, "basis-1/2").value, "50%");
        assert_eq!(declaration(&registry, "basis-full").value, "100%");

        let keyword = registry.lookup("basis-auto").expect("basis-auto").order;
        let number = registry.lookup("basis-4").expect("basis-4").order;
        let fraction = registry.lookup("basis-1/4").expect("basis-1/4").order;
        assert!(keyword < number && number < fraction);
    }

    #[test]
    fn color_scale_uses_palette() {
        let registry = BaseClassRegistry::with_defaults();
        assert_eq!(
            declaration(&registry, "bg-red-500"),
            Declaration::new("background-color", "#ef4444")
        );
        assert_eq!(
            declaration(&registry, "text-zinc-900"),
            Declaration::new("color", "#18181b")
        );
        // text-wrap shares the `text` prefix without clashing.
        assert_eq!(
            declaration(&registry, "text-balance"),
            Declaration::new("text-wrap", "balance")
        );
    }

    #[test]
    fn custom_palette_replaces_colors() {
        let mut palette = BTreeMap::new();
        palette.insert("brand".to_string(), "#123456".to_string());
        let registry = BaseClassRegistry::new(
            vec![BaseClass::ColorScale {
                prefix: "bg".to_string(),
                property: "background-color".to_string(),
                order: 0,
            }],
            &palette,
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(declaration(&registry, "bg-brand").value, "#123456");
        assert!(registry.lookup("bg-red-500").is_none());
    }

    #[test]
    fn arbitrary_constructors_are_registered_by_prefix() {
        let registry = BaseClassRegistry::with_defaults();
        let aspect = registry.lookup_arbitrary("aspect").expect("aspect takes arbitrary");
        let rule = aspect
            .build_from_arbitrary("4/3", None)
            .expect("aspect builds from arbitrary text");
        assert_eq!(
            rule.rule.declarations,
            vec![Declaration::new("aspect-ratio", "4/3")]
        );
        assert!(registry.lookup_arbitrary("break-after").is_none());
        // `text-[...]` is the colour class, not text-wrap.
        let text = registry.lookup_arbitrary("text").expect("text takes arbitrary");
        assert!(matches!(text, BaseClass::ColorScale { .. }));
    }

    #[test]
    fn passthrough_parses_raw_declarations() {
        let registry = BaseClassRegistry::with_defaults();
        let passthrough = registry.lookup_arbitrary("").expect("passthrough");
        let rule = passthrough
            .build_from_arbitrary("color:red; display : block;", None)
            .expect("valid declarations");
        assert_eq!(
            rule.rule.declarations,
            vec![
                Declaration::new("color", "red"),
                Declaration::new("display", "block"),
            ]
        );
        assert!(passthrough.build_from_arbitrary("nonsense", None).is_none());
    }

    #[test]
    fn modifiers_only_apply_to_colors_and_fractions() {
        let registry = BaseClassRegistry::with_defaults();
        let faded = registry
            .lookup_modified("bg-red-500", "50")
            .expect("colour takes opacity");
        assert_eq!(
            faded.rule.declarations[0].value,
            "color-mix(in srgb, #ef4444 50%, transparent)"
        );
        assert_eq!(
            registry
                .lookup_modified("basis-1", "2")
                .expect("fraction class")
                .rule
                .declarations[0]
                .value,
            "50%"
        );
        assert!(registry.lookup_modified("aspect-video", "2").is_none());
        assert!(registry.lookup_modified("bg-red-500", "150").is_none());
        assert!(registry.lookup_modified("bg-red-500", "+50").is_none());
        assert!(registry.lookup_modified("bg-red-500", "-5").is_none());

        let aspect = registry.lookup_arbitrary("aspect").expect("aspect");
        assert!(aspect.build_from_arbitrary("4/3", Some("2")).is_none());
        let bg = registry.lookup_arbitrary("bg").expect("bg");
        let rule = bg
            .build_from_arbitrary("#fff", Some("[0.25]"))
            .expect("arbitrary colour with opacity");
        assert_eq!(
            rule.rule.declarations[0].value,
            "color-mix(in srgb, #fff 0.25, transparent)"
        );
    }
}
