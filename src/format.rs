use crate::css::OrderedRule;
use crate::engine::compile_token;
use crate::order::compare_rules;
use crate::registry::BaseClassRegistry;
use crate::variant::VariantRegistry;
use std::cmp::Ordering;

const CLASS_ATTR: &str = "class=\"";

/// Rewrites every `class="..."` attribute in `text` with its classes in
/// generated-CSS order. Everything outside the attribute values is copied
/// unchanged.
pub fn format_text(text: &str, variants: &VariantRegistry, classes: &BaseClassRegistry) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut consumed = 0usize;

    while let Some(offset) = rest.find(CLASS_ATTR) {
        let value_start = offset + CLASS_ATTR.len();
        if !is_attr_boundary(text, consumed + offset) {
            out.push_str(&rest[..value_start]);
            rest = &rest[value_start..];
            consumed += value_start;
            continue;
        }
        let Some(len) = rest[value_start..].find('"') else {
            break;
        };
        out.push_str(&rest[..value_start]);
        out.push_str(&sort_class_list(
            &rest[value_start..value_start + len],
            variants,
            classes,
        ));
        out.push('"');
        let next = value_start + len + 1;
        rest = &rest[next..];
        consumed += next;
    }
    out.push_str(rest);
    out
}

/// Sorts a whitespace-separated class list. Classes that produce no rule
/// come first in their written order.
pub fn sort_class_list(
    list: &str,
    variants: &VariantRegistry,
    classes: &BaseClassRegistry,
) -> String {
    let mut keyed = list
        .split_whitespace()
        .map(|class| (class, sort_key(class, variants, classes)))
        .collect::<Vec<_>>();
    keyed.sort_by(|(_, left), (_, right)| match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => compare_rules(left, right),
    });
    keyed
        .into_iter()
        .map(|(class, _)| class)
        .collect::<Vec<_>>()
        .join(" ")
}

fn sort_key(
    class: &str,
    variants: &VariantRegistry,
    classes: &BaseClassRegistry,
) -> Option<OrderedRule> {
    match compile_token(class, variants, classes) {
        Ok(rules) => rules.into_iter().next(),
        Err(err) => {
            tracing::debug!(class, error = %err, "unresolved class sorts first");
            None
        }
    }
}

// `data-class="` and `xclass="` are not class attributes.
fn is_attr_boundary(text: &str, idx: usize) -> bool {
    match text[..idx].chars().next_back() {
        None => true,
        Some(prev) => !(prev.is_ascii_alphanumeric() || prev == '-' || prev == '_' || prev == ':'),
    }
}
