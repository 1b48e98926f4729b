//! Turns parsed tokens into rules.
//!
//! The base class is resolved first, then the variants are folded over the
//! growing list of rules starting with the one written closest to the
//! class, so `md:hover:block` applies `hover` before `md`. A variant may fork
//! a rule in two; every later variant is applied to both branches.

use crate::css::OrderedRule;
use crate::order::{render_all, sort_rules};
use crate::registry::BaseClassRegistry;
use crate::tokenizer::{ParsedToken, TokenPart, TokenizeError, parse_one, split_tokens};
use crate::variant::{Applied, VariantRegistry};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown class `{0}`")]
    UnknownClass(String),
    #[error("class `{0}` does not take arbitrary values")]
    UnknownArbitraryClass(String),
    #[error("class `{class}` does not accept the `/{modifier}` modifier")]
    UnsupportedModifier { class: String, modifier: String },
    #[error("`{text}` is not a usable arbitrary value for `{class}`")]
    InvalidArbitraryValue { class: String, text: String },
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
    #[error("variant `{0}` rejected the class")]
    VariantRejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

pub fn resolve(
    token: &ParsedToken,
    variants: &VariantRegistry,
    classes: &BaseClassRegistry,
) -> Result<Vec<OrderedRule>, ResolveError> {
    let mut base = resolve_class(&token.class, classes)?;
    base.rule.selector = token.source.clone();

    let mut rules = vec![base];
    for part in token.variants.iter().rev() {
        let variant = variants
            .lookup(&part.name)
            .ok_or_else(|| ResolveError::UnknownVariant(part.name.clone()))?;
        tracing::trace!(variant = %part.name, branches = rules.len(), "applying variant");

        // Branches forked by this variant are appended past `branches` and
        // only see the variants that follow.
        let branches = rules.len();
        for idx in 0..branches {
            let rule = std::mem::take(&mut rules[idx].rule);
            match variant.apply(part.arbitrary_text(), part.modifier_text(), rule) {
                Some(Applied::Single(rule)) => rules[idx].rule = rule,
                Some(Applied::Fork(rule, forked)) => {
                    rules[idx].rule = rule;
                    let order = rules[idx].order;
                    rules.push(OrderedRule::new(forked, order));
                }
                None => return Err(ResolveError::VariantRejected(part.name.clone())),
            }
        }
    }
    Ok(rules)
}

fn resolve_class(part: &TokenPart, classes: &BaseClassRegistry) -> Result<OrderedRule, ResolveError> {
    match (part.arbitrary_text(), part.modifier_text()) {
        (Some(text), modifier) => {
            let class = classes
                .lookup_arbitrary(&part.name)
                .ok_or_else(|| ResolveError::UnknownArbitraryClass(part.name.clone()))?;
            if let Some(rule) = class.build_from_arbitrary(text, modifier) {
                return Ok(rule);
            }
            match modifier {
                Some(modifier) if class.build_from_arbitrary(text, None).is_some() => {
                    Err(ResolveError::UnsupportedModifier {
                        class: part.name.clone(),
                        modifier: modifier.to_string(),
                    })
                }
                _ => Err(ResolveError::InvalidArbitraryValue {
                    class: part.name.clone(),
                    text: text.to_string(),
                }),
            }
        }
        (None, None) => classes
            .lookup(&part.name)
            .cloned()
            .ok_or_else(|| ResolveError::UnknownClass(part.name.clone())),
        (None, Some(modifier)) => classes.lookup_modified(&part.name, modifier).ok_or_else(|| {
            if classes.lookup(&part.name).is_some() {
                ResolveError::UnsupportedModifier {
                    class: part.name.clone(),
                    modifier: modifier.to_string(),
                }
            } else {
                ResolveError::UnknownClass(format!("{}/{}", part.name, modifier))
            }
        }),
    }
}

/// Tokenizes and resolves a single class token.
pub fn compile_token(
    token: &str,
    variants: &VariantRegistry,
    classes: &BaseClassRegistry,
) -> Result<Vec<OrderedRule>, CompileError> {
    let parsed = parse_one(token)?;
    Ok(resolve(&parsed, variants, classes)?)
}

/// Every rule a line produces, sorted. Tokens that fail to tokenize or
/// resolve are skipped.
pub fn compile_line(
    line: &str,
    variants: &VariantRegistry,
    classes: &BaseClassRegistry,
) -> Vec<OrderedRule> {
    let mut rules = Vec::new();
    for token in split_tokens(line) {
        match compile_token(token, variants, classes) {
            Ok(generated) => rules.extend(generated),
            Err(err) => tracing::debug!(token, error = %err, "skipping token"),
        }
    }
    sort_rules(&mut rules);
    rules
}

pub fn parse_line_to_css(
    line: &str,
    variants: &VariantRegistry,
    classes: &BaseClassRegistry,
) -> String {
    render_all(&compile_line(line, variants, classes))
}
