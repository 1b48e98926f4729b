//! Byte-level tokenizer for class-name tokens.
//!
//! A token is a chain of `:`-separated parts. Every part is a plain name, a
//! `name-[arbitrary]` bracket form, and may carry a `/modifier` suffix. The
//! last part is the base class, every earlier one a variant:
//!
//! ```text
//! md:hover:bg-[#0af]/50
//! ^^ ^^^^^ ^^ ^^^^ ^^
//! |  |     |  |    modifier
//! |  |     |  arbitrary text
//! |  |     class name
//! variants, outermost first
//! ```
//!
//! Arbitrary text runs to the first `]`; nested brackets and escapes are not
//! supported.

use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPart {
    pub name: String,
    pub arbitrary: Option<String>,
    pub modifier: Option<String>,
}

impl TokenPart {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Arbitrary text, with empty brackets treated as no brackets at all.
    pub fn arbitrary_text(&self) -> Option<&str> {
        self.arbitrary.as_deref().filter(|text| !text.is_empty())
    }

    pub fn modifier_text(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    fn is_blank(&self) -> bool {
        self.name.is_empty() && self.arbitrary.is_none() && self.modifier.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    /// The complete token text; it becomes the rule's selector.
    pub source: String,
    /// Variant parts in written order, outermost first.
    pub variants: Vec<TokenPart>,
    pub class: TokenPart,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("empty class token")]
    Empty,
    #[error("dangling `:` separator in `{0}`")]
    DanglingSeparator(String),
    #[error("unterminated arbitrary value in `{0}`")]
    UnterminatedBracket(String),
    #[error("arbitrary value in `{0}` must follow a `-` separator")]
    MissingSeparator(String),
    #[error("unexpected `{found}` after arbitrary value in `{token}`")]
    TrailingAfterBracket { token: String, found: char },
    #[error("empty `/` modifier in `{0}`")]
    EmptyModifier(String),
}

pub fn parse_one(token: &str) -> Result<ParsedToken, TokenizeError> {
    if token.is_empty() {
        return Err(TokenizeError::Empty);
    }

    let mut variants = Vec::new();
    let mut start = 0usize;
    loop {
        let (part, next) = parse_part(token, start)?;
        if part.is_blank() {
            return Err(TokenizeError::DanglingSeparator(token.to_string()));
        }
        match next {
            Some(next) => {
                variants.push(part);
                start = next;
            }
            None => {
                return Ok(ParsedToken {
                    source: token.to_string(),
                    variants,
                    class: part,
                });
            }
        }
    }
}

/// Parses one part starting at `start`. Returns the part and, when it was
/// terminated by `:`, the index the next part starts at; `None` means the
/// input ended and the part is the class.
fn parse_part(token: &str, start: usize) -> Result<(TokenPart, Option<usize>), TokenizeError> {
    let bytes = token.as_bytes();
    let mut idx = start;

    while idx < bytes.len() {
        match bytes[idx] {
            b':' => return Ok((TokenPart::plain(&token[start..idx]), Some(idx + 1))),
            b'[' => return parse_bracket_part(token, start, idx),
            b'/' => {
                let (modifier, next) = scan_modifier(token, idx + 1)?;
                let part = TokenPart {
                    name: token[start..idx].to_string(),
                    arbitrary: None,
                    modifier: Some(modifier),
                };
                return Ok((part, next));
            }
            _ => idx += 1,
        }
    }

    Ok((TokenPart::plain(&token[start..]), None))
}

fn parse_bracket_part(
    token: &str,
    start: usize,
    open: usize,
) -> Result<(TokenPart, Option<usize>), TokenizeError> {
    let name = strip_separator(&token[start..open])
        .ok_or_else(|| TokenizeError::MissingSeparator(token.to_string()))?;
    let close = token[open + 1..]
        .find(']')
        .map(|offset| open + 1 + offset)
        .ok_or_else(|| TokenizeError::UnterminatedBracket(token.to_string()))?;

    let mut part = TokenPart {
        name: name.to_string(),
        arbitrary: Some(token[open + 1..close].to_string()),
        modifier: None,
    };

    let after = close + 1;
    match token[after..].chars().next() {
        None => Ok((part, None)),
        Some(':') => Ok((part, Some(after + 1))),
        Some('/') => {
            let (modifier, next) = scan_modifier(token, after + 1)?;
            part.modifier = Some(modifier);
            Ok((part, next))
        }
        Some(found) => Err(TokenizeError::TrailingAfterBracket {
            token: token.to_string(),
            found,
        }),
    }
}

/// `aspect-` → `aspect`; an empty name stays empty (`[prop:value]`).
fn strip_separator(name: &str) -> Option<&str> {
    if name.is_empty() {
        return Some(name);
    }
    name.strip_suffix('-')
}

/// Modifier text runs until the next `:` or the end of the token.
fn scan_modifier(token: &str, from: usize) -> Result<(String, Option<usize>), TokenizeError> {
    let (text, next) = match token[from..].find(':') {
        Some(offset) => (&token[from..from + offset], Some(from + offset + 1)),
        None => (&token[from..], None),
    };
    if text.is_empty() {
        return Err(TokenizeError::EmptyModifier(token.to_string()));
    }
    Ok((text.to_string(), next))
}

fn is_token_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '"' | '\'' | '`')
}

/// Splits a line of input into candidate tokens on whitespace and quotes.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_token_delimiter)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{TokenPart, TokenizeError, parse_one, split_tokens};

    #[test]
    fn parses_plain_class() {
        let token = parse_one("abc-abc").expect("plain class should parse");
        assert!(token.variants.is_empty());
        assert_eq!(token.class, TokenPart::plain("abc-abc"));
        assert_eq!(token.source, "abc-abc");
    }

    #[test]
    fn parses_arbitrary_class() {
        let token = parse_one("abc-abc-[100]").expect("arbitrary class should parse");
        assert_eq!(token.class.name, "abc-abc");
        assert_eq!(token.class.arbitrary.as_deref(), Some("100"));
        assert_eq!(token.class.modifier, None);
    }

    #[test]
    fn parses_variant_then_class() {
        let token = parse_one("a:b").expect("variant chain should parse");
        assert_eq!(token.variants, vec![TokenPart::plain("a")]);
        assert_eq!(token.class, TokenPart::plain("b"));
    }

    #[test]
    fn keeps_variants_in_written_order() {
        let token = parse_one("md:hover:focus:block").expect("chain should parse");
        let names = token
            .variants
            .iter()
            .map(|part| part.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["md", "hover", "focus"]);
        assert_eq!(token.class.name, "block");
    }

    #[test]
    fn parses_arbitrary_variant_and_class() {
        let token = parse_one("supports-[display:grid]:aspect-[4/3]").expect("should parse");
        assert_eq!(token.variants[0].name, "supports");
        assert_eq!(token.variants[0].arbitrary.as_deref(), Some("display:grid"));
        assert_eq!(token.class.name, "aspect");
        assert_eq!(token.class.arbitrary.as_deref(), Some("4/3"));
    }

    #[test]
    fn parses_bare_arbitrary_property() {
        let token = parse_one("hover:[color:red]").expect("should parse");
        assert_eq!(token.class.name, "");
        assert_eq!(token.class.arbitrary.as_deref(), Some("color:red"));
    }

    #[test]
    fn parses_slash_modifiers() {
        let token = parse_one("bg-red-500/50").expect("should parse");
        assert_eq!(token.class.name, "bg-red-500");
        assert_eq!(token.class.modifier.as_deref(), Some("50"));

        let token = parse_one("bg-[#fff]/[0.25]").expect("should parse");
        assert_eq!(token.class.arbitrary.as_deref(), Some("#fff"));
        assert_eq!(token.class.modifier.as_deref(), Some("[0.25]"));

        let token = parse_one("group/item:basis-1/2").expect("should parse");
        assert_eq!(token.variants[0].name, "group");
        assert_eq!(token.variants[0].modifier.as_deref(), Some("item"));
        assert_eq!(token.class.name, "basis-1");
        assert_eq!(token.class.modifier.as_deref(), Some("2"));
    }

    #[test]
    fn unterminated_bracket_fails() {
        assert_eq!(
            parse_one("aspect-["),
            Err(TokenizeError::UnterminatedBracket("aspect-[".to_string()))
        );
        assert!(parse_one("-[0-[").is_err());
    }

    #[test]
    fn garbage_after_bracket_fails() {
        assert_eq!(
            parse_one("aspect-[4/3]x"),
            Err(TokenizeError::TrailingAfterBracket {
                token: "aspect-[4/3]x".to_string(),
                found: 'x',
            })
        );
    }

    #[test]
    fn bracket_without_separator_fails() {
        assert!(matches!(
            parse_one("aspect[4/3]"),
            Err(TokenizeError::MissingSeparator(_))
        ));
    }

    #[test]
    fn first_closing_bracket_ends_arbitrary_text() {
        // `[a[b]]` closes at the first `]`, leaving a stray `]`.
        assert!(parse_one("content-[a[b]]").is_err());
    }

    #[test]
    fn empty_and_dangling_tokens_fail() {
        assert_eq!(parse_one(""), Err(TokenizeError::Empty));
        assert!(matches!(
            parse_one("hover:"),
            Err(TokenizeError::DanglingSeparator(_))
        ));
        assert!(matches!(
            parse_one("hover::block"),
            Err(TokenizeError::DanglingSeparator(_))
        ));
        assert!(matches!(
            parse_one("bg-red/"),
            Err(TokenizeError::EmptyModifier(_))
        ));
    }

    #[test]
    fn empty_brackets_read_as_no_arbitrary_text() {
        let token = parse_one("grow-[]").expect("should parse");
        assert_eq!(token.class.arbitrary.as_deref(), Some(""));
        assert_eq!(token.class.arbitrary_text(), None);
    }

    #[test]
    fn splits_on_whitespace_and_quotes() {
        let tokens = split_tokens("  block\thover:grow\n\"aspect-video\"`md:hidden` 'grow' ").collect::<Vec<_>>();
        assert_eq!(
            tokens,
            vec!["block", "hover:grow", "aspect-video", "md:hidden", "grow"]
        );

        let tokens = split_tokens("<div class='grow hidden'>").collect::<Vec<_>>();
        assert_eq!(tokens, vec!["<div", "class=", "grow", "hidden", ">"]);
    }
}
