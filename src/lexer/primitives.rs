//! String-literal decoding (RFC 7950 §6.1.3): quote stripping and
//! double-quoted escape processing. Concatenation of adjacent literals
//! joined by `+` is handled by the parser (it needs the token stream to
//! find the fragments); this module only turns one literal's raw text
//! (quotes included) into its decoded value.

use crate::base::Span;
use crate::error::FrontError;

/// Decode a single-quoted string literal. RFC 7950 defines no escapes in
/// single-quoted strings, so the content between the quotes is returned
/// verbatim.
pub fn decode_single_quoted(raw: &str) -> String {
    raw.trim_start_matches('\'').trim_end_matches('\'').to_string()
}

/// Decode a double-quoted string literal, processing `\n`, `\t`, `\"`,
/// and `\\`. Any other byte following a backslash is an error.
pub fn decode_double_quoted(raw: &str, span: Span) -> Result<String, FrontError> {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(FrontError::Lexical {
                    span,
                    reason: format!("invalid escape sequence `\\{other}`"),
                })
            }
            None => {
                return Err(FrontError::Lexical {
                    span,
                    reason: "string ends with a trailing backslash".to_string(),
                })
            }
        }
    }
    Ok(out)
}
