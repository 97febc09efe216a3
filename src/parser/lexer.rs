//! Lexical analysis for BibTeX records

use super::PResult;
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse an identifier (letters, numbers, underscores, hyphens, colons,
/// dots), used for record kinds and field names
pub fn identifier<'a>(input: &mut &'a str) -> PResult<'a, &'a str> {
    take_while(1.., |c: char| {
        c.is_alphanumeric() || c == '_' || c == '-' || c == ':' || c == '.'
    })
    .parse_next(input)
}

/// Parse a cite key: any run of characters up to the comma that ends it.
///
/// Synthesized keys keep internal punctuation from title words (an
/// apostrophe in "Don't" survives into the key), so the key grammar must
/// accept more than [`identifier`] does.
pub fn cite_key<'a>(input: &mut &'a str) -> PResult<'a, &'a str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, ',' | '{' | '}')
    })
    .parse_next(input)
}

/// Scan a brace-delimited value up to the closing brace at depth zero.
///
/// Called with the input positioned just after the opening brace; returns
/// the content and leaves the input at the matching `}`. Inner balanced
/// braces are kept, and a backslash escapes the character after it, so
/// `\{` and `\}` never affect the depth count. Fails only on an
/// unterminated value.
pub fn balanced_braces<'a>(input: &mut &'a str) -> PResult<'a, &'a str> {
    let original = *input;
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0usize;

    while let Some(offset) = memchr::memchr3(b'{', b'}', b'\\', &bytes[pos..]) {
        pos += offset;
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                if depth == 0 {
                    let content = &original[..pos];
                    *input = &original[pos..];
                    return Ok(content);
                }
                depth -= 1;
            }
            _ => {
                // Backslash: skip the escaped character.
                pos += 1;
            }
        }
        pos += 1;
        if pos >= bytes.len() {
            break;
        }
    }

    Err(winnow::error::ErrMode::Backtrack(
        winnow::error::ContextError::default(),
    ))
}

/// Parse a quoted value `"..."`, tolerating escaped quotes and braces
pub fn quoted_string<'a>(input: &mut &'a str) -> PResult<'a, &'a str> {
    let start = *input;
    let bytes = input.as_bytes();

    if bytes.first() != Some(&b'"') {
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::default(),
        ));
    }

    let mut pos = 1;
    let mut brace_depth = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' if pos + 1 < bytes.len() => pos += 2,
            b'"' if brace_depth == 0 => {
                let content = &start[1..pos];
                *input = &start[pos + 1..];
                return Ok(content);
            }
            b'{' => {
                brace_depth += 1;
                pos += 1;
            }
            b'}' if brace_depth > 0 => {
                brace_depth -= 1;
                pos += 1;
            }
            _ => pos += 1,
        }
    }

    Err(winnow::error::ErrMode::Backtrack(
        winnow::error::ContextError::default(),
    ))
}

/// Parse a bare (undelimited) value token, e.g. `year = 1905`
pub fn bare_token<'a>(input: &mut &'a str) -> PResult<'a, &'a str> {
    take_while(1.., |c: char| {
        !c.is_whitespace() && !matches!(c, ',' | '{' | '}' | '"')
    })
    .parse_next(input)
}

/// Fast whitespace skipping (CRLF and LF alike)
pub fn skip_whitespace(input: &mut &str) {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
            _ => break,
        }
    }

    *input = &input[pos..];
}
