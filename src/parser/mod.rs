//! Lenient BibTeX parser built on winnow
//!
//! Parsing is best-effort: a record that fails the grammar (malformed
//! header, unterminated brace) is skipped and scanning resumes at the next
//! `@`. A record without a `title` field parses but is filtered out. The
//! result is always a (possibly empty) entry sequence; no error value ever
//! crosses this boundary for malformed text.

pub mod lexer;
pub mod record;
pub mod utils;

use crate::model::Entry;
use memchr::memchr;

pub use record::parse_record;

/// Internal parser result type
pub type PResult<'a, O> = winnow::PResult<O, winnow::error::ContextError>;

/// Parse BibTeX text into entries.
///
/// ```
/// use bibtex_codec::parse;
///
/// let entries = parse("@book{first, title = {First Book}, year = {2020}}");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].title.as_deref(), Some("First Book"));
/// ```
#[must_use]
pub fn parse(input: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut rest = input;

    while let Some(at) = memchr(b'@', rest.as_bytes()) {
        rest = &rest[at..];
        let mut attempt = rest;
        match record::parse_record(&mut attempt) {
            Ok(raw) => {
                rest = attempt;
                if let Some(entry) = raw.into_entry() {
                    entries.push(entry);
                }
            }
            Err(_) => {
                // Record-scoped failure: drop this `@` and rescan.
                rest = &rest[1..];
            }
        }
    }

    entries
}
