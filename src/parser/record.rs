//! Record grammar and interpretation into entries

use super::{lexer, utils, PResult};
use crate::escape::unescape;
use crate::model::{keys, Author, Entry, EntryType};
use ahash::AHashMap;
use winnow::ascii::multispace0;
use winnow::combinator::preceded;
use winnow::prelude::*;

/// A record as it appears in the text, before interpretation.
///
/// Field names are lowercased at the grammar level; everything else is a
/// raw slice of the input.
#[derive(Debug)]
pub struct RawRecord<'a> {
    /// Record kind as written (case preserved; decoding lowercases)
    pub kind: &'a str,
    /// Cite key; carried for diagnostics, not stored on the entry
    pub key: &'a str,
    /// `(lowercased name, raw value)` pairs in source order
    pub fields: Vec<(String, &'a str)>,
}

/// Parse one record: `@kind{key, field = value, ...}`
pub fn parse_record<'a>(input: &mut &'a str) -> PResult<'a, RawRecord<'a>> {
    preceded((multispace0, '@'), parse_record_content).parse_next(input)
}

fn parse_record_content<'a>(input: &mut &'a str) -> PResult<'a, RawRecord<'a>> {
    let kind = lexer::identifier.parse_next(input)?;
    lexer::skip_whitespace(input);
    '{'.parse_next(input)?;
    let key = utils::ws(lexer::cite_key).parse_next(input)?;
    utils::ws(',').parse_next(input)?;
    let fields = parse_fields(input)?;
    utils::ws('}').parse_next(input)?;
    Ok(RawRecord { kind, key, fields })
}

/// Parse `name = value` pairs until the closing brace, trailing comma
/// tolerated
fn parse_fields<'a>(input: &mut &'a str) -> PResult<'a, Vec<(String, &'a str)>> {
    let mut fields = Vec::new();

    loop {
        lexer::skip_whitespace(input);
        if input.starts_with('}') || input.is_empty() {
            break;
        }

        let Ok(field) = parse_field(input) else {
            break;
        };
        fields.push(field);

        lexer::skip_whitespace(input);
        if input.starts_with(',') {
            *input = &input[1..];
        } else {
            break;
        }
    }

    Ok(fields)
}

fn parse_field<'a>(input: &mut &'a str) -> PResult<'a, (String, &'a str)> {
    let name = utils::ws(lexer::identifier).parse_next(input)?;
    utils::ws('=').parse_next(input)?;
    let value = parse_field_value(input)?;
    Ok((name.to_ascii_lowercase(), value))
}

/// A field value: braced (depth-tracked), quoted, or a bare token.
/// The generator only emits braced values; the rest is parse leniency.
fn parse_field_value<'a>(input: &mut &'a str) -> PResult<'a, &'a str> {
    lexer::skip_whitespace(input);
    if input.starts_with('{') {
        *input = &input[1..];
        let content = lexer::balanced_braces(input)?;
        '}'.parse_next(input)?;
        Ok(content)
    } else if input.starts_with('"') {
        lexer::quoted_string(input)
    } else {
        lexer::bare_token(input)
    }
}

impl RawRecord<'_> {
    /// Interpret the record as an [`Entry`].
    ///
    /// Returns `None` for records without a `title` field; that is the
    /// deliberate filter, not an error. Values are unescaped before
    /// interpretation. Fields outside the mapped set are dropped.
    #[must_use]
    pub fn into_entry(self) -> Option<Entry> {
        let entry_type = EntryType::from_record_kind(self.kind);

        let mut title = None;
        let mut authors = Vec::new();
        let mut year = None;
        let mut metadata = AHashMap::new();

        for (name, raw) in &self.fields {
            let value = unescape(raw);
            match name.as_str() {
                "title" => title = Some(value.into_owned()),
                "author" => authors = split_authors(&value),
                "year" => year = value.trim().parse().ok(),
                "journal" => {
                    metadata.insert(keys::JOURNAL.to_string(), value.into_owned());
                }
                "volume" => {
                    metadata.insert(keys::VOLUME.to_string(), value.into_owned());
                }
                "number" | "issue" => {
                    metadata.insert(keys::ISSUE.to_string(), value.into_owned());
                }
                "pages" => {
                    // BibTeX page ranges use a double dash.
                    metadata.insert(keys::PAGES.to_string(), value.replace("--", "-"));
                }
                "doi" => {
                    metadata.insert(keys::DOI.to_string(), value.into_owned());
                }
                "publisher" => {
                    metadata.insert(keys::PUBLISHER.to_string(), value.into_owned());
                }
                "isbn" => {
                    metadata.insert(keys::ISBN.to_string(), value.into_owned());
                }
                "booktitle" | "container" => {
                    metadata.insert(keys::CONTAINER.to_string(), value.into_owned());
                }
                // The thesis institution shares the publisher slot.
                "school" if entry_type == EntryType::Thesis => {
                    metadata.insert(keys::PUBLISHER.to_string(), value.into_owned());
                }
                _ => {}
            }
        }

        let title = title?;

        Some(Entry {
            id: None,
            entry_type,
            title: Some(title),
            authors,
            year,
            metadata,
        })
    }
}

/// Split an `author` field on `" and "` into individual authors
fn split_authors(value: &str) -> Vec<Author> {
    value.split(" and ").filter_map(parse_author).collect()
}

/// Parse one `Last, First [Middle...]` segment.
///
/// A segment without a `", "` separator becomes a bare family name.
fn parse_author(segment: &str) -> Option<Author> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }

    let Some((last, rest)) = segment.split_once(", ") else {
        return Some(Author::new("", segment));
    };

    let mut tokens = rest.split_whitespace();
    let first = tokens.next().unwrap_or_default();
    let middle: Vec<&str> = tokens.collect();

    Some(Author {
        first_name: first.to_string(),
        last_name: last.to_string(),
        middle_name: (!middle.is_empty()).then(|| middle.join(" ")),
        suffix: None,
    })
}
