//! Cite-key synthesis from author, year, and title

use crate::model::Entry;

/// Words excluded from the title segment of a cite key
const STOP_WORDS: [&str; 3] = ["a", "an", "the"];

/// Synthesize a cite key from an entry's first author, year, and title.
///
/// Total function: every missing piece has a literal fallback (`unknown`,
/// `nd`, `untitled`), so a key is always produced. Keys are deliberately
/// not deduplicated; uniqueness across a batch is the caller's concern.
///
/// ```
/// use bibtex_codec::{synthesize_key, Author, Entry, EntryType};
///
/// let mut entry = Entry::new(EntryType::Book);
/// entry.authors.push(Author::new("John", "Doe"));
/// entry.year = Some(2024);
/// entry.title = Some("Software Engineering Principles".to_string());
/// assert_eq!(synthesize_key(&entry), "doe2024software");
/// ```
#[must_use]
pub fn synthesize_key(entry: &Entry) -> String {
    let author = entry
        .authors
        .first()
        .map(|a| {
            a.last_name
                .to_lowercase()
                .chars()
                .filter(char::is_ascii_alphabetic)
                .collect::<String>()
        })
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    let year = entry
        .year
        .map_or_else(|| "nd".to_string(), |y| y.to_string());

    let title = entry
        .title
        .as_deref()
        .and_then(first_significant_word)
        .unwrap_or_else(|| "untitled".to_string());

    format!("{author}{year}{title}")
}

/// First title word that survives normalization and the stop-word filter
fn first_significant_word(title: &str) -> Option<String> {
    title.split_whitespace().find_map(|word| {
        let word = word.to_lowercase();
        let word = word.trim_matches(|c: char| !c.is_ascii_alphabetic());
        if word.is_empty() || STOP_WORDS.contains(&word) {
            None
        } else {
            Some(word.to_string())
        }
    })
}
