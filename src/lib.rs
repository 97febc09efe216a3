//! # bibtex-codec
//!
//! A bidirectional codec between bibliographic entries and BibTeX text.
//!
//! ## Features
//!
//! - Total, deterministic generation with synthesized cite keys
//! - Lenient parsing that skips malformed records instead of failing
//! - Depth-tracked brace matching for nested values
//! - Reserved-character escaping with exact round-trip semantics
//! - Lossy-by-design record-kind mapping, documented on [`EntryType`]
//!
//! ## Example
//!
//! ```
//! use bibtex_codec::{generate, parse, Author, Entry, EntryType};
//!
//! let mut entry = Entry::new(EntryType::Book);
//! entry.authors.push(Author::new("John", "Doe"));
//! entry.year = Some(2024);
//! entry.title = Some("Software Engineering Principles".to_string());
//!
//! let bibtex = generate(&[entry]);
//! assert!(bibtex.starts_with("@book{doe2024software,"));
//!
//! let parsed = parse(&bibtex);
//! assert_eq!(parsed.len(), 1);
//! assert_eq!(parsed[0].title.as_deref(), Some("Software Engineering Principles"));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    missing_debug_implementations
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod escape;
pub mod key;
pub mod model;
pub mod parser;

mod writer;

pub use error::{Error, Result};
pub use escape::{escape, unescape};
pub use key::synthesize_key;
pub use model::{Author, Entry, EntryType};
pub use parser::parse;
pub use writer::{generate, to_file, Writer, WriterConfig};

/// Re-export of the most commonly used items
pub mod prelude {
    pub use crate::{generate, parse, synthesize_key, Author, Entry, EntryType};
}

/// Parse a BibTeX file into entries
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<Vec<Entry>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse(&content))
}
