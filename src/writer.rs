//! BibTeX generation from entries

use crate::escape::escape;
use crate::key::synthesize_key;
use crate::model::{Author, Entry};
use crate::Result;
use std::io::{self, Write};

/// Configuration for writing BibTeX
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Indentation string (default: "  ")
    pub indent: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

/// BibTeX writer
///
/// Serializes entries in input order, one record per entry, records
/// separated by a blank line. No entry is ever skipped: a missing title or
/// year simply omits that field, and an empty author list omits the
/// `author` field entirely.
#[derive(Debug)]
pub struct Writer<W: Write> {
    writer: W,
    config: WriterConfig,
}

impl<W: Write> Writer<W> {
    /// Create a new writer with default configuration
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            config: WriterConfig::default(),
        }
    }

    /// Create a new writer with custom configuration
    pub const fn with_config(writer: W, config: WriterConfig) -> Self {
        Self { writer, config }
    }

    /// Write a sequence of entries
    pub fn write_entries(&mut self, entries: &[Entry]) -> io::Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                writeln!(self.writer)?;
            }
            self.write_entry(entry)?;
        }
        Ok(())
    }

    /// Write a single entry
    pub fn write_entry(&mut self, entry: &Entry) -> io::Result<()> {
        writeln!(
            self.writer,
            "@{}{{{},",
            entry.entry_type.record_kind(),
            synthesize_key(entry)
        )?;

        let mut fields: Vec<(&str, String)> = Vec::new();
        if !entry.authors.is_empty() {
            fields.push(("author", render_authors(&entry.authors)));
        }
        if let Some(title) = &entry.title {
            fields.push(("title", escape(title).into_owned()));
        }
        if let Some(year) = entry.year {
            fields.push(("year", year.to_string()));
        }

        // AHashMap iteration order is randomized; sort so output is stable.
        let mut metadata: Vec<_> = entry.metadata.iter().collect();
        metadata.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in metadata {
            fields.push((name.as_str(), escape(value).into_owned()));
        }

        for (i, (name, value)) in fields.iter().enumerate() {
            write!(
                self.writer,
                "{}{} = {{{}}}",
                self.config.indent, name, value
            )?;
            if i < fields.len() - 1 {
                writeln!(self.writer, ",")?;
            } else {
                writeln!(self.writer)?;
            }
        }

        writeln!(self.writer, "}}")?;
        Ok(())
    }
}

/// Render an author list as `Last, First[ Middle]` joined with `" and "`
fn render_authors(authors: &[Author]) -> String {
    authors
        .iter()
        .map(render_author)
        .collect::<Vec<_>>()
        .join(" and ")
}

fn render_author(author: &Author) -> String {
    match &author.middle_name {
        Some(middle) => format!("{}, {} {}", author.last_name, author.first_name, middle),
        None => format!("{}, {}", author.last_name, author.first_name),
    }
}

/// Serialize entries to a BibTeX string
///
/// Total: generation has no failure mode for any well-formed entry
/// sequence.
#[must_use]
pub fn generate(entries: &[Entry]) -> String {
    let mut buf = Vec::new();
    let mut writer = Writer::new(&mut buf);
    writer
        .write_entries(entries)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("valid UTF-8")
}

/// Serialize entries to a BibTeX file
pub fn to_file(entries: &[Entry], path: impl AsRef<std::path::Path>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = Writer::new(file);
    writer.write_entries(entries)?;
    Ok(())
}
