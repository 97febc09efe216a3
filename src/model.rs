//! Data model for bibliographic entries

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Documented metadata keys consumed by the codec.
///
/// The metadata map is open-ended: any other key is carried through
/// generation verbatim, but only these keys survive a parse.
pub mod keys {
    /// Journal name
    pub const JOURNAL: &str = "journal";
    /// Volume number
    pub const VOLUME: &str = "volume";
    /// Issue number (BibTeX `number`)
    pub const ISSUE: &str = "issue";
    /// Page range, single-dash separator
    pub const PAGES: &str = "pages";
    /// Digital object identifier
    pub const DOI: &str = "doi";
    /// Publisher, also the thesis institution (BibTeX `school`)
    pub const PUBLISHER: &str = "publisher";
    /// ISBN
    pub const ISBN: &str = "isbn";
    /// Containing work, e.g. conference proceedings (BibTeX `booktitle`)
    pub const CONTAINER: &str = "container";
}

/// A bibliographic entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Opaque identifier owned by the external store; the codec never
    /// generates one, so parsed entries carry `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Internal entry kind
    pub entry_type: EntryType,
    /// Title text
    #[serde(default)]
    pub title: Option<String>,
    /// Authors in citation order; the first author drives key synthesis
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Publication year
    #[serde(default)]
    pub year: Option<i32>,
    /// Open-ended field map; see [`keys`] for the semantic keys
    #[serde(default)]
    pub metadata: AHashMap<String, String>,
}

impl Entry {
    /// Create an empty entry of the given kind
    #[must_use]
    pub fn new(entry_type: EntryType) -> Self {
        Self {
            id: None,
            entry_type,
            title: None,
            authors: Vec::new(),
            year: None,
            metadata: AHashMap::new(),
        }
    }
}

/// An author of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Middle name(s), space-joined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Name suffix ("Jr.", "III"); carried but not used by the codec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Author {
    /// Create an author from given and family names
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            suffix: None,
        }
    }
}

/// Internal entry kind
///
/// The mapping to BibTeX record kinds is deliberately lossy: encoding is
/// total (every kind has exactly one record kind), while decoding collapses
/// the `article` family into [`Self::JournalArticle`] and every unrecognized
/// kind into [`Self::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// Book with publisher
    Book,
    /// Article from a journal
    JournalArticle,
    /// Paper in conference proceedings
    ConferencePaper,
    /// Thesis or dissertation
    Thesis,
    /// Technical report
    Report,
    /// Web page
    Website,
    /// Software artifact
    Software,
    /// Video recording
    Video,
    /// Podcast episode
    Podcast,
    /// Interview
    Interview,
    /// Newspaper article
    NewspaperArticle,
    /// Magazine article
    MagazineArticle,
    /// Anything else
    Custom,
}

impl EntryType {
    /// BibTeX record kind this entry kind encodes to (total)
    #[must_use]
    pub const fn record_kind(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::JournalArticle | Self::NewspaperArticle | Self::MagazineArticle => "article",
            Self::ConferencePaper => "inproceedings",
            Self::Thesis => "phdthesis",
            Self::Report => "techreport",
            Self::Website
            | Self::Software
            | Self::Video
            | Self::Podcast
            | Self::Interview
            | Self::Custom => "misc",
        }
    }

    /// Decode a BibTeX record kind (case-insensitive)
    ///
    /// Unrecognized kinds, including `misc`, decode to [`Self::Custom`].
    #[must_use]
    pub fn from_record_kind(kind: &str) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "book" => Self::Book,
            "article" => Self::JournalArticle,
            "inproceedings" => Self::ConferencePaper,
            "phdthesis" => Self::Thesis,
            "techreport" => Self::Report,
            _ => Self::Custom,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Book => "book",
            Self::JournalArticle => "journal_article",
            Self::ConferencePaper => "conference_paper",
            Self::Thesis => "thesis",
            Self::Report => "report",
            Self::Website => "website",
            Self::Software => "software",
            Self::Video => "video",
            Self::Podcast => "podcast",
            Self::Interview => "interview",
            Self::NewspaperArticle => "newspaper_article",
            Self::MagazineArticle => "magazine_article",
            Self::Custom => "custom",
        };
        write!(f, "{name}")
    }
}
