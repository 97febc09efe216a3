use bibtex_codec::{generate, parse, Author, Entry, EntryType};
use pretty_assertions::assert_eq;

fn make_entry() -> Entry {
    let mut entry = Entry::new(EntryType::Book);
    entry.authors.push(Author::new("John", "Doe"));
    entry.year = Some(2024);
    entry.title = Some("Test Title".to_string());
    entry
}

#[test]
fn test_parse_fixture_file() {
    let input = include_str!("fixtures/library.bib");
    let entries = parse(input);

    // Six records in the file: one lacks a title (filtered), one is
    // malformed (skipped), the record after the malformed one still parses.
    assert_eq!(entries.len(), 5);

    let article = &entries[0];
    assert_eq!(article.entry_type, EntryType::JournalArticle);
    assert_eq!(article.title.as_deref(), Some("Modern Testing Approaches"));
    assert_eq!(article.year, Some(2020));
    assert_eq!(article.authors.len(), 2);
    assert_eq!(article.authors[0].last_name, "Smith");
    assert_eq!(article.authors[0].first_name, "John");
    assert_eq!(article.authors[1].last_name, "Jones");
    assert_eq!(article.authors[1].first_name, "Alice");
    assert_eq!(
        article.metadata.get("journal").map(String::as_str),
        Some("Software Engineering Review")
    );
    assert_eq!(article.metadata.get("volume").map(String::as_str), Some("15"));
    assert_eq!(article.metadata.get("issue").map(String::as_str), Some("3"));
    assert_eq!(article.metadata.get("pages").map(String::as_str), Some("45-67"));
    assert_eq!(
        article.metadata.get("doi").map(String::as_str),
        Some("10.1000/test.2020")
    );

    let book = &entries[1];
    assert_eq!(book.entry_type, EntryType::Book);
    assert_eq!(book.title.as_deref(), Some("The Art of Computer Programming"));
    assert_eq!(book.authors[0].middle_name.as_deref(), Some("E."));
    assert_eq!(
        book.metadata.get("publisher").map(String::as_str),
        Some("Addison-Wesley")
    );
    assert_eq!(
        book.metadata.get("isbn").map(String::as_str),
        Some("978-0-201-89684-8")
    );

    let paper = &entries[2];
    assert_eq!(paper.entry_type, EntryType::ConferencePaper);
    assert_eq!(
        paper.metadata.get("container").map(String::as_str),
        Some("Proceedings of Something")
    );

    let thesis = &entries[3];
    assert_eq!(thesis.entry_type, EntryType::Thesis);
    assert_eq!(
        thesis.metadata.get("publisher").map(String::as_str),
        Some("University")
    );

    assert_eq!(entries[4].title.as_deref(), Some("Still Parsed"));
    assert_eq!(entries[4].year, Some(2022));
}

#[test]
fn test_generate_concrete_scenario() {
    // {Doe, 2024, "Software Engineering Principles", book}
    let mut entry = make_entry();
    entry.title = Some("Software Engineering Principles".to_string());

    let bibtex = generate(&[entry]);
    assert!(bibtex.starts_with("@book{doe2024software,"));
    assert!(bibtex.contains("author = {Doe, John}"));
    assert!(bibtex.contains("title = {Software Engineering Principles}"));
    assert!(bibtex.contains("year = {2024}"));
}

#[test]
fn test_generate_all_fallbacks_key() {
    let mut entry = Entry::new(EntryType::Custom);
    entry.title = Some("The A An".to_string());

    let bibtex = generate(&[entry]);
    assert!(bibtex.starts_with("@misc{unknownnduntitled,"));
    assert!(!bibtex.contains("author = "));
}

#[test]
fn test_escaped_title_survives_round_trip() {
    let mut entry = make_entry();
    entry.title = Some("Research & Development".to_string());

    let bibtex = generate(&[entry.clone()]);
    assert!(bibtex.contains("\\&"));
    assert!(!bibtex.contains("Research & Development"));

    let parsed = parse(&bibtex);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].title, entry.title);
}

#[test]
fn test_punctuated_title_key_survives_round_trip() {
    let mut entry = make_entry();
    entry.title = Some("Don't Stop Believing".to_string());

    let bibtex = generate(&[entry.clone()]);
    assert!(bibtex.contains("{doe2024don't,"));

    let parsed = parse(&bibtex);
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].title, entry.title);
    assert_eq!(parsed[0].authors, entry.authors);
}

#[test]
fn test_round_trip_core_fields() {
    let mut entry = Entry::new(EntryType::JournalArticle);
    entry.authors = vec![
        Author {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            middle_name: Some("Michael".to_string()),
            suffix: None,
        },
        Author::new("Alice", "Smith"),
    ];
    entry.year = Some(2020);
    entry.title = Some("Modern Testing Approaches".to_string());
    for (k, v) in [
        ("journal", "Software Engineering Review"),
        ("volume", "15"),
        ("issue", "3"),
        ("pages", "45-67"),
        ("doi", "10.1000/test.2020"),
        ("publisher", "MIT Press"),
        ("isbn", "978-0-262-03384-8"),
        ("container", "Collected Works"),
    ] {
        entry.metadata.insert(k.to_string(), v.to_string());
    }

    let parsed = parse(&generate(&[entry.clone()]));
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].title, entry.title);
    assert_eq!(parsed[0].authors, entry.authors);
    assert_eq!(parsed[0].year, entry.year);
    assert_eq!(parsed[0].metadata, entry.metadata);
}

#[test]
fn test_round_trip_unknown_metadata_dropped() {
    let mut entry = make_entry();
    entry
        .metadata
        .insert("annotation".to_string(), "private note".to_string());

    // Unknown keys are emitted by the generator but dropped on parse.
    let bibtex = generate(&[entry]);
    assert!(bibtex.contains("annotation = {private note}"));

    let parsed = parse(&bibtex);
    assert!(parsed[0].metadata.get("annotation").is_none());
}

#[test]
fn test_type_mapping_round_trip_stability() {
    // Stable kinds survive a full cycle.
    for ty in [
        EntryType::Book,
        EntryType::JournalArticle,
        EntryType::ConferencePaper,
        EntryType::Thesis,
        EntryType::Report,
    ] {
        let mut entry = make_entry();
        entry.entry_type = ty;
        let parsed = parse(&generate(&[entry]));
        assert_eq!(parsed[0].entry_type, ty);
    }

    // Lossy kinds collapse (documented asymmetry).
    let mut entry = make_entry();
    entry.entry_type = EntryType::NewspaperArticle;
    let parsed = parse(&generate(&[entry]));
    assert_eq!(parsed[0].entry_type, EntryType::JournalArticle);

    let mut entry = make_entry();
    entry.entry_type = EntryType::Software;
    let parsed = parse(&generate(&[entry]));
    assert_eq!(parsed[0].entry_type, EntryType::Custom);
}

#[test]
fn test_nested_braces_preserved() {
    let input = "@book{k, title = {The {Well-Balanced} Handbook}, year = {2020}}";
    let entries = parse(input);
    assert_eq!(
        entries[0].title.as_deref(),
        Some("The {Well-Balanced} Handbook")
    );
}

#[test]
fn test_parsed_entries_have_no_id() {
    let entries = parse("@book{k, title = {T}}");
    assert_eq!(entries[0].id, None);
}

#[test]
fn test_entry_json_shape() {
    let mut entry = Entry::new(EntryType::JournalArticle);
    entry.authors.push(Author::new("John", "Doe"));
    entry.title = Some("T".to_string());

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["entryType"], "journal_article");
    assert_eq!(json["authors"][0]["firstName"], "John");
    assert_eq!(json["authors"][0]["lastName"], "Doe");

    let back: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
}
