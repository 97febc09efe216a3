//! Escaping between literal text and BibTeX reserved-character sequences

use std::borrow::Cow;

/// Reserved characters and their escape sequences, in application order.
///
/// Backslash must come first: every later replacement introduces
/// backslashes that a second backslash pass would mangle. Braces must come
/// before tilde and caret, whose replacements end in `{}`.
const ESCAPE_RULES: [(char, &str); 10] = [
    ('\\', "\\textbackslash"),
    ('&', "\\&"),
    ('%', "\\%"),
    ('#', "\\#"),
    ('_', "\\_"),
    ('$', "\\$"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('~', "\\textasciitilde{}"),
    ('^', "\\textasciicircum{}"),
];

/// Escape sequences back to their literal characters, longest first so a
/// greedy scan never stops at a shorter prefix.
const UNESCAPE_RULES: [(&str, char); 10] = [
    ("\\textasciicircum{}", '^'),
    ("\\textasciitilde{}", '~'),
    ("\\textbackslash", '\\'),
    ("\\&", '&'),
    ("\\%", '%'),
    ("\\#", '#'),
    ("\\_", '_'),
    ("\\$", '$'),
    ("\\{", '{'),
    ("\\}", '}'),
];

fn is_reserved(c: char) -> bool {
    matches!(c, '\\' | '&' | '%' | '#' | '_' | '$' | '{' | '}' | '~' | '^')
}

/// Escape reserved characters for emission inside a BibTeX field value.
///
/// Returns the input unchanged (and unallocated) when it contains no
/// reserved character.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(is_reserved) {
        return Cow::Borrowed(text);
    }
    let mut out = text.to_owned();
    for (ch, replacement) in ESCAPE_RULES {
        out = out.replace(ch, replacement);
    }
    Cow::Owned(out)
}

/// Reverse [`escape`], turning known escape sequences back into literal
/// characters.
///
/// Unknown backslash sequences pass through verbatim; this never fails.
#[must_use]
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        if let Some((seq, ch)) = UNESCAPE_RULES.iter().find(|(seq, _)| rest.starts_with(seq)) {
            out.push(*ch);
            rest = &rest[seq.len()..];
        } else {
            out.push('\\');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
