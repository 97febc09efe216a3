//! Parser utilities

use winnow::ascii::multispace0;
use winnow::prelude::*;

/// Make a parser whitespace-insensitive
pub fn ws<'a, F, O>(mut parser: F) -> impl Parser<&'a str, O, winnow::error::ContextError>
where
    F: Parser<&'a str, O, winnow::error::ContextError>,
{
    move |input: &mut &'a str| {
        let _ = multispace0.parse_next(input)?;
        let output = parser.parse_next(input)?;
        let _ = multispace0.parse_next(input)?;
        Ok(output)
    }
}
