use std::io::{self, Write};

use crate::models::{Book, Recommendation};

/// Prints out the titles and authors of a list of books
pub fn write_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "- {}", book)?;
    }
    Ok(())
}

pub fn write_common_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    writeln!(out, "Here are books in common:")?;
    write_books(out, books)
}

/// Prints one block per bookworm, separated by a blank line
pub fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
) -> io::Result<()> {
    for recommendation in recommendations {
        writeln!(
            out,
            "Here are the recommendations for {}:",
            recommendation.name
        )?;
        write_books(out, &recommendation.books)?;
        writeln!(out)?;
    }
    Ok(())
}
