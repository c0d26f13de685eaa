use std::collections::{HashMap, HashSet};

use crate::models::{Book, Bookworm, Recommendation};

use super::ordering::compare_scored;

/// Co-occurrence scores between books
///
/// `matrix[target][neighbor]` counts how many times `neighbor` sat on the same
/// shelf as `target`. Pairs are taken by shelf position, so a book listed twice
/// on one shelf is registered as its own neighbor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CooccurrenceMatrix {
    scores: HashMap<Book, HashMap<Book, f64>>,
}

impl CooccurrenceMatrix {
    /// Builds the matrix from every shelf in the population
    pub fn build(bookworms: &[Bookworm]) -> Self {
        bookworms.iter().fold(Self::default(), |mut matrix, bookworm| {
            matrix.register_shelf(&bookworm.books);
            matrix
        })
    }

    /// Registers every pair of distinct positions on one shelf, from both sides
    fn register_shelf(&mut self, books: &[Book]) {
        // A lone book has no neighbors to register
        if books.len() < 2 {
            return;
        }
        for (i, target) in books.iter().enumerate() {
            let neighbors = self.scores.entry(target.clone()).or_default();
            for (j, other) in books.iter().enumerate() {
                if i == j {
                    continue;
                }
                *neighbors.entry(other.clone()).or_insert(0.0) += 1.0;
            }
        }
    }

    /// Adds every score of `other` into this matrix
    pub fn merge(&mut self, other: CooccurrenceMatrix) {
        for (target, neighbors) in other.scores {
            let entry = self.scores.entry(target).or_default();
            for (neighbor, score) in neighbors {
                *entry.entry(neighbor).or_insert(0.0) += score;
            }
        }
    }

    /// Score of `neighbor` relative to `target`, if the two ever shared a shelf
    pub fn score(&self, target: &Book, neighbor: &Book) -> Option<f64> {
        self.scores.get(target)?.get(neighbor).copied()
    }

    /// All neighbors registered for `target`
    pub fn neighbors(&self, target: &Book) -> Option<&HashMap<Book, f64>> {
        self.scores.get(target)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Ranks the books a reader with the given shelf does not own yet
    ///
    /// Every listing on the shelf contributes its neighbors' scores, so a book
    /// owned twice weighs twice. Candidates are ordered by score, then author,
    /// then title.
    pub fn recommend_for(&self, owned: &[Book]) -> Vec<Book> {
        let owned_set: HashSet<&Book> = owned.iter().collect();
        let mut accumulator: HashMap<&Book, f64> = HashMap::new();

        for book in owned {
            let Some(neighbors) = self.scores.get(book) else {
                continue;
            };
            for (neighbor, score) in neighbors {
                if owned_set.contains(neighbor) {
                    continue;
                }
                *accumulator.entry(neighbor).or_insert(0.0) += score;
            }
        }

        let mut candidates: Vec<(&Book, f64)> = accumulator.into_iter().collect();
        candidates.sort_by(|a, b| compare_scored(*a, *b));

        candidates
            .into_iter()
            .map(|(book, _)| book.clone())
            .collect()
    }
}

/// Recommends books to every bookworm, in input order
///
/// The co-occurrence matrix is built once from the whole population and shared
/// read-only by every reader's scoring.
pub fn recommend_books(bookworms: &[Bookworm]) -> Vec<Recommendation> {
    let matrix = CooccurrenceMatrix::build(bookworms);

    tracing::debug!(
        readers = bookworms.len(),
        books = matrix.scores.len(),
        "Co-occurrence matrix built"
    );

    bookworms
        .iter()
        .map(|bookworm| {
            let books = matrix.recommend_for(&bookworm.books);
            tracing::trace!(
                name = %bookworm.name,
                candidates = books.len(),
                "Recommendations ranked"
            );
            Recommendation {
                name: bookworm.name.clone(),
                books,
            }
        })
        .collect()
}
