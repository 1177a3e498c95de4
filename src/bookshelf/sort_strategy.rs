// src/bookshelf/sort_strategy.rs

use crate::bookshelf::book::Book;

/// Interchangeable ordering for a collection of books.
///
/// Implementations reorder the slice in place. Tie order between equal keys
/// is not guaranteed.
pub trait SortStrategy: Send + Sync {
    /// Human-readable name announced when the strategy becomes active.
    fn name(&self) -> &'static str;

    fn sort(&self, books: &mut [Book]);
}

/// Author ascending, ordinal (byte-wise) comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortByAuthor;

impl SortStrategy for SortByAuthor {
    fn name(&self) -> &'static str {
        "By author"
    }

    fn sort(&self, books: &mut [Book]) {
        books.sort_by(|a, b| a.author().as_bytes().cmp(b.author().as_bytes()));
    }
}

/// Year descending, via the classic O(n²) adjacent-exchange sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortByYearDescending;

impl SortStrategy for SortByYearDescending {
    fn name(&self) -> &'static str {
        "By year (newest first)"
    }

    fn sort(&self, books: &mut [Book]) {
        let n = books.len();
        if n <= 1 {
            return;
        }

        for _ in 0..n - 1 {
            for j in 0..n - 1 {
                if books[j].year() < books[j + 1].year() {
                    books.swap(j, j + 1);
                }
            }
        }
    }
}

/// Price ascending.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortByPrice;

impl SortStrategy for SortByPrice {
    fn name(&self) -> &'static str {
        "By price"
    }

    fn sort(&self, books: &mut [Book]) {
        books.sort_by(|a, b| a.price().total_cmp(&b.price()));
    }
}

/// One instance of every sort strategy: author, year, price.
pub fn sort_strategies() -> Vec<Box<dyn SortStrategy>> {
    vec![
        Box::new(SortByAuthor),
        Box::new(SortByYearDescending),
        Box::new(SortByPrice),
    ]
}
