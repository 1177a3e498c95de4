// src/bookshelf/presenter.rs

use std::fmt;

use crate::bookshelf::book::Book;
use crate::constants::{TABLE_WIDTHS_STANDARD, TABLE_WIDTHS_WIDE};

/// Column arrangement for a book listing. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// Title, Author, Year, Price.
    #[default]
    Standard,
    /// Author, Title, Year, Price with roomier columns.
    Wide,
}

impl TableLayout {
    fn widths(self) -> [usize; 4] {
        match self {
            TableLayout::Standard => TABLE_WIDTHS_STANDARD,
            TableLayout::Wide => TABLE_WIDTHS_WIDE,
        }
    }
}

/// Fixed-width console table for a snapshot of books.
///
/// Text columns longer than their width are cut to fit.
pub struct BookTable<'a> {
    heading: String,
    books: Vec<&'a Book>,
    layout: TableLayout,
}

impl<'a> BookTable<'a> {
    pub fn new(heading: impl Into<String>, books: impl IntoIterator<Item = &'a Book>) -> Self {
        Self {
            heading: heading.into(),
            books: books.into_iter().collect(),
            layout: TableLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        author: &str,
        year: &str,
        price: &str,
    ) -> fmt::Result {
        let [w0, w1, w2, w3] = self.layout.widths();
        let (first, second) = match self.layout {
            TableLayout::Standard => (title, author),
            TableLayout::Wide => (author, title),
        };
        writeln!(
            f,
            "{first:<w0$.w0$} | {second:<w1$.w1$} | {year:>w2$} | {price:>w3$}"
        )
    }
}

impl fmt::Display for BookTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w0, w1, w2, w3] = self.layout.widths();
        let total_width = w0 + w1 + w2 + w3 + 9;

        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{}", "=".repeat(total_width))?;
        self.write_row(f, "Title", "Author", "Year", "Price")?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        if self.books.is_empty() {
            return writeln!(f, "(no books)");
        }
        for book in &self.books {
            self.write_row(
                f,
                book.title(),
                book.author(),
                &book.year().to_string(),
                &format!("{:.2}", book.price()),
            )?;
        }
        Ok(())
    }
}
