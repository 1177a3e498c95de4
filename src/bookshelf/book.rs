// src/bookshelf/book.rs

/// A single book record. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    year: i32,
    price: f64,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        price: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}
