// src/bookshelf/mod.rs

pub mod book;
pub mod library;
pub mod presenter;
pub mod sort_strategy;

pub use book::Book;
pub use library::{Library, StrategyChanged, SubscriptionId};
pub use presenter::{BookTable, TableLayout};
pub use sort_strategy::{
    sort_strategies, SortByAuthor, SortByPrice, SortByYearDescending, SortStrategy,
};

// src/bookshelf/mod.rs
