// src/bookshelf/library.rs

use log::{debug, info};

use crate::bookshelf::book::Book;
use crate::bookshelf::sort_strategy::{SortByAuthor, SortStrategy};
use crate::error::{DemoError, DemoResult};

/// Event delivered to subscribers whenever the active strategy is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyChanged {
    pub strategy_name: &'static str,
}

/// Handle returned by [`Library::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StrategyChanged)>;

/// Holds the book collection and the currently selected sort strategy.
///
/// The library never prints anything itself: strategy changes are announced
/// through subscribers, and listings are handed out as iterators for an
/// external presenter.
pub struct Library {
    books: Vec<Book>,
    strategy: Box<dyn SortStrategy>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Library {
    /// Creates an empty library sorting by author.
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            strategy: Box::new(SortByAuthor),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut library = Self::new();
        library.books.extend(books);
        library
    }

    /// Appends a book to the end of the collection.
    ///
    /// Fails with [`DemoError::InvalidArgument`] when `book` is `None`.
    pub fn add(&mut self, book: impl Into<Option<Book>>) -> DemoResult<()> {
        let book = book.into().ok_or(DemoError::InvalidArgument("book"))?;
        debug!("Adding '{}' ({}) to library", book.title(), book.author());
        self.books.push(book);
        Ok(())
    }

    /// Replaces the active strategy and notifies every subscriber.
    ///
    /// Does not re-sort; call [`Library::sort_books`] afterwards. On
    /// `None` the current strategy stays active and nothing is emitted.
    pub fn set_strategy(
        &mut self,
        strategy: impl Into<Option<Box<dyn SortStrategy>>>,
    ) -> DemoResult<()> {
        let strategy = strategy
            .into()
            .ok_or(DemoError::InvalidArgument("strategy"))?;
        info!("Sort strategy: {} -> {}", self.strategy.name(), strategy.name());
        self.strategy = strategy;

        let event = StrategyChanged {
            strategy_name: self.strategy.name(),
        };
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
        Ok(())
    }

    /// Shorthand for [`Library::set_strategy`] with a concrete strategy value.
    pub fn use_strategy<S: SortStrategy + 'static>(&mut self, strategy: S) -> DemoResult<()> {
        self.set_strategy(Box::new(strategy) as Box<dyn SortStrategy>)
    }

    /// Sorts the collection with the active strategy. No-op when empty.
    pub fn sort_books(&mut self) {
        if self.books.is_empty() {
            debug!("Library is empty, nothing to sort");
            return;
        }
        debug!("Sorting {} books {}", self.books.len(), self.strategy.name());
        self.strategy.sort(&mut self.books);
    }

    /// Read-only view of the books in their current order.
    ///
    /// The returned iterator is `Clone`, so a presenter can walk it more than once.
    pub fn list_books(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Registers a callback invoked on every successful strategy change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StrategyChanged) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
