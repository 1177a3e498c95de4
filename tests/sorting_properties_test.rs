// tests/sorting_properties_test.rs

use proptest::prelude::*;
use strategy_demos::bookshelf::{
    sort_strategies, Book, Library, SortByAuthor, SortByPrice, SortByYearDescending, SortStrategy,
};

fn arb_book() -> impl Strategy<Value = Book> {
    ("[A-Za-z0-9 ]{0,12}", "[A-Za-z .]{0,12}", 1400i32..2030, 0.0f64..1000.0)
        .prop_map(|(title, author, year, price)| Book::new(title, author, year, price))
}

fn sorted_copy(strategy: &dyn SortStrategy, books: &[Book]) -> Vec<Book> {
    let mut sorted = books.to_vec();
    strategy.sort(&mut sorted);
    sorted
}

/// Same books, ignoring order.
fn same_multiset(a: &[Book], b: &[Book]) -> bool {
    let mut remaining: Vec<&Book> = b.iter().collect();
    for book in a {
        match remaining.iter().position(|other| *other == book) {
            Some(i) => {
                remaining.swap_remove(i);
            }
            None => return false,
        }
    }
    remaining.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn author_order_is_non_decreasing(books in prop::collection::vec(arb_book(), 1..40)) {
            let sorted = sorted_copy(&SortByAuthor, &books);
            prop_assert!(sorted.windows(2).all(|w| w[0].author() <= w[1].author()));
        }

        #[test]
        fn year_order_is_non_increasing(books in prop::collection::vec(arb_book(), 1..40)) {
            let sorted = sorted_copy(&SortByYearDescending, &books);
            prop_assert!(sorted.windows(2).all(|w| w[0].year() >= w[1].year()));
        }

        #[test]
        fn price_order_is_non_decreasing(books in prop::collection::vec(arb_book(), 1..40)) {
            let sorted = sorted_copy(&SortByPrice, &books);
            prop_assert!(sorted.windows(2).all(|w| w[0].price() <= w[1].price()));
        }

        #[test]
        fn sorting_only_reorders(books in prop::collection::vec(arb_book(), 0..40)) {
            for strategy in sort_strategies() {
                let sorted = sorted_copy(strategy.as_ref(), &books);
                prop_assert!(
                    same_multiset(&books, &sorted),
                    "{} changed the books",
                    strategy.name()
                );
            }
        }

        #[test]
        fn library_sort_matches_strategy(books in prop::collection::vec(arb_book(), 0..20)) {
            let mut library = Library::with_books(books.clone());
            library.use_strategy(SortByYearDescending).unwrap();
            library.sort_books();
            let listed: Vec<Book> = library.list_books().cloned().collect();
            prop_assert_eq!(listed, sorted_copy(&SortByYearDescending, &books));
        }
    }

    #[test]
    fn empty_collection_is_noop_for_every_strategy() {
        for strategy in sort_strategies() {
            let mut books: Vec<Book> = Vec::new();
            strategy.sort(&mut books);
            assert!(books.is_empty(), "{}", strategy.name());
        }
    }
}
