// src/bin/library_demo.rs

use std::error::Error;

use strategy_demos::bookshelf::{sort_strategies, Book, BookTable, Library, TableLayout};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut library = Library::new();
    // Presentation lives here, the library only announces the change.
    library.subscribe(|event| println!("\n>>> Sort strategy changed to: {}", event.strategy_name));

    library.add(Book::new("Kobzar", "Shevchenko T.", 1840, 350.00))?;
    library.add(Book::new("1984", "Orwell G.", 1949, 210.50))?;
    library.add(Book::new("It", "King S.", 1986, 450.00))?;
    library.add(Book::new("Animal Farm", "Orwell G.", 1945, 180.00))?;
    library.add(Book::new("The Forest Song", "Ukrainka L.", 1911, 275.25))?;

    println!("{}", BookTable::new("Library contents (unsorted)", library.list_books()));

    for strategy in sort_strategies() {
        library.set_strategy(strategy)?;
        library.sort_books();
        let heading = format!("Sorted {}", library.strategy_name().to_lowercase());
        println!("{}", BookTable::new(heading, library.list_books()));
    }

    println!(
        "{}",
        BookTable::new("Final order, wide layout", library.list_books())
            .with_layout(TableLayout::Wide)
    );
    Ok(())
}
