// src/bin/graph_demo.rs

use clap::Parser;
use log::error;
use std::cell::RefCell;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use strategy_demos::constants::{MAX_SURFACE_PX, PLOT_HEIGHT, PLOT_WIDTH};
use strategy_demos::graph::{GraphWindow, Scene};
use strategy_demos::plot_framework::draw_scene_to_file;

/// Plot a selectable function into PNG files, one per redraw.
#[derive(Debug, Parser)]
#[command(name = "graph_demo", version = strategy_demos::crate_version())]
struct Args {
    /// Display name of the function to plot (see --list)
    #[arg(short, long)]
    function: Option<String>,

    /// Draw surface width in pixels
    #[arg(
        long,
        default_value_t = PLOT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SURFACE_PX))
    )]
    width: u32,

    /// Draw surface height in pixels
    #[arg(
        long,
        default_value_t = PLOT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SURFACE_PX))
    )]
    height: u32,

    /// Directory the PNG files are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Print the available functions and exit
    #[arg(long)]
    list: bool,

    /// Plot every available function
    #[arg(long, conflicts_with = "function")]
    all: bool,
}

/// Turns a display name such as "y = 5 sin(x)" into "y_5_sin_x".
fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn output_path(dir: &Path, scene: &Scene) -> PathBuf {
    dir.join(format!(
        "{}_{}x{}.png",
        slug(scene.function_name),
        scene.width,
        scene.height
    ))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut window = GraphWindow::default();

    if args.list {
        println!("Available functions:");
        for name in window.options() {
            println!("  {name}");
        }
        return Ok(());
    }

    std::fs::create_dir_all(&args.output)?;
    // Size the surface before listening so only selected functions are written.
    window.resize(args.width, args.height);

    // The listener cannot return errors, so failures are collected and reported after.
    let failures: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&failures);
    let output_dir = args.output.clone();
    window.on_redraw(move |scene| {
        let path = output_path(&output_dir, scene);
        if let Err(e) = draw_scene_to_file(&path, scene) {
            error!("Failed to write '{}': {}", path.display(), e);
            sink.borrow_mut().push(path.display().to_string());
        }
    });

    let selection: Vec<String> = if args.all {
        window.options().map(str::to_string).collect()
    } else {
        let first = window.selected().name().to_string();
        vec![args.function.clone().unwrap_or(first)]
    };

    for name in &selection {
        window.select(name)?;
    }

    let failures = failures.borrow();
    if !failures.is_empty() {
        let message = format!(
            "Failed to write {} plot(s): {}",
            failures.len(),
            failures.join(", ")
        );
        return Err(message.into());
    }
    Ok(())
}
