//! Demonstration driver: builds a seven-node tree through positions and
//! prints its structure.

use colored::Colorize;
use postree::{BinTree, TreeResult};
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    setup_logging();

    if let Err(e) = run() {
        eprintln!("{}", format!("Tree Exception: {}", e).red());
        process::exit(1);
    }
}

fn run() -> TreeResult<()> {
    let mut bt: BinTree<i32> = BinTree::new();

    bt.set_root(1)?;
    let pos = bt.root()?;

    bt.set_left(pos, 2)?;
    bt.set_right(pos, 3)?;

    // Descend to the left child and give it two children of its own
    let pos = pos.left(&bt);
    bt.set_left(pos, 4)?;
    bt.set_right(pos, 5)?;

    // One level up, then over to the right child
    let pos = pos.parent(&bt).right(&bt);
    bt.set_left(pos, 6)?;
    bt.set_right(pos, 7)?;

    println!("Root: {}", bt.get(bt.root()?)?);
    println!("External: {}", pos.is_external(&bt)?);
    println!("Size: {}", bt.size());
    println!("Empty: {}", bt.is_empty());

    println!();
    println!("Print Tree:");
    bt.print();
    println!();

    Ok(())
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_names(false)
                .with_filter(env_filter),
        )
        .init();
}
