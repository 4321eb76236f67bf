//! Demo driver: inserts a fixed key sequence and dumps the tree after
//! every step.
//!
//! ```text
//! btree-demo [MIN_DEGREE]
//! RUST_LOG=btree_index=trace btree-demo
//! ```

use std::process::ExitCode;

use btree_index::{BTree, Key, Result, DEFAULT_MIN_DEGREE};
use tracing_subscriber::EnvFilter;

const DEMO_KEYS: [Key; 8] = [10, 20, 5, 6, 12, 30, 7, 17];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let degree = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(arg = %arg, error = %e, "minimum degree is not a number");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_MIN_DEGREE,
    };

    match run(degree) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(degree: usize) -> Result<()> {
    let mut tree = BTree::new(degree)?;
    tracing::info!(degree = %tree.degree(), keys = ?DEMO_KEYS, "starting demo");

    for key in DEMO_KEYS {
        println!("\n--- Inserting: {} ---", key);
        tree.insert(key);
        print!("{}", tree);
    }

    tree.validate()?;

    println!("\n*** FINAL B-TREE ({}) ***", tree.degree());
    print!("{}", tree);
    tracing::info!(height = tree.height(), stats = %tree.stats(), "demo finished");
    Ok(())
}
