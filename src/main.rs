//! CLI entry point for twig

use std::io;
use std::path::Path;
use std::process;

use clap::Parser;
use twig::{StreamingFormatter, StreamingWalker, TreeConfig, TreeError};

/// Root rendered on every run.
const ROOT_DIR: &str = ".";

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(
    about = "Print the current directory as a tree, skipping node_modules, dist and __pycache__"
)]
#[command(version)]
struct Args {}

fn main() {
    // Diagnostics go to stderr; RUST_LOG=debug shows skipped directories
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _ = Args::parse();

    let walker = StreamingWalker::new(TreeConfig::default());
    let mut formatter = StreamingFormatter::new(io::stdout().lock());

    match walker.walk_streaming(Path::new(ROOT_DIR), &mut formatter) {
        Ok(_) => {}
        Err(TreeError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("twig: {}", e);
            process::exit(1);
        }
    }
}
