//! foglio: command-line client for a JSONPlaceholder-style blog-post API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod handlers;
mod io;
mod print;

use std::process;

use clap::Parser;

use args::Cli;

#[tokio::main]
async fn main() {
    foglio::infra::telemetry::init();
    let cli = Cli::parse();
    if let Err(error) = handlers::run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}
