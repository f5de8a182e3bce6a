mod cli;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    natives_redirect::init_tracing();

    if let Err(err) = Cli::parse().run().await {
        eprintln!("natives-redirect error: {:#}", err);
        std::process::exit(1);
    }
}
