use clap::Parser;
use std::error::Error;
use subnet_vlsm::cli::{run, Cli};
use subnet_vlsm::config::{init_logging, Config};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logging(&config)?;
    log::info!("#Start main()");

    run(Cli::parse())
}
