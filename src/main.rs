use clap::Parser;
use cloud_iplist_aggregate::cli::{run, Cli};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    log4rs::init_file("log4rs.yml", Default::default())
        .map_err(|e| format!("Error initializing log4rs from log4rs.yml: {e}"))?;
    log::info!("#Start main()");

    let cli = Cli::parse();
    run(cli).await?;

    Ok(())
}
