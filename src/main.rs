use clap::Parser;

mod adapters;
mod cli;
mod config;
mod store;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run(cli::Cli::parse())
}
