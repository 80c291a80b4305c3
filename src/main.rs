use clap::Parser as _;

mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run(cli::Args::parse())
}
