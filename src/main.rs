#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod input;
mod prelude;
mod prompt;
mod quantity;
mod tables;

use std::io::{stdin, stdout};

use clap::{Parser, crate_version};
use tracing::level_filters::LevelFilter;

use crate::{
    cli::{Args, Command, Session},
    core::profile::PROFILES,
    prelude::*,
    tables::build_profiles_table,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(match args.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        })
        .init();
    info!(version = crate_version!(), "starting…");

    let environment = args.environment.try_into_environment()?;
    match args.into_command() {
        Command::Interactive(args) => {
            Session::new(&args, &environment, stdin().lock(), stdout().lock()).run()?;
        }
        Command::Estimate(args) => {
            cli::estimate::run(&args, &environment, &mut stdout().lock())?;
        }
        Command::Profiles => {
            println!("{}", build_profiles_table(PROFILES));
        }
    }
    Ok(())
}
