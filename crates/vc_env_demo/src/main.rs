//! Reads the sample [`Config`](model::Config) from the environment, or
//! renders it as env-file text.
//!
//! ```text
//! vc_env_demo marshal > .env
//! vc_env_demo parse --env-file .env
//! RUST_LOG=trace vc_env_demo parse --prefix APP_
//! ```
#![allow(clippy::std_instead_of_core, reason = "binary")]
#![allow(clippy::std_instead_of_alloc, reason = "binary")]

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vc_env::envmap::ProcessEnv;
use vc_env::{EnvConfig, EnvParser};

use env_file::Layered;
use model::Config;

mod env_file;
mod model;

// -----------------------------------------------------------------------------
// Command line

#[derive(Debug, Parser)]
#[command(name = "vc_env_demo", version, about)]
struct Cli {
    /// Log at `debug` level unless `RUST_LOG` says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read the config and print it.
    Parse {
        /// Env file whose entries take precedence over the process environment.
        #[arg(long, value_name = "PATH")]
        env_file: Option<PathBuf>,

        #[command(flatten)]
        options: Options,
    },
    /// Print the sample config as env-file text.
    Marshal {
        #[command(flatten)]
        options: Options,
    },
}

#[derive(Debug, Clone, Args)]
struct Options {
    /// Prefix prepended to every key.
    #[arg(long, default_value = "")]
    prefix: String,

    /// Accept empty or unset keys and store zero values.
    #[arg(long)]
    allow_empty: bool,
}

impl Options {
    fn env_config(&self) -> EnvConfig {
        EnvConfig::new()
            .with_key_prefix(self.prefix.clone())
            .with_allow_empty(self.allow_empty)
    }
}

// -----------------------------------------------------------------------------
// Commands

fn parse_config(env_file: Option<PathBuf>, options: &Options) -> Result<Config, Box<dyn Error>> {
    let entries = match env_file {
        Some(path) => env_file::load(&path)?,
        None => Default::default(),
    };

    let parser = EnvParser::with_source(options.env_config(), Layered::new(entries, ProcessEnv));
    let mut config = Config::default();
    parser.parse(&mut config)?;
    Ok(config)
}

fn marshal_config(options: &Options) -> Result<String, Box<dyn Error>> {
    let parser = EnvParser::new(options.env_config());
    Ok(parser.marshal(&Config::sample())?)
}

fn init_logger(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Parse { env_file, options } => {
            let config = parse_config(env_file, &options)?;
            println!("{config:#?}");
        }
        Command::Marshal { options } => {
            print!("{}", marshal_config(&options)?);
        }
    }

    Ok(())
}
