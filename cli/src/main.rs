use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

mod commands;

#[derive(Parser)]
#[command(
    name = "propkit",
    version,
    about = "Inspect and derive records with property metadata"
)]
struct Cli {
    /// Read the input as a bare JSON object instead of a record document
    #[arg(long, global = true)]
    plain: bool,
    /// Log every operation (same as PROPKIT_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the keys whose attribute flag is set
    Keys {
        /// Record file, or `-` for stdin
        file: PathBuf,
        /// writable, enumerable or configurable
        attribute: String,
    },
    /// Print whether the record is frozen, sealed or non-extensible
    Probe { file: PathBuf },
    /// Print a copy of the record with one property made read-only
    Lock { file: PathBuf, key: String },
    /// Print a frozen copy of the record
    Freeze { file: PathBuf },
    /// Print the normalized record document
    Describe { file: PathBuf },
}

impl Command {
    fn file(&self) -> &PathBuf {
        match self {
            Command::Keys { file, .. }
            | Command::Probe { file }
            | Command::Lock { file, .. }
            | Command::Freeze { file }
            | Command::Describe { file } => file,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = cli.command.file();
    let source = match read_input(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{} could not read '{}': {e}",
                "error:".red().bold(),
                file.display().yellow()
            );
            process::exit(1);
        }
    };

    match commands::run(&cli.command, &source, cli.plain) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{} {:?}", "error:".red().bold(), miette::Report::new(err));
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().filter_or("PROPKIT_LOG", "warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn read_input(file: &PathBuf) -> io::Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(file)
    }
}
