use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "conformance-runner",
    about = "Run the propkit YAML conformance fixtures"
)]
pub struct Cli {
    #[arg(default_value = "conformance")]
    pub path: PathBuf,

    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Break results down per directory and list common failures
    #[arg(long, default_value_t = false)]
    pub analyze: bool,
}
