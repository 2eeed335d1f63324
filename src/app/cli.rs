use clap::Parser;
use std::path::PathBuf;

/// Default configuration file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".llm-context.json";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Bundle configured files and directories into one tagged context file for LLMs"
)]
pub struct Cli {
    /// Configuration file to read
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Print the bundle to stdout instead of writing the configured output file
    #[arg(long)]
    pub stdout: bool,
}
