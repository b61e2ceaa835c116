use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bitsquat",
    about = "Find bit-flipped domain variants (TLD and domain name)",
    version,
    long_about = None
)]
pub struct Args {
    /// File containing domains (one per line), or - for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Also show invalid (non-registrable) TLD variants
    #[arg(short = 'i', long)]
    pub show_invalid: bool,

    /// Only check TLD bit-flips, skip domain name bit-flips
    #[arg(short = 't', long)]
    pub tld_only: bool,

    /// Load the registrable TLD set from a file instead of the embedded snapshot
    #[arg(long)]
    pub tlds: Option<PathBuf>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
