use crate::io::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "classmin")]
#[command(about = "Cross-file CSS class name minifier", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory to recursively scan for HTML, CSS, JS, and PHP files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only show class renaming without modifying files
    #[arg(long)]
    pub preview: bool,

    /// Allow duplicate classes in rewritten HTML class attributes
    #[arg(long = "allow-duplicates")]
    pub allow_duplicates: bool,

    /// Preview output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Preview output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glob patterns to exclude from both passes (comma-separated)
    #[arg(long = "ignore", value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
