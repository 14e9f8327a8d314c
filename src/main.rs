use anyhow::Result;
use clap::Parser;
use classmin::cli::Cli;
use classmin::commands::{self, MinifyConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    commands::run(MinifyConfig {
        path: cli.path,
        preview: cli.preview,
        allow_duplicates: cli.allow_duplicates,
        format: cli.format,
        output: cli.output,
        ignore_patterns: cli.ignore_patterns,
    })
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
