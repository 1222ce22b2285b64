// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::EventFormat;

#[derive(Debug, Parser)]
#[command(bin_name = "nyan")]
#[command(about = "🐱 Nyan Cat flies over your cargo test results 🌈")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  cargo test | nyan [\x1b[34mOptions\x1b[0m]\n  nyan [\x1b[34mOptions\x1b[0m] -- [\x1b[32mCommand\x1b[0m]\n\n{all-args}\n"
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,

    #[arg(
        last = true,
        value_name = "COMMAND",
        help = "Test command to run, eg: `nyan -- cargo test`. When omitted, test output is read from stdin"
    )]
    pub command: Vec<String>,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        long,
        short = 'f',
        value_enum,
        default_value_t = EventFormat::Auto,
        help = "Format of the test output being read"
    )]
    pub format: EventFormat,

    #[arg(
        long,
        short = 'c',
        help = "Terminal width in columns, instead of asking the terminal"
    )]
    pub columns: Option<u16>,

    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file named `nyan_cat_log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(long, value_name = "PATH", help = "Log to this file instead (implies `-l`)")]
    pub log_file: Option<PathBuf>,
}
