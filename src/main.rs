//! CLI entry point for treewalk

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::debug;
use treewalk::{OutputConfig, StreamingFormatter, TreeWalker, WalkerConfig};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(about = "Print an indented directory tree, skipping node_modules and .git")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip directories with this exact name (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Do not skip node_modules and .git by default
    #[arg(long = "no-default-ignores")]
    no_default_ignores: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        let base = if self.no_default_ignores {
            WalkerConfig::default().without_default_ignores()
        } else {
            WalkerConfig::default()
        };
        self.ignore
            .iter()
            .fold(base, |config, name| config.with_ignore(name.as_str()))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version land here too
        if !e.use_stderr() {
            e.exit();
        }
        eprintln!("treewalk: argument parsing error: {}", e);
        process::exit(1);
    });
    debug!("{:?}", args);

    let walker = TreeWalker::new(args.walker_config());
    let mut formatter = StreamingFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });

    match walker.walk_streaming(&args.path, &mut formatter) {
        Ok(_) => {}
        Err(e) if e.is_broken_pipe() => debug!("output closed early"),
        Err(e) => {
            eprintln!("treewalk: {}", e);
            process::exit(1);
        }
    }
}
