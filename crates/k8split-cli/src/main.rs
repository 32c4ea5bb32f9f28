//! k8split - Split a composite yaml file into multiple distinct files

use clap::{Parser, ValueEnum};
use k8split_core::LineEndingPolicy;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod error;
mod exit_codes;

#[derive(Parser)]
#[command(name = "k8split")]
#[command(version)]
#[command(about = "Split a composite yaml file into multiple distinct files", long_about = None)]
#[command(override_usage = "k8split -o <dir> <file>")]
struct Cli {
    /// Composite yaml file to split
    file: PathBuf,

    /// The name of the directory
    #[arg(short = 'o', long = "outdir", default_value = ".", env = "K8SPLIT_OUTDIR")]
    outdir: PathBuf,

    /// How the line break of the `---` separator is chosen
    #[arg(
        long,
        value_enum,
        default_value_t = LineEndings::Platform,
        env = "K8SPLIT_LINE_ENDINGS"
    )]
    line_endings: LineEndings,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LineEndings {
    /// Honor CRLF input only when running on Windows
    Platform,
    /// Honor CRLF input on every platform
    Content,
}

impl From<LineEndings> for LineEndingPolicy {
    fn from(value: LineEndings) -> Self {
        match value {
            LineEndings::Platform => LineEndingPolicy::Platform,
            LineEndings::Content => LineEndingPolicy::Content,
        }
    }
}

fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are reported as "errors" too
            if err.use_stderr() {
                eprint!("{}", err.render());
                std::process::exit(exit_codes::USAGE_ERROR);
            }
            print!("{}", err.render());
            std::process::exit(exit_codes::SUCCESS);
        }
    };

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = commands::split::run(&cli.file, &cli.outdir, cli.line_endings.into()) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
