//! Split command - write each document of a composite file to its own file

use std::fs;
use std::path::Path;

use k8split_core::{LineEndingPolicy, Splitter};

use crate::display::{self, ConsoleProgress};
use crate::error::{CliError, Result};

pub fn run(input: &Path, output_dir: &Path, line_endings: LineEndingPolicy) -> Result<()> {
    fs::metadata(input).map_err(|e| {
        CliError::usage(format!("unable to open file {} - {}", input.display(), e))
    })?;

    let output = fs::metadata(output_dir).map_err(|e| {
        CliError::environment_with_help(
            format!("unable to use output directory {} - {}", output_dir.display(), e),
            "create the directory first, or pass an existing one with --outdir",
        )
    })?;
    if !output.is_dir() {
        return Err(CliError::environment_with_help(
            format!("{} is not a directory", output_dir.display()),
            "pass an existing directory with --outdir",
        ));
    }

    tracing::debug!(
        input = %input.display(),
        output_dir = %output_dir.display(),
        ?line_endings,
        "starting split"
    );

    display::print_start(input);

    let summary = Splitter::new(output_dir)
        .line_endings(line_endings)
        .split_file(input, &mut ConsoleProgress)?;

    display::print_summary(&summary);

    Ok(())
}
