//! CSV export of saved-command results.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use jcapi::{ApiKey, BaseUrl, JcApi, JcCommandResult};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::output;

/// Fixed header row.
pub const HEADER: [&str; 4] = [
    "SYSTEM ID",
    "USERNAME",
    "JUMPCLOUD USERNAME",
    "COMMAND REQUEST TIME",
];

pub async fn run(cli: Cli) -> Result<()> {
    let key = cli
        .key
        .filter(|k| !k.is_empty())
        .context("API key must be provided.")?;
    let command_id = cli
        .command_id
        .filter(|id| !id.is_empty())
        .context("Command id must be provided")?;

    let out = cli.out.filter(|p| !p.as_os_str().is_empty());
    let destination = match &out {
        Some(out) => {
            let path = std::path::absolute(out)
                .context("Entered an incorrect file path for CSV output")?;
            ensure_absent(&path)?;
            Some(path)
        }
        None => None,
    };

    let base_url = BaseUrl::new(&cli.url).context("Invalid API URL")?;
    let api = JcApi::new(ApiKey::new(key)?, base_url);

    info!(%command_id, "fetching command results");
    let results = api
        .get_command_results_by_saved_command_id(&command_id)
        .await
        .context("Failed to fetch command results")?;

    match destination {
        Some(path) => {
            let file = create_output(&path)?;
            let rows = write_results(&results, file).context("Error writing to csv")?;
            output::success(&format!("Wrote {} rows to {}", rows, path.display()));
        }
        None => {
            write_results(&results, io::stdout().lock()).context("Error writing to csv")?;
        }
    }

    Ok(())
}

/// Refuse to continue if the output path already exists.
fn ensure_absent(path: &Path) -> Result<()> {
    let exists = path
        .try_exists()
        .with_context(|| format!("Problem with the outfile: {}", path.display()))?;
    if exists {
        bail!("Output already exists: {}", path.display());
    }
    Ok(())
}

/// Create the output file, failing if something appeared at the path.
fn create_output(path: &Path) -> Result<File> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            bail!("Output already exists: {}", path.display())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Problem with the outfile: {}", path.display()))
        }
    }
}

/// Write the header and one row per non-empty output line.
///
/// The writer is flushed after the header and after each result, so rows
/// already written survive a later failure. Returns the number of data rows.
pub fn write_results<W: Write>(results: &[JcCommandResult], writer: W) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(HEADER)?;
    csv.flush()?;

    let mut rows = 0;
    for result in results {
        let lines = result
            .response
            .data
            .output
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty());

        for line in lines {
            csv.write_record([
                result.system.as_str(),
                line,
                "",
                result.request_time.as_str(),
            ])?;
            rows += 1;
        }
        csv.flush()?;
        debug!(system = %result.system, rows, "wrote command result");
    }

    Ok(rows)
}
