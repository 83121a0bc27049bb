use std::{fs::File, io::Write, path::PathBuf};

use training::{OnError, Runner, read_packages, sample_packages};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with one package per row e.g. `RUN,15000,1,75`. Built-in samples are used when omitted
    pub input: Option<PathBuf>,
    /// Log and skip invalid packages instead of stopping
    #[arg(short, long, default_value_t = false, required = false)]
    pub skip_invalid: bool,
    /// Print summaries as json lines
    #[arg(short, long, default_value_t = false, required = false)]
    pub json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        skip_invalid,
        json,
    } = <Args as clap::Parser>::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let packages = match input {
        Some(input) => read_packages(
            File::open(&input).map_err(|e| {
                format!(
                    "Failed to read input file {}. Reason: {e}",
                    input.to_string_lossy()
                )
            })?,
        )?,
        None => sample_packages(),
    };

    let runner = Runner::new(match skip_invalid {
        true => OnError::Skip,
        false => OnError::Halt,
    });

    let mut stdout = std::io::stdout().lock();

    match json {
        true => runner.run(packages, |record| {
            serde_json::to_writer(&mut stdout, record).map_err(std::io::Error::from)?;
            Ok(writeln!(stdout)?)
        })?,
        false => runner.print(packages, &mut stdout)?,
    };

    stdout.flush()?;

    Ok(())
}
