use std::io::Write;

use crate::{ActivityRecord, Package, Result};

/// What to do with a package which can't be turned into a training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first failed package
    #[default]
    Halt,
    /// Log the failure and move to the next package
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub emitted: usize,
    pub skipped: usize,
}

/// Turns packages into summaries one by one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    pub on_error: OnError,
}

impl Runner {
    pub const fn new(on_error: OnError) -> Self {
        Self { on_error }
    }

    /// Every summary is handed to `emit`. Errors from `emit` always stop the run.
    pub fn run(
        &self,
        packages: impl IntoIterator<Item = Package>,
        mut emit: impl FnMut(&ActivityRecord) -> Result<()>,
    ) -> Result<RunReport> {
        let mut report = RunReport::default();

        for (index, package) in packages.into_iter().enumerate() {
            let workout = match (package.read(), self.on_error) {
                (Ok(workout), _) => workout,
                (Err(e), OnError::Halt) => return Err(e),
                (Err(e), OnError::Skip) => {
                    tracing::warn!(index, code = %package.code, "Skipping package. Reason: {e}");
                    report.skipped += 1;
                    continue;
                }
            };

            emit(&workout.show_training_info())?;
            report.emitted += 1;
        }

        tracing::info!(
            emitted = report.emitted,
            skipped = report.skipped,
            "Run finished"
        );

        Ok(report)
    }

    /// Write one summary line per package.
    pub fn print(
        &self,
        packages: impl IntoIterator<Item = Package>,
        out: &mut impl Write,
    ) -> Result<RunReport> {
        self.run(packages, |record| Ok(writeln!(out, "{record}")?))
    }
}
