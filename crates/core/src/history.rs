//! Version-control history as a ticker data source.
//!
//! The frame loop never talks to `git` directly; it takes anything that
//! implements [`HistorySource`] so the parser and overlay stay testable
//! without a repository. Every failure mode here means "run without a
//! ticker", never "abort".

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

/// Upper bound on records fetched for the ticker.
pub const MAX_RECORDS: usize = 20;

/// Environment variable naming an alternate repository directory.
pub const GIT_DIR_ENV: &str = "YULE_LOG_GIT_DIR";

/// Why no history text could be produced.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// The tool could not be spawned at all (missing binary, bad permissions).
    #[error("history tool could not be run: {0}")]
    Spawn(#[from] std::io::Error),
    /// The tool ran but exited non-zero (e.g. not inside a repository).
    #[error("history tool exited with failure (code {0:?})")]
    CommandFailed(Option<i32>),
    /// The tool succeeded but produced nothing to show.
    #[error("history tool produced no output")]
    Empty,
}

/// Narrow seam between the frame loop and whatever provides history text.
///
/// Implementations return the raw record text: one
/// `hash<TAB>author<TAB>relative_time<TAB>subject` line per record,
/// most-recent first.
pub trait HistorySource {
    /// Fetch at most `max_records` raw history records.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] when no usable text is available; callers
    /// are expected to treat that as "no ticker", not as a fatal error.
    fn fetch_raw_history(&self, max_records: usize) -> Result<String, HistoryError>;
}

/// History source backed by a one-shot `git log` subprocess.
#[derive(Debug, Default)]
pub struct GitHistorySource {
    repo_dir: Option<PathBuf>,
}

impl GitHistorySource {
    /// Source for the current working directory's repository, unless
    /// [`GIT_DIR_ENV`] points somewhere else.
    pub fn from_env() -> Self {
        GitHistorySource {
            repo_dir: std::env::var_os(GIT_DIR_ENV).map(PathBuf::from),
        }
    }

    /// Source pinned to an explicit repository directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        GitHistorySource {
            repo_dir: Some(dir.into()),
        }
    }
}

impl HistorySource for GitHistorySource {
    fn fetch_raw_history(&self, max_records: usize) -> Result<String, HistoryError> {
        let mut cmd = Command::new("git");
        cmd.args([
            "log",
            "-n",
            &max_records.to_string(),
            "--pretty=format:%h%x09%an%x09%ar%x09%s",
        ]);
        if let Some(dir) = &self.repo_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        if !output.status.success() {
            debug!(code = ?output.status.code(), "git log failed");
            return Err(HistoryError::CommandFailed(output.status.code()));
        }

        // Subjects in real repositories are not guaranteed valid UTF-8.
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(text)
    }
}
