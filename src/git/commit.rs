use crate::emit::CommitSink;
use crate::error::{PaintError, Result};
use crate::util::GIT_DATE_FORMAT;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Creates empty commits by running `git commit` in a working tree.
///
/// The timestamp override is set on each spawned child only, the parent
/// process environment is left untouched.
pub struct GitCommitter {
    workdir: PathBuf,
}

impl GitCommitter {
    pub fn new<P: AsRef<Path>>(workdir: P) -> Self {
        Self {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }
}

impl CommitSink for GitCommitter {
    fn create_empty_commit(&mut self, when: NaiveDateTime, message: &str) -> Result<()> {
        let stamp = when.format(GIT_DATE_FORMAT).to_string();
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(["commit", "--allow-empty", "--quiet", "-m", message])
            .env("GIT_AUTHOR_DATE", &stamp)
            .env("GIT_COMMITTER_DATE", &stamp)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PaintError::CommitFailed(format!(
                "git commit at {stamp} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}
