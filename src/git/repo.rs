use crate::error::{PaintError, Result};
use crate::intensity::HistoryStore;
use crate::util::{parse_anchor, today};
use chrono::{DateTime, Local, NaiveDate, Utc};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `--anchor`: a date expression, or a revision whose commit date is used.
    pub fn resolve_anchor(&self, input: Option<&str>) -> Result<NaiveDate> {
        let today = today();
        let Some(input) = input else {
            return Ok(today);
        };

        if let Some(date) = parse_anchor(input, today) {
            return Ok(date);
        }

        let id = self
            .repo
            .rev_parse_single(input)
            .map_err(|e| PaintError::Parse(format!("Invalid date or revision '{input}': {e}")))?;

        let commit = id
            .object()?
            .try_into_commit()
            .map_err(|_| PaintError::Parse(format!("Not a commit: {input}")))?;

        let secs = commit.time()?.seconds;
        DateTime::<Utc>::from_timestamp(secs, 0)
            .map(|dt| dt.with_timezone(&Local).date_naive())
            .ok_or_else(|| PaintError::InvalidDate(format!("Invalid timestamp: {secs}")))
    }

    /// Tips of every reference plus HEAD, peeled to commits.
    fn tips(&self) -> Result<Vec<ObjectId>> {
        let mut tips = Vec::new();

        if let Ok(head) = self.repo.head_id() {
            tips.push(head.detach());
        }

        let platform = self
            .repo
            .references()
            .map_err(|e| PaintError::GitRepo(format!("Failed to list references: {e}")))?;
        let refs = platform
            .all()
            .map_err(|e| PaintError::GitRepo(format!("Failed to list references: {e}")))?;

        for reference in refs {
            let mut reference =
                reference.map_err(|e| PaintError::GitRepo(format!("Bad reference: {e}")))?;
            let Ok(id) = reference.peel_to_id_in_place() else {
                continue;
            };
            // tags may point at trees or blobs; those have no history
            let peeled = self
                .repo
                .find_object(id.detach())
                .ok()
                .and_then(|obj| obj.peel_to_kind(gix::object::Kind::Commit).ok());
            if let Some(commit) = peeled {
                tips.push(commit.id);
            }
        }

        Ok(tips)
    }
}

impl HistoryStore for GitRepo {
    fn count_commits_since(&self, since: DateTime<Utc>) -> Result<usize> {
        let since_secs = since.timestamp();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from(self.tips()?);
        let mut count = 0usize;

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Scanning history...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            if commit.time()?.seconds >= since_secs {
                count += 1;
                pb.inc(1);
            }

            // shallow clones end at commits whose parents were never fetched
            for pid in commit.parent_ids().map(|id| id.detach()) {
                if self.repo.has_object(&pid) {
                    stack.push_back(pid);
                }
            }
        }

        pb.finish_and_clear();
        Ok(count)
    }
}
