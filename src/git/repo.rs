use crate::error::{GraphError, Result};
use chrono::{DateTime, Utc};
use gix::{discover, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Discover a repository at `path` or any of its parent directories.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let start = path.as_ref();
        let repo = discover(start).map_err(|e| GraphError::repository_not_found(start, e))?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!(path = %path.display(), "discovered repository");

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Committer timestamps of every commit reachable from HEAD, each commit
    /// visited once. An unborn HEAD yields no timestamps; a shallow clone
    /// yields the commits it has.
    pub fn commit_times(&self) -> Result<Vec<DateTime<Utc>>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            debug!("HEAD is unborn");
            return Ok(Vec::new());
        }
        let head_id = head.peel_to_commit_in_place()?.id;

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {pos}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Walking commits...");

        // rev_walk stops at shallow boundaries
        let mut times = Vec::new();
        for info in self.repo.rev_walk([head_id]).all()? {
            let secs = info?.object()?.time()?.seconds;
            let timestamp =
                DateTime::from_timestamp(secs, 0).ok_or(GraphError::InvalidTimestamp(secs))?;
            times.push(timestamp);
            pb.inc(1);
        }

        pb.finish_and_clear();
        debug!(commits = times.len(), "walked history");
        Ok(times)
    }
}
