use super::{layout, render, write_json, RenderOptions, Timeline};
use crate::git::GitRepo;
use anyhow::Context;
use chrono::Local;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

pub fn exec(
    path: &Path,
    options: &RenderOptions,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let repo = GitRepo::discover(path)?;
    let times = repo.commit_times().context("Failed to walk commit history")?;

    let today = Local::now().date_naive();
    let timeline = Timeline::from_timestamps(times, &Local, today)?;
    let total_commits = timeline.total_commits();
    debug!(total_commits, days = timeline.len(), "aggregated activity");

    let mut out: Box<dyn Write> = match output {
        Some(file) => Box::new(BufWriter::new(
            File::create(file)
                .with_context(|| format!("Failed to create {}", file.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if json {
        let grid = layout(timeline.window(options.window_days()), options)?;
        write_json(&grid, repo.path(), total_commits, &mut out)?;
    } else {
        render(&timeline, options, &mut out)?;
    }

    Ok(())
}
