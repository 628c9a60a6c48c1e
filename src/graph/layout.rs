use super::color::Tier;
use crate::error::{GraphError, Result};
use crate::model::DayBucket;
use crate::util::commit_phrase;
use chrono::NaiveDate;

/// Grid geometry and document settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub weeks: usize,
    pub rows: usize,
    /// Side of the box a cell is drawn in, stroke margin included.
    pub box_size: u32,
    pub cell_size: u32,
    pub spacing: u32,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            weeks: 24,
            rows: 7,
            box_size: 11,
            cell_size: 10,
            spacing: 2,
            title: "gitgraph".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn window_days(&self) -> usize {
        self.weeks * self.rows
    }

    fn pitch(&self) -> u32 {
        self.box_size + self.spacing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn for_bucket_count(count: usize, options: &RenderOptions) -> Self {
        let columns = count as f64 / options.rows as f64 + 1.0;
        Self {
            width: (columns * f64::from(options.pitch())) as u32,
            height: options.box_size * (options.rows as u32 + options.spacing),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderCell {
    pub date: NaiveDate,
    pub commits: u32,
    pub column: usize,
    pub row: usize,
    pub x: u32,
    pub y: u32,
    pub tier: Tier,
    /// Set only on the most recent day in the window.
    pub highlight: bool,
}

impl RenderCell {
    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    pub fn label(&self) -> String {
        format!("{}\n{}", self.date.format("%Y-%m-%d"), commit_phrase(self.commits))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub canvas: Canvas,
    pub max_commits: u32,
    pub cells: Vec<RenderCell>,
}

/// Lay out a chronologically ordered window column-major, one column per week.
pub fn layout(window: &[DayBucket], options: &RenderOptions) -> Result<Grid> {
    let max_commits = window
        .iter()
        .map(|b| b.commits)
        .max()
        .ok_or(GraphError::EmptyRenderWindow)?;

    let last = window.len() - 1;
    let pitch = options.pitch();
    let cells = window
        .iter()
        .enumerate()
        .map(|(n, bucket)| {
            let column = n / options.rows;
            let row = n % options.rows;
            RenderCell {
                date: bucket.date,
                commits: bucket.commits,
                column,
                row,
                x: column as u32 * pitch,
                y: row as u32 * pitch,
                tier: Tier::classify(bucket.commits, max_commits),
                highlight: n == last,
            }
        })
        .collect();

    Ok(Grid {
        canvas: Canvas::for_bucket_count(window.len(), options),
        max_commits,
        cells,
    })
}
