pub mod aggregate;
pub mod color;
pub mod exec;
pub mod layout;
pub mod output;

pub use aggregate::Timeline;
pub use color::Tier;
pub use exec::exec;
pub use layout::{layout, Canvas, Grid, RenderCell, RenderOptions};
pub use output::{write_json, write_svg};

use crate::error::Result;
use std::io::Write;

/// Render the most recent window of `timeline` as an SVG document.
pub fn render<W: Write>(timeline: &Timeline, options: &RenderOptions, out: &mut W) -> Result<()> {
    let grid = layout(timeline.window(options.window_days()), options)?;
    write_svg(&grid, options, out)
}
