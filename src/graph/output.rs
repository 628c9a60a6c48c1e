use super::layout::{Grid, RenderOptions};
use crate::error::Result;
use crate::model::{DayEntry, GraphOutput, SCHEMA_VERSION};
use crate::util::escape_xml;
use chrono::Utc;
use std::io::Write;
use std::path::Path;

const HIGHLIGHT_STYLE: &str = "stroke-width:1px;stroke:red";

pub fn write_svg<W: Write>(grid: &Grid, options: &RenderOptions, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\
         <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\
         <title>{}</title>",
        grid.canvas.width,
        grid.canvas.height,
        escape_xml(&options.title)
    )?;

    for cell in &grid.cells {
        let stroke = if cell.highlight { HIGHLIGHT_STYLE } else { "" };
        writeln!(
            out,
            "<g><rect x=\"{}\" y=\"{}\" width=\"{size}\" height=\"{size}\" style=\"fill:{};{}\" />\
             <title>{}</title></g>",
            cell.x,
            cell.y,
            cell.color(),
            stroke,
            cell.label(),
            size = options.cell_size,
        )?;
    }

    writeln!(out, "</svg>")?;
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(
    grid: &Grid,
    repository_path: &Path,
    total_commits: u64,
    out: &mut W,
) -> Result<()> {
    let output = GraphOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repository_path.to_string_lossy().to_string(),
        total_commits,
        days: grid
            .cells
            .iter()
            .map(|cell| DayEntry {
                date: cell.date,
                commits: cell.commits,
                tier: cell.tier,
                color: cell.color().to_string(),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{layout, Tier, Timeline};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn example_grid() -> Grid {
        let timeline = Timeline::from_dates(
            vec![date(2024, 1, 1), date(2024, 1, 1), date(2024, 1, 1), date(2024, 1, 3)],
            date(2024, 1, 3),
        )
        .unwrap();
        layout(timeline.window(168), &RenderOptions::default()).unwrap()
    }

    #[test]
    fn svg_document_matches_expected_markup() {
        let mut out = Vec::new();
        write_svg(&example_grid(), &RenderOptions::default(), &mut out).unwrap();
        let svg = String::from_utf8(out).unwrap();

        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\" ?>",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"18\" height=\"99\">",
            "<title>gitgraph</title>\n",
            "<g><rect x=\"0\" y=\"0\" width=\"10\" height=\"10\" style=\"fill:#1e6823;\" />",
            "<title>2024-01-01\n3 commits</title></g>\n",
            "<g><rect x=\"0\" y=\"13\" width=\"10\" height=\"10\" style=\"fill:#eee;\" />",
            "<title>2024-01-02\n0 commits</title></g>\n",
            "<g><rect x=\"0\" y=\"26\" width=\"10\" height=\"10\" ",
            "style=\"fill:#8cc665;stroke-width:1px;stroke:red\" />",
            "<title>2024-01-03\n1 commit</title></g>\n",
            "</svg>\n",
        );
        assert_eq!(svg, expected);
    }

    #[test]
    fn svg_title_is_escaped() {
        let options = RenderOptions {
            title: "a & <b>".to_string(),
            ..RenderOptions::default()
        };
        let mut out = Vec::new();
        write_svg(&example_grid(), &options, &mut out).unwrap();
        let svg = String::from_utf8(out).unwrap();
        assert!(svg.contains("<title>a &amp; &lt;b&gt;</title>"));
        assert_eq!(svg.matches(HIGHLIGHT_STYLE).count(), 1);
    }

    #[test]
    fn json_lists_window_days() {
        let mut out = Vec::new();
        write_json(&example_grid(), Path::new("/tmp/repo"), 4, &mut out).unwrap();
        let parsed: GraphOutput = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed.version, SCHEMA_VERSION);
        assert_eq!(parsed.total_commits, 4);
        assert_eq!(parsed.days.len(), 3);
        assert_eq!(parsed.days[0].tier, Tier::Highest);
        assert_eq!(parsed.days[1].color, "#eee");
        assert_eq!(parsed.days[2].date, date(2024, 1, 3));
    }
}
