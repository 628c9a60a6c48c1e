use crate::graph::RenderOptions;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitgraph")]
#[command(about = "Render a git repository's daily commit activity as an SVG heatmap")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Directory to search for a git repository (parents are searched too)")]
    pub path: PathBuf,

    #[arg(
        long,
        help = "Number of weeks to render",
        default_value_t = 24,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub weeks: u16,

    #[arg(long, help = "Document title", default_value = "gitgraph")]
    pub title: String,

    #[arg(long, help = "Output the rendered days as JSON instead of SVG")]
    pub json: bool,

    #[arg(short, long, help = "Write to this file instead of standard output")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            weeks: usize::from(self.weeks),
            title: self.title.clone(),
            ..RenderOptions::default()
        }
    }

    pub fn execute(self) -> Result<()> {
        let options = self.render_options();
        crate::graph::exec(&self.path, &options, self.json, self.output.as_deref())
    }
}
