// File: crates/demo/src/main.rs
// Summary: Demo registers the economist theme and writes the example charts to HTML.

mod charts;

use std::path::PathBuf;

use anyhow::{Context, Result};
use broadsheet_core::{registry, Theme};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    // Register and enable the theme; every chart saved below picks it up.
    let theme = Theme::economist();
    let name = theme.name.clone();
    registry::register(theme, true);
    info!("registered theme '{}' (enabled)", name);

    let out_dir = PathBuf::from("target/out");

    let scatter = charts::scatter_demo();
    let out_scatter = out_dir.join("scatter_plot.html");
    scatter
        .save_html(&out_scatter)
        .with_context(|| format!("writing '{}'", out_scatter.display()))?;
    println!("Wrote {}", out_scatter.display());

    let bar = charts::bar_demo();
    let out_bar = out_dir.join("bar_chart.html");
    bar.save_html(&out_bar)
        .with_context(|| format!("writing '{}'", out_bar.display()))?;
    println!("Wrote {}", out_bar.display());

    Ok(())
}
