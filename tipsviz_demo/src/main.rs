// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders every tipsviz chart from a tips CSV into SVG files.

mod data;
mod draw;
mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tipsviz_charts::transforms::{NumericField, RangeFilter, Record};
use tipsviz_charts::{
    AreaChartSpec, BarChartSpec, ChartConfig, LineChartSpec, PieChartSpec, ScatterChartSpec,
    StackedAreaChartSpec, TreeChartSpec, TreeNode,
};
use tracing_subscriber::EnvFilter;

use crate::data::{InvalidRowPolicy, load_records};

#[derive(Parser, Debug)]
#[command(name = "tipsviz")]
#[command(about = "Render scatter, line, area, stacked area, bar, pie and tree charts of the tips dataset")]
struct Args {
    /// Tips CSV file (needs `total_bill`, `tip`, `size` and `day` columns).
    #[arg(short, long, default_value = "tipsviz_demo/data/tips.csv")]
    input: PathBuf,

    /// Directory the SVG files are written to.
    #[arg(short, long, default_value = "target/tipsviz")]
    out_dir: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Output height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Target number of ticks on numeric axes.
    #[arg(long, default_value_t = 10)]
    ticks: usize,

    /// Keep only records with `total_bill` at or above this value.
    #[arg(long)]
    min_total_bill: Option<f64>,

    /// Keep only records with `total_bill` at or below this value.
    #[arg(long)]
    max_total_bill: Option<f64>,

    /// Abort on the first invalid row instead of skipping it.
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn config(&self) -> ChartConfig {
        ChartConfig::default()
            .with_size(self.width, self.height)
            .with_tick_count(self.ticks)
    }

    fn filter(&self) -> Option<RangeFilter> {
        if self.min_total_bill.is_none() && self.max_total_bill.is_none() {
            return None;
        }
        Some(RangeFilter::new(
            NumericField::TotalBill,
            self.min_total_bill.unwrap_or(f64::NEG_INFINITY),
            self.max_total_bill.unwrap_or(f64::INFINITY),
        ))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let policy = if args.strict {
        InvalidRowPolicy::Abort
    } else {
        InvalidRowPolicy::Skip
    };
    let mut records = load_records(&args.input, policy)?;
    if let Some(filter) = args.filter() {
        records = filter.apply(&records);
    }

    let config = args.config();
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for (name, svg) in render_all(&records, &config)? {
        write_svg(&args.out_dir, name, &svg)?;
    }
    Ok(())
}

fn render_all(records: &[Record], config: &ChartConfig) -> Result<Vec<(&'static str, String)>> {
    let scatter = ScatterChartSpec::default().render(records, config);
    let line = LineChartSpec::default().render(records, config);
    let area = AreaChartSpec::default().render(records, config);
    let stacked = StackedAreaChartSpec::default().render(records, config)?;
    let bars = BarChartSpec::default().render(records, config)?;
    let hbars = BarChartSpec::horizontal().render(records, config)?;
    let pie = PieChartSpec::default().render(records, config)?;
    let tree = TreeChartSpec::new(sample_tree()).render(config);

    Ok(vec![
        ("scatter", draw::scatter(&scatter, config)),
        ("line", draw::line(&line, config)),
        ("area", draw::area(&area, config)),
        ("stacked_area", draw::stacked_area(&stacked, config)),
        ("bar", draw::bar(&bars, config, "Bar Chart: Average Total Bill per Day")),
        (
            "horizontal_bar",
            draw::bar(&hbars, config, "Horizontal Bar Chart: Average Total Bill per Day"),
        ),
        ("pie", draw::pie(&pie, config)),
        ("tree", draw::tree(&tree, config)),
    ])
}

fn write_svg(dir: &Path, name: &str, svg: &str) -> Result<()> {
    let path = dir.join(format!("{name}.svg"));
    std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote chart");
    Ok(())
}

fn sample_tree() -> TreeNode {
    TreeNode::new("Root").with_children([
        TreeNode::new("Branch 1").with_children([TreeNode::new("Leaf 1"), TreeNode::new("Leaf 2")]),
        TreeNode::new("Branch 2").with_children([
            TreeNode::new("Leaf 3"),
            TreeNode::new("Leaf 4").with_children([TreeNode::new("Subleaf")]),
        ]),
    ])
}
