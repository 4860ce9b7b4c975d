//! Stats and config command handlers.

use super::commands::{OutputFormat, StatsArgs};
use dicestats::{
    Chart, ChartRenderer, DicestatsConfig, Distribution, StatsRequest, Summary,
    TextChartRenderer,
};
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Serialize)]
struct StatsReport<'a> {
    request: String,
    summary: Summary,
    chart: &'a Chart,
}

/// Build and print the distribution described by `args`.
pub fn run_stats(
    args: &StatsArgs,
    config: &DicestatsConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = StatsRequest::new(args.count, args.sides)
        .with_operator(args.op)
        .with_drops(args.drops.clone());
    let distribution = request.build(&config.dice)?;
    info!(request = %request.describe(), support = distribution.len(), "Computed distribution");

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| format!("{}: {}", config.chart.default_title(), request.describe()));
    let chart = Chart::new(title, &distribution);

    let mut stdout = std::io::stdout().lock();
    match args.format {
        OutputFormat::Table => write_table(&mut stdout, &distribution, *config.chart.precision())?,
        OutputFormat::Json => {
            let report = StatsReport {
                request: request.describe(),
                summary: distribution.summary(),
                chart: &chart,
            };
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
        OutputFormat::Chart => {
            let renderer = TextChartRenderer::new(config.chart.clone());
            stdout.write_all(&renderer.render(&chart)?)?;
        }
    }
    Ok(())
}

fn write_table(
    out: &mut impl Write,
    distribution: &Distribution,
    precision: usize,
) -> std::io::Result<()> {
    let chart = Chart::new("", distribution);
    for ((value, mass), point) in distribution.iter().zip(chart.points()) {
        writeln!(
            out,
            "{:>6}  {:>12}  {:>9.prec$}%",
            value,
            mass.to_string(),
            point.y * 100.0,
            prec = precision
        )?;
    }

    let summary = distribution.summary();
    writeln!(
        out,
        "mean {} ({:.prec$}), std dev {:.prec$}",
        summary.exact_mean(),
        summary.mean(),
        summary.std_dev(),
        prec = precision
    )
}

/// Print the effective configuration.
pub fn show_config(config: &DicestatsConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
