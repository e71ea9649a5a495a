use anyhow::{Context, Result};
use clap::Parser;
use pathcost_core::{load_table_file, path_report, plan_route, Graph, Metric, PathError, PathReport};

mod config;
mod output;

use config::{Args, OutputFormat, Settings};

/// One report for a single selected metric, otherwise the full plan in output order.
fn collect_reports(
    graph: &Graph,
    metric: Option<Metric>,
    source: &str,
    destination: &str,
) -> Result<Vec<PathReport>, PathError> {
    match metric {
        Some(metric) => Ok(vec![path_report(graph, metric, source, destination)?]),
        None => {
            let plan = plan_route(graph, source, destination)?;
            Ok(vec![plan.shortest, plan.cheapest])
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from(&args);

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_writer(std::io::stderr)
        .init();

    let graph = load_table_file(&settings.table)
        .with_context(|| format!("loading connections from {}", settings.table.display()))?;
    tracing::info!(
        table = %settings.table.display(),
        points = graph.vertex_count(),
        connections = graph.edge_count(),
        "graph loaded"
    );

    // Every run completes before anything is printed.
    let reports = collect_reports(&graph, settings.metric, &args.source, &args.destination)
        .with_context(|| format!("finding routes from {} to {}", args.source, args.destination))?;
    let refs: Vec<&PathReport> = reports.iter().collect();

    match settings.format {
        OutputFormat::Text => print!("{}", output::render_text_all(&refs, &settings.separator)),
        OutputFormat::Json => println!("{}", output::render_json(&refs).context("encoding reports")?),
    }

    Ok(())
}
