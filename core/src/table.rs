//! Graph builder for adjacency tables.
//!
//! The table is a CSV file whose first column names the row's point and
//! whose remaining headers name the points it may connect to:
//!
//! ```text
//! POINT,A,B,C
//! A,0,10km 20/km,15km 23/km
//! B,10km 20/km,0,0
//! C,15km 23/km,0,0
//! ```
//!
//! Each cell is free text. Its digit runs are read as numbers: the first is
//! the distance, the second a price per unit of distance. Any zero among them
//! means "no connection" and a blank cell means the same.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::TableError;
use crate::graph::{Graph, Weight, Weights, INFINITY};

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[0-9]+").expect("static regex"))
}

/// What a single cell says about the connection between its row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Disconnected,
    Connected(Weights),
}

/// Interpret a cell's text.
///
/// Returns None when the text has a non-zero distance but no price to go with
/// it, or when a number or the resulting cost does not fit below [`INFINITY`].
pub fn parse_cell(text: &str) -> Option<Cell> {
    let numbers = number_pattern()
        .find_iter(text)
        .map(|m| m.as_str().parse::<Weight>().ok())
        .collect::<Option<Vec<Weight>>>()?;

    if numbers.is_empty() || numbers.contains(&0) {
        return Some(Cell::Disconnected);
    }

    match numbers.as_slice() {
        [distance, price, ..] => {
            let cost = distance.checked_mul(*price).filter(|&c| c < INFINITY)?;
            (*distance < INFINITY).then(|| Cell::Connected(Weights::new(*distance, cost)))
        }
        _ => None,
    }
}

/// Build a graph from an adjacency table read from `reader`.
///
/// Every header point becomes a vertex, even one without its own row. Each
/// row contributes directed entries `row -> column`; a symmetric table
/// therefore yields undirected connections.
pub fn load_table<R: Read>(reader: R) -> Result<Graph, TableError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(TableError::MissingHeader);
    }
    let columns: Vec<&str> = headers.iter().skip(1).collect();

    let mut graph = Graph::with_capacity(columns.len());
    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result?);
    }

    // Row points first so vertex ids follow the table's row order.
    let mut seen = HashSet::with_capacity(rows.len());
    for (i, record) in rows.iter().enumerate() {
        let label = record
            .get(0)
            .filter(|label| !label.is_empty())
            .ok_or(TableError::MissingLabel { row: i + 1 })?;
        if !seen.insert(label) {
            return Err(TableError::DuplicateRow {
                label: label.to_string(),
            });
        }
        graph.add_vertex(label);
    }
    for column in &columns {
        graph.add_vertex(column);
    }

    let mut skipped = 0usize;
    for record in &rows {
        let row = record.get(0).unwrap_or_default();
        for (column, text) in columns.iter().zip(record.iter().skip(1)) {
            match parse_cell(text) {
                Some(Cell::Connected(weights)) => graph.add_edge(row, column, weights),
                Some(Cell::Disconnected) => {
                    skipped += 1;
                    tracing::debug!(row, column = *column, text, "no connection");
                }
                None => {
                    return Err(TableError::MalformedCell {
                        row: row.to_string(),
                        column: column.to_string(),
                        text: text.to_string(),
                    })
                }
            }
        }
    }

    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped,
        "adjacency table loaded"
    );
    Ok(graph)
}

/// Build a graph from the adjacency table stored at `path`.
pub fn load_table_file(path: impl AsRef<Path>) -> Result<Graph, TableError> {
    let file = File::open(path.as_ref())?;
    load_table(BufReader::new(file))
}
