//! Chart document rendering
//!
//! Each visualization is a self-contained HTML document: an embedded tera
//! template plus a plotly figure serialized to JSON. Documents are written
//! to `<output>/visualizations/` and fully rebuilt on every run.

pub mod figures;

use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, IntoDiagnostic, Result};
use rust_embed::Embed;
use serde_json::Value;
use tera::Tera;

use crate::datasets::Tables;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// One renderable chart document
pub struct ChartDoc {
    /// Output file stem
    pub slug: &'static str,

    pub title: String,

    /// Plotly figure: `{"data": [...], "layout": {...}}`
    pub figure: Value,
}

/// Render a chart document to HTML
pub fn render(doc: &ChartDoc) -> Result<String> {
    let template = EmbeddedTemplates::get("chart.html.tera")
        .ok_or_else(|| miette!("embedded template chart.html.tera not found"))?;
    let source = std::str::from_utf8(template.data.as_ref()).into_diagnostic()?;

    let mut tera = Tera::default();
    tera.add_raw_template("chart", source).into_diagnostic()?;

    let mut context = tera::Context::new();
    context.insert("title", &doc.title);
    context.insert("figure", &doc.figure.to_string());

    tera.render("chart", &context).into_diagnostic()
}

/// Build every defined chart from the loaded tables
pub fn all(tables: &Tables, focus: &str) -> Vec<ChartDoc> {
    vec![
        figures::top_investors_bar(&tables.infrastructure),
        figures::ownership_heatmap(&tables.infrastructure),
        figures::focus_comparison(&tables.infrastructure, focus),
        figures::manufacturer_ownership_pie(&tables.stakes),
        figures::operations_timeline(&tables.operations),
        figures::munition_types_breakdown(&tables.operations),
        figures::system_types_distribution(&tables.systems),
        figures::ownership_table(&tables.infrastructure),
        figures::stock_performance_war(&tables.stocks),
        figures::stock_performance_comparison(&tables.stocks),
        figures::fms_contracts_timeline(&tables.contracts),
        figures::lobbying_trends(&tables.lobbying),
        figures::focus_timeseries(&tables.timeseries, focus),
    ]
}

/// Render every chart into the visualization directory.
///
/// Returns the written paths, in definition order.
pub fn write_all(viz_dir: &Path, tables: &Tables, focus: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(viz_dir).into_diagnostic()?;

    let mut written = Vec::new();
    for doc in all(tables, focus) {
        let html = render(&doc)?;
        let path = viz_dir.join(format!("{}.html", doc.slug));
        fs::write(&path, html).into_diagnostic()?;
        written.push(path);
    }
    Ok(written)
}
