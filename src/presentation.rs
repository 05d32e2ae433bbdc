// src/presentation.rs
use covfilter_domain::analytics::sort_rows;
use covfilter_domain::model::entities::{Hit, TableRow};
use covfilter_usecase::dto::FilterOutcome;
use serde_json::json;

use crate::config::Config;
use crate::options::OutputFormat;

pub fn print_results(rows: &[TableRow], outcome: &FilterOutcome, config: &Config) {
    // Hidden rows stay in the collection; only visible ones are rendered.
    let mut visible: Vec<TableRow> = rows.iter().filter(|r| r.visible).cloned().collect();
    if let Some(spec) = &config.sort {
        sort_rows(&mut visible, spec);
    }

    match config.format {
        OutputFormat::Table => print_table(&visible, outcome),
        OutputFormat::Csv => print_sv(&visible, ","),
        OutputFormat::Tsv => print_sv(&visible, "\t"),
        OutputFormat::Json => print_json(&visible, outcome),
    }
}

fn print_table(rows: &[TableRow], outcome: &FilterOutcome) {
    println!("covfilter v{}", crate::VERSION);
    println!();
    println!("ACCESSION             SCORE   PCT COV     Q COV");
    println!("-----------------------------------------------");
    for row in rows {
        let h = &row.hit;
        println!(
            "{:<18}{:>9}{:>10.1}{:>10.1}",
            h.accession,
            h.score,
            h.pct_coverage.value(),
            h.q_coverage.value()
        );
    }
    println!("---");
    println!("{} shown, {} hidden.", outcome.visible, outcome.hidden);
}

fn print_sv(rows: &[TableRow], sep: &str) {
    println!("accession{sep}score{sep}pct_coverage{sep}q_coverage");
    for row in rows {
        let h = &row.hit;
        println!(
            "{}{sep}{}{sep}{}{sep}{}",
            h.accession, h.score, h.pct_coverage, h.q_coverage
        );
    }
}

fn print_json(rows: &[TableRow], outcome: &FilterOutcome) {
    let hits: Vec<&Hit> = rows.iter().map(|r| &r.hit).collect();
    let doc = json!({
        "hits": hits,
        "shown": outcome.visible,
        "hidden": outcome.hidden,
    });
    if let Ok(text) = serde_json::to_string_pretty(&doc) {
        println!("{text}");
    }
}
