// src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};
use covfilter_domain::options::SortSpec;

use crate::options::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "covfilter",
    version,
    about = "Filter BLAST hit tables by PCT/Q coverage thresholds"
)]
pub struct Args {
    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// Tabular hit report (`sacc score qcovhsp pident`, tab-separated)
    #[arg(value_hint = ValueHint::FilePath)]
    pub report: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct FilterOptions {
    /// Minimum PCT coverage, 0-100
    #[arg(long, value_name = "PCT", help_heading = "Filter")]
    pub min_pct: Option<String>,

    /// Minimum Q coverage, 0-100
    #[arg(long, value_name = "Q", help_heading = "Filter")]
    pub min_q: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Sort keys (multiple allowed, e.g. score:desc,pct:desc,accession)
    #[arg(long, help_heading = "Output")]
    pub sort: Option<SortSpec>,
}
