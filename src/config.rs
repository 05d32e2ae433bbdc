// src/config.rs
use std::path::PathBuf;

use covfilter_domain::criteria::CriteriaInput;
use covfilter_domain::options::SortSpec;

use crate::args::Args;
use crate::options::OutputFormat;

/// Resolved runtime configuration derived from CLI arguments.
#[derive(Debug)]
pub struct Config {
    pub report: PathBuf,
    pub criteria: CriteriaInput,
    pub format: OutputFormat,
    pub sort: Option<SortSpec>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            report: args.report,
            criteria: CriteriaInput {
                // Exact-match mode needs a host-supplied predicate; the CLI
                // installs none, so it always filters by thresholds.
                exact_match: false,
                min_pct: args.filter.min_pct.unwrap_or_default(),
                min_q: args.filter.min_q.unwrap_or_default(),
            },
            format: args.output.format,
            sort: args.output.sort,
        }
    }
}
