use std::process::ExitCode;

use clap::Parser;
use covfilter::args::Args;
use covfilter::config::Config;
use covfilter::presentation;
use covfilter_infra::console::ConsoleNotifier;
use covfilter_infra::report::FileHitSource;
use covfilter_ports::notify::Notifier;
use covfilter_shared_kernel::{CovFilterError, ErrorContext, Result};
use covfilter_usecase::{FilterTable, LoadHits};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let source = FileHitSource::new(&config.report);
    let mut rows = LoadHits::new(&source).run().context("loading hit report")?;
    let outcome = FilterTable::new().run(&config.criteria, &mut rows)?;
    presentation::print_results(&rows, &outcome, config);
    Ok(())
}

fn report_error(err: &CovFilterError) {
    match err {
        // Criteria rejections are user-facing messages, not diagnostics.
        CovFilterError::Domain(e) => {
            ConsoleNotifier.warn(&e.to_string()).ok();
        }
        other => eprintln!("Error: {other}"),
    }
}
