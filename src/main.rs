use clap::Parser;
use log::{debug, warn};
use snafu::ErrorCompat;
use std::error::Error;

mod args;
mod report;

use crate::args::Args;
use crate::report::config_reader::resolve_settings;
use crate::report::{run_report, ReportResult};

fn run(args: &Args) -> ReportResult<()> {
    let settings = resolve_settings(args)?;
    run_report(&settings)
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    debug!("args: {:?}", args);

    if let Err(e) = run(&args) {
        warn!("Error occured {:?}", e);
        eprintln!("An error occured: {}", e);
        let mut source = e.source();
        while let Some(s) = source {
            eprintln!("  caused by: {}", s);
            source = s.source();
        }
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
