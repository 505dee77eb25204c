use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use wurzel::cli;
use wurzel::error::WurzelError;
use wurzel::report::PathReport;
use wurzel::{Discovery, DiscoveryCache};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    match run(args) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

/// Classify every requested path; returns whether all of them belong to a
/// repository.
fn run(args: cli::Args) -> Result<bool> {
    let paths = if args.paths.is_empty() {
        vec![std::env::current_dir()?]
    } else {
        args.paths.clone()
    };

    let mut cache = DiscoveryCache::new(Discovery::native(), 64);
    let mut reports = Vec::with_capacity(paths.len());
    let mut all_found = true;

    for path in paths {
        let path = absolutize(path)?;
        let path_str = path
            .to_str()
            .ok_or_else(|| WurzelError::NonUnicodePath { path: path.clone() })?;

        let report = PathReport::collect(&mut cache, path_str);
        log::debug!("classified {} as {:?}", path_str, report.kind);
        all_found &= report.found();
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if !args.quiet {
        for report in &reports {
            print!("{}", report.render());
        }
    }

    Ok(all_found)
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
