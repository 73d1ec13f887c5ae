use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use halifax_transit::agency::{AgencyConfig, ConfigError, HalifaxTransit};
use halifax_transit::filter::Rule;

/// Optional JSON file overriding the built-in tables.
const CONFIG_ENV: &str = "HALIFAX_TRANSIT_CONFIG";

fn usage() -> String {
    let rules: Vec<&str> = Rule::ALL.iter().map(Rule::as_str).collect();
    format!(
        "usage: halifax-transit <rule> < values.txt\n\nrules: {}",
        rules.join(", ")
    )
}

fn load_agency() -> Result<HalifaxTransit, ConfigError> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            info!(%path, "loading agency config");
            HalifaxTransit::new(AgencyConfig::from_path(&path)?)
        }
        Err(_) => Ok(HalifaxTransit::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Some(name) = std::env::args().nth(1) else {
        eprintln!("{}", usage());
        return ExitCode::from(2);
    };
    let rule: Rule = match name.parse() {
        Ok(rule) => rule,
        Err(e) => {
            eprintln!("{e}\n\n{}", usage());
            return ExitCode::from(2);
        }
    };

    let agency = match load_agency() {
        Ok(agency) => agency,
        Err(e) => {
            error!(error = %e, "invalid agency config");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut lines = 0usize;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                return ExitCode::FAILURE;
            }
        };

        match rule.apply(&agency, &line) {
            Ok(value) => {
                if let Err(e) = writeln!(out, "{value}") {
                    eprintln!("Error writing output: {e}");
                    return ExitCode::FAILURE;
                }
            }
            Err(fatal) => {
                // Malformed feed data: stop the whole run.
                error!(line = lines + 1, stop_id = fatal.raw(), "aborting import");
                eprintln!("Fatal: {fatal}");
                return ExitCode::FAILURE;
            }
        }
        lines += 1;
    }

    info!(%rule, lines, "done");
    ExitCode::SUCCESS
}
