//! mathgatectl entry point.

use anyhow::{bail, Context, Result};
use clap::Parser;
use mathgate_core::{classify, Outcome, Pipeline, ProblemInput, Tolerances};
use mathgatectl::bench;
use mathgatectl::cache::ExtractCache;
use mathgatectl::cli::{Cli, Command};
use mathgatectl::output;
use mathgatectl::request::{self, Resolved};
use tracing_subscriber::EnvFilter;

/// Exit code for a STOP outcome (the named reason is in the output).
const EXIT_STOP: i32 = 2;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let tolerances = match &cli.tolerances {
        Some(path) => Tolerances::load(path)
            .with_context(|| format!("loading tolerances from {}", path.display()))?,
        None => Tolerances::default(),
    };
    let pipeline = Pipeline::with_tolerances(tolerances);

    match cli.command {
        Command::Solve {
            text,
            structured,
            file,
            explain_routing,
        } => {
            let resolved = resolve_input(text, structured, file)?;
            let classification = match (&resolved, explain_routing) {
                (Resolved::Input(ProblemInput::Raw { raw }), true) => Some(classify(raw)),
                _ => None,
            };
            let report = match resolved {
                Resolved::Input(input) => pipeline.solve(input),
                Resolved::Refused(report) => report,
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::render_report(&report, classification.as_ref());
            }
            Ok(match report.outcome {
                Outcome::Pass => 0,
                Outcome::Stop => EXIT_STOP,
            })
        }

        Command::Bench {
            cases,
            cache_size,
            no_cache,
        } => {
            let contents = std::fs::read_to_string(&cases)
                .with_context(|| format!("reading case file {}", cases.display()))?;
            let cases = bench::parse_cases(&contents).context("parsing case file")?;
            let mut cache = if no_cache {
                None
            } else {
                Some(ExtractCache::new(cache_size))
            };
            let summary = bench::run(&cases, &pipeline, &mut cache);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::render_summary(&summary);
            }
            Ok(0)
        }

        Command::Categories => {
            if cli.json {
                let listing: Vec<serde_json::Value> = mathgate_core::classify::keyword_tables()
                    .map(|(category, keywords)| {
                        serde_json::json!({
                            "category": category,
                            "keywords": keywords,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for (category, keywords) in mathgate_core::classify::keyword_tables() {
                    println!("{:<15} {}", category.to_string(), keywords.join(", "));
                }
            }
            Ok(0)
        }
    }
}

/// Build the pipeline input from whichever source the caller supplied.
fn resolve_input(
    text: Option<String>,
    structured: Option<String>,
    file: Option<std::path::PathBuf>,
) -> Result<Resolved> {
    if let Some(text) = text {
        return Ok(request::from_text(text));
    }
    if let Some(json) = structured {
        return Ok(request::from_structured_json(&json));
    }
    if let Some(path) = file {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Ok(request::from_file_contents(&contents));
    }
    bail!("no problem supplied: pass text, --structured, or --file");
}
