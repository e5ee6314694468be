//! hitl-gate: decide whether an agent response needs human approval.
//!
//! Reads a JSON request `{"response": "..."}` from stdin (or the raw text
//! with `--raw`) and writes the decision as one JSON line to stdout.
//!
//! Usage: hitl-gate [--raw] [--explain] [--config PATH] [--print-config] [-v|-vv]

use std::io::Read;
use std::path::PathBuf;
use std::process::exit;

use hitl_gate::config::Config;
use hitl_gate::eval::DecisionEngine;
use hitl_gate::logging;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct GateInput {
    response: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    raw: bool,
    explain: bool,
    print_config: bool,
    config: Option<PathBuf>,
    verbosity: u8,
}

impl Args {
    fn level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--raw" => parsed.raw = true,
            "--explain" => parsed.explain = true,
            "--print-config" => parsed.print_config = true,
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-v" | "--verbose" => parsed.verbosity += 1,
            "-vv" => parsed.verbosity += 2,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(parsed)
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("hitl-gate: {e}");
            exit(2);
        }
    };
    logging::init(args.level());

    let config = match &args.config {
        Some(path) => match Config::load_from(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("{e}");
                exit(1);
            }
        },
        None => Config::load(),
    };

    if args.print_config {
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                log::error!("failed to render config: {e}");
                exit(1);
            }
        }
        return;
    }

    let engine = match DecisionEngine::from_config(&config) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            exit(1);
        }
    };

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        log::error!("failed to read stdin: {e}");
        exit(1);
    }

    let response = if args.raw {
        Some(input)
    } else {
        match serde_json::from_str::<GateInput>(&input) {
            Ok(v) => v.response,
            Err(e) => {
                log::error!("JSON parse error: {e}");
                exit(1);
            }
        }
    };
    let text = response.as_deref();

    let decision = engine.evaluate(text);
    logging::log_decision(text.unwrap_or_default(), &decision);

    let mut output = match serde_json::to_value(&decision) {
        Ok(v) => v,
        Err(e) => {
            log::error!("failed to serialize decision: {e}");
            exit(1);
        }
    };
    if args.explain {
        let matched: Vec<serde_json::Value> = engine
            .explain(text.unwrap_or_default())
            .iter()
            .map(|r| serde_json::json!({ "name": r.name(), "category": r.category() }))
            .collect();
        output["matched_rules"] = serde_json::Value::from(matched);
    }

    println!("{output}");
}
