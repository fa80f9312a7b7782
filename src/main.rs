use std::{fs, time::Duration};

use clap::Parser;
use polite::{Outcome, interpreter::evaluator::limits::Limits, run_with_limits};

/// polite runs programs written in a language that minds its manners.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells polite to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the outcome as a JSON document instead of one value per line.
    #[arg(short, long)]
    json: bool,

    /// Stops the program after this many evaluation steps.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Stops the program after this many milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut limits = Limits::default();
    if let Some(max_steps) = args.max_steps {
        limits = limits.with_max_steps(max_steps);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        limits = limits.with_time_limit(Duration::from_millis(timeout_ms));
    }

    let result = run_with_limits(&script, limits);
    let failed = result.is_err();

    if args.json {
        match serde_json::to_string_pretty(&Outcome::from(result)) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to render the outcome as JSON: {e}"),
        }
    } else {
        match result {
            Ok(outputs) => outputs.iter().for_each(|value| println!("{value}")),
            Err(e) => eprintln!("{e}"),
        }
    }

    if failed {
        std::process::exit(1);
    }
}
