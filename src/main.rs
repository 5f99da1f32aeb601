use clap::Parser;
use tracing::debug;

use events_log_parser::utils::{setup_logging, validate_args};
use events_log_parser::{analyze_event_log, print_analysis_results, Args};

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let outcome = validate_args(&args).and_then(|()| analyze_event_log(&args));

    match outcome {
        Ok(result) => print_analysis_results(&result, &args),
        Err(e) => {
            debug!(action = "abort", component = "main", error = ?e, "Analysis failed");
            // Not routed through tracing: RUST_LOG=off must not silence it.
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
