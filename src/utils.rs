use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Log to stderr, `info` and up when verbose, errors only otherwise. `RUST_LOG` wins when set.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{value:.6}"),
        None => "n/a".to_string(),
    }
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.log.is_dir() {
        anyhow::bail!("--log must point to a file, not a directory: {:?}", args.log);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Args;
    use clap::Parser;

    #[test]
    fn formats_like_fixed_six_decimals() {
        assert_eq!(format_average(Some(1.2)), "1.200000");
        assert_eq!(format_average(Some(4.0 / 3.0)), "1.333333");
        assert_eq!(format_average(None), "n/a");
    }

    #[test]
    fn rejects_directory_as_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let dir_arg = dir.path().to_str().unwrap();
        let args = Args::parse_from(["events-log-parser", "--log", dir_arg]);
        assert!(validate_args(&args).is_err());

        let args = Args::parse_from(["events-log-parser"]);
        assert!(validate_args(&args).is_ok());
    }
}
