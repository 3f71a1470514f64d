//! Command-line interface definitions using Clap
//!
//! The harness takes exactly one argument: the operation to measure.
//! Everything else about a run is fixed; tests that need smaller runs go
//! through the library configuration instead.

use clap::Parser;

/// fpbench - floating-point operation latency harness
#[derive(Parser)]
#[command(name = "fpbench")]
#[command(
    version,
    about = "Measures per-call latency of one arithmetic operation under native f64 and arbitrary-precision engines",
    long_about = None
)]
pub struct Cli {
    /// Operation to measure: add, sub, mul, div, sqrt, exp, pow, log, sin, cos, tan
    pub operation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_operation_argument() {
        let cli = Cli::try_parse_from(["fpbench", "add"]).unwrap();
        assert_eq!(cli.operation, "add");
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(Cli::try_parse_from(["fpbench"]).is_err());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["fpbench", "add", "sub"]).is_err());
    }
}
