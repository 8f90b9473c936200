use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use lode_solvers::one_step::TerminalStep;

/// How many steps the run applies relative to the mesh.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TerminalStepArg {
    /// Stop at the expiry after N steps.
    #[default]
    Skip,
    /// Apply one more step evaluated at the expiry, N + 1 in total.
    Apply,
}

impl From<TerminalStepArg> for TerminalStep {
    fn from(arg: TerminalStepArg) -> Self {
        match arg {
            TerminalStepArg::Skip => TerminalStep::Skip,
            TerminalStepArg::Apply => TerminalStep::Apply,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lode",
    about = "Explicit Euler on du/dt + u = 2 + t, u(0) = A, over [0, T]",
    version
)]
pub struct LodeCli {
    /// Initial condition A
    #[arg(
        short = 'a',
        long = "initial-condition",
        default_value_t = 2.0,
        allow_negative_numbers = true
    )]
    pub initial_condition: f64,

    /// Expiry T, the end of the integration interval
    #[arg(short = 't', long = "expiry", default_value_t = 2.0)]
    pub expiry: f64,

    /// Number of uniform steps N
    #[arg(short = 'n', long = "steps", default_value_t = 100)]
    pub steps: usize,

    /// Whether to apply the extra step at the expiry
    #[arg(long = "terminal-step", value_enum, default_value_t = TerminalStepArg::Skip)]
    pub terminal_step: TerminalStepArg,

    /// Print the mesh points
    #[arg(long = "mesh", action = ArgAction::SetTrue)]
    pub print_mesh: bool,

    /// Print the old and new value of every step
    #[arg(long = "trace", action = ArgAction::SetTrue)]
    pub trace: bool,

    /// Stop the run once |u| exceeds this bound
    #[arg(long = "divergence-bound", value_name = "BOUND")]
    pub divergence_bound: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl LodeCli {
    /// Maps the `-v` count to a log level filter.
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let cli = LodeCli::try_parse_from(["lode"]).expect("defaults parse");

        assert_eq!(cli.initial_condition, 2.0);
        assert_eq!(cli.expiry, 2.0);
        assert_eq!(cli.steps, 100);
        assert_eq!(cli.terminal_step, TerminalStepArg::Skip);
        assert!(!cli.print_mesh);
        assert!(!cli.trace);
        assert_eq!(cli.divergence_bound, None);
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn parses_overrides() {
        let cli = LodeCli::try_parse_from([
            "lode",
            "--initial-condition",
            "-1.5",
            "-t",
            "0.5",
            "-n",
            "20",
            "--terminal-step",
            "apply",
            "--trace",
            "--divergence-bound",
            "1e6",
            "-vv",
        ])
        .expect("overrides parse");

        assert_eq!(cli.initial_condition, -1.5);
        assert_eq!(cli.expiry, 0.5);
        assert_eq!(cli.steps, 20);
        assert_eq!(TerminalStep::from(cli.terminal_step), TerminalStep::Apply);
        assert!(cli.trace);
        assert_eq!(cli.divergence_bound, Some(1e6));
        assert_eq!(cli.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_non_numeric_steps() {
        assert!(LodeCli::try_parse_from(["lode", "--steps", "many"]).is_err());
    }
}
