//! `mfpga`: loads multi-FPGA partition cases and writes reports about them.
//!
//! `mfpga run` loads a case and writes the visualization JSON and the net
//! group report, `mfpga stats` prints a summary, and `mfpga viz` and
//! `mfpga groups` write one report each.

#![warn(missing_docs)]

mod groups;
mod pipeline;
mod run;
mod stats;
mod viz;

use std::io::IsTerminal;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Multi-FPGA partition case loader.
#[derive(Parser, Debug)]
#[command(name = "mfpga", version, about = "Multi-FPGA partition case loader")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show per-file details and input warnings.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `mfpga.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a case and write the visualization data and net group report.
    Run(RunArgs),
    /// Load a case and print a summary.
    Stats(CaseArgs),
    /// Write the visualization JSON.
    Viz(VizArgs),
    /// Write the net group report.
    Groups(GroupsArgs),
}

/// Selects the case to load.
#[derive(Args, Debug, Default)]
pub struct CaseArgs {
    /// Case directory holding `design.info`, `design.fpga.out`, `design.net`
    /// and `design.topo`. Overrides `mfpga.toml`.
    #[arg(long)]
    pub case: Option<String>,
}

/// Arguments for the `mfpga run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub case: CaseArgs,

    /// Also write the consolidated group report.
    #[arg(long)]
    pub consolidate: bool,
}

/// Arguments for the `mfpga viz` subcommand.
#[derive(Args, Debug)]
pub struct VizArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub case: CaseArgs,

    /// Output path (default: from `mfpga.toml`, else `scripts/visualization_data.json`).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `mfpga groups` subcommand.
#[derive(Args, Debug)]
pub struct GroupsArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub case: CaseArgs,

    /// Output path; `-` writes to stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Merge groups that reach the same set of FPGAs.
    #[arg(long)]
    pub consolidate: bool,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Group report format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Line-oriented text.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print per-file details and warnings.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Run(ref args) => run::run(args, &global),
        Command::Stats(ref args) => stats::run(args, &global),
        Command::Viz(ref args) => viz::run(args, &global),
        Command::Groups(ref args) => groups::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_run_default() {
        let cli = Cli::parse_from(["mfpga", "run"]);
        match cli.command {
            Command::Run(ref args) => {
                assert!(args.case.case.is_none());
                assert!(!args.consolidate);
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_run_with_case() {
        let cli = Cli::parse_from([
            "mfpga",
            "run",
            "--case",
            "benchmarks/case03",
            "--consolidate",
        ]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.case.case.as_deref(), Some("benchmarks/case03"));
                assert!(args.consolidate);
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn parse_stats() {
        let cli = Cli::parse_from(["mfpga", "stats", "--case", "c"]);
        match cli.command {
            Command::Stats(ref args) => assert_eq!(args.case.as_deref(), Some("c")),
            _ => panic!("expected Stats command"),
        }
    }

    #[test]
    fn parse_viz_output() {
        let cli = Cli::parse_from(["mfpga", "viz", "-o", "out/viz.json"]);
        match cli.command {
            Command::Viz(ref args) => {
                assert_eq!(args.output.as_deref(), Some("out/viz.json"));
                assert!(args.case.case.is_none());
            }
            _ => panic!("expected Viz command"),
        }
    }

    #[test]
    fn parse_groups_default() {
        let cli = Cli::parse_from(["mfpga", "groups"]);
        match cli.command {
            Command::Groups(ref args) => {
                assert!(args.output.is_none());
                assert!(!args.consolidate);
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Groups command"),
        }
    }

    #[test]
    fn parse_groups_with_args() {
        let cli = Cli::parse_from([
            "mfpga",
            "groups",
            "--consolidate",
            "--format",
            "json",
            "--output",
            "-",
        ]);
        match cli.command {
            Command::Groups(ref args) => {
                assert!(args.consolidate);
                assert_eq!(args.format, ReportFormat::Json);
                assert_eq!(args.output.as_deref(), Some("-"));
            }
            _ => panic!("expected Groups command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["mfpga", "--quiet", "--color", "never", "stats"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mfpga", "run", "-v", "--color", "always"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["mfpga", "--config", "/path/to/mfpga.toml", "run"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/mfpga.toml"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["mfpga", "groups", "--format", "xml"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["mfpga"]).is_err());
    }
}
