mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gauge_core::GaugeError;
use gauge_score::{DEFAULT_PRECISION, MAX_PRECISION};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Gauge: similarity scoring for AI-generated commit messages.
#[derive(Parser, Debug)]
#[command(name = "gauge", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (default: auto-detect)
    #[arg(long, value_enum, default_value = "auto", global = true)]
    format: OutputFormat,

    /// Decimal places scores are rounded to (default: 4)
    #[arg(long, global = true)]
    precision: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Auto,
    Json,
    Jsonl,
    Human,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a generated message against the original
    Eval {
        /// The original (ground truth) commit message
        original: Option<String>,

        /// The generated commit message
        candidate: Option<String>,
    },

    /// Score JSONL requests from a file or stdin
    Batch {
        /// Path to JSONL file (default: stdin)
        file: Option<PathBuf>,
    },

    /// Show the intermediate values behind each score
    Explain {
        /// The original (ground truth) commit message
        original: Option<String>,

        /// The generated commit message
        candidate: Option<String>,
    },

    /// Print text after camelCase splitting
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Classify a commit message by type
    Classify {
        /// Commit message to classify
        message: String,
    },

    /// Choose between a first-pass message and its refinement
    Select {
        /// First-pass message (omit if generation failed)
        #[arg(long)]
        first: Option<String>,

        /// Refined message (omit if generation failed)
        #[arg(long)]
        second: Option<String>,
    },

    /// Fill a prompt template from a commit context
    Prompt {
        /// Path to the prompt template
        template: PathBuf,

        /// Path to the commit context JSON (default: stdin)
        #[arg(long)]
        context: Option<PathBuf>,

        /// Treat the template as a refinement prompt and fill [MESSAGE]
        #[arg(long)]
        response: Option<String>,
    },

    /// Print machine-readable tool capabilities
    Describe,
}

impl Cli {
    /// Resolve rounding precision: flag, then `GAUGE_PRECISION`, then default.
    pub fn precision(&self) -> Result<u32> {
        let places = match self.precision {
            Some(p) => p,
            None => match std::env::var("GAUGE_PRECISION") {
                Ok(raw) => raw.trim().parse().map_err(|_| {
                    GaugeError::Config(format!(
                        "GAUGE_PRECISION must be a non-negative integer, got {raw:?}"
                    ))
                })?,
                Err(_) => DEFAULT_PRECISION,
            },
        };
        if places > MAX_PRECISION {
            return Err(GaugeError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {places}"
            ))
            .into());
        }
        Ok(places)
    }

    /// Determine the effective output format.
    pub fn effective_format(&self) -> OutputFormat {
        match self.format {
            OutputFormat::Auto => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Human
                } else {
                    OutputFormat::Jsonl
                }
            }
            ref f => f.clone(),
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Log level implied by `-v` / `--quiet`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli);

    match cli.command {
        Some(Command::Eval {
            ref original,
            ref candidate,
        }) => {
            commands::eval::run(&cli, original.as_deref(), candidate.as_deref())?;
        }
        Some(Command::Batch { ref file }) => {
            commands::batch::run(&cli, file.as_deref())?;
        }
        Some(Command::Explain {
            ref original,
            ref candidate,
        }) => {
            commands::explain::run(&cli, original.as_deref(), candidate.as_deref())?;
        }
        Some(Command::Normalize { ref text }) => {
            commands::normalize::run(&cli, text)?;
        }
        Some(Command::Classify { ref message }) => {
            commands::classify::run(&cli, message)?;
        }
        Some(Command::Select {
            ref first,
            ref second,
        }) => {
            commands::select::run(&cli, first.as_deref(), second.as_deref())?;
        }
        Some(Command::Prompt {
            ref template,
            ref context,
            ref response,
        }) => {
            commands::prompt::run(&cli, template, context.as_deref(), response.as_deref())?;
        }
        Some(Command::Describe) => {
            commands::describe::run(&cli)?;
        }
        None => {
            if !cli.is_quiet() {
                println!("gauge v{}", env!("CARGO_PKG_VERSION"));
                println!("Run 'gauge --help' for usage information.");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_no_args() {
        let cli = Cli::try_parse_from(["gauge"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn cli_parses_verbose() {
        let cli = Cli::try_parse_from(["gauge", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn cli_quiet_overrides_verbose() {
        let cli = Cli::try_parse_from(["gauge", "-v", "--quiet"]).unwrap();
        assert!(cli.is_quiet());
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn cli_default_log_level_is_warn() {
        let cli = Cli::try_parse_from(["gauge"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn cli_parses_eval() {
        let cli = Cli::try_parse_from(["gauge", "eval", "fixBug", "fix bug"]).unwrap();
        match cli.command {
            Some(Command::Eval {
                ref original,
                ref candidate,
            }) => {
                assert_eq!(original.as_deref(), Some("fixBug"));
                assert_eq!(candidate.as_deref(), Some("fix bug"));
            }
            _ => panic!("expected Eval"),
        }
    }

    #[test]
    fn cli_parses_eval_missing_candidate() {
        let cli = Cli::try_parse_from(["gauge", "eval", "fixBug"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Eval {
                candidate: None,
                ..
            })
        ));
    }

    #[test]
    fn cli_parses_batch_stdin() {
        let cli = Cli::try_parse_from(["gauge", "batch"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Batch { file: None })));
    }

    #[test]
    fn cli_parses_batch_file() {
        let cli = Cli::try_parse_from(["gauge", "batch", "pairs.jsonl"]).unwrap();
        match cli.command {
            Some(Command::Batch { ref file }) => {
                assert_eq!(file.as_deref(), Some(std::path::Path::new("pairs.jsonl")));
            }
            _ => panic!("expected Batch"),
        }
    }

    #[test]
    fn cli_parses_select() {
        let cli = Cli::try_parse_from(["gauge", "select", "--second", "fix bug"]).unwrap();
        match cli.command {
            Some(Command::Select {
                ref first,
                ref second,
            }) => {
                assert!(first.is_none());
                assert_eq!(second.as_deref(), Some("fix bug"));
            }
            _ => panic!("expected Select"),
        }
    }

    #[test]
    fn cli_parses_prompt() {
        let cli = Cli::try_parse_from([
            "gauge",
            "prompt",
            "template.txt",
            "--context",
            "commit.json",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Prompt {
                ref template,
                ref context,
                ref response,
            }) => {
                assert_eq!(template, &PathBuf::from("template.txt"));
                assert_eq!(context, &Some(PathBuf::from("commit.json")));
                assert!(response.is_none());
            }
            _ => panic!("expected Prompt"),
        }
    }

    #[test]
    fn cli_parses_describe() {
        let cli = Cli::try_parse_from(["gauge", "describe"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Describe)));
    }

    #[test]
    fn cli_parses_format_json() {
        let cli = Cli::try_parse_from(["gauge", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["gauge", "eval", "a", "b", "--precision", "2", "--format", "human"])
                .unwrap();
        assert_eq!(cli.precision().unwrap(), 2);
        assert!(matches!(cli.effective_format(), OutputFormat::Human));
    }

    #[test]
    fn cli_precision_flag_is_bounded() {
        let cli = Cli::try_parse_from(["gauge", "--precision", "11"]).unwrap();
        assert!(cli.precision().is_err());
    }
}
