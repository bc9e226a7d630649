//! Command-line interface for cardbox.
//!
//! This module provides the CLI structure and command handlers for the
//! `cardbox` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, EditCommand, ExportCommand, ListCommand, OpenCommand, SetArgs, ShareCommand,
    ShowCommand, StatsCommand, TemplateArg, ThemeArg,
};

/// cardbox - edit, preview, and share contact cards
///
/// A local-first contact-card tool: fill in your details, preview the card,
/// export it as a vCard file, and share it through size-budgeted snapshot
/// links.
#[derive(Debug, Parser)]
#[command(name = "cardbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Edit the working card
    #[command(subcommand)]
    Edit(EditCommand),

    /// Render the working card
    Show(ShowCommand),

    /// Write the working card to a .vcf file
    Export(ExportCommand),

    /// Snapshot the working card and print a shareable link
    Share(ShareCommand),

    /// Open a shareable link
    Open(OpenCommand),

    /// List stored snapshots
    List(ListCommand),

    /// Show snapshot store statistics
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "cardbox");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Stats(StatsCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        for (verbose, expected) in [
            (0, crate::logging::Verbosity::Normal),
            (1, crate::logging::Verbosity::Verbose),
            (2, crate::logging::Verbosity::Trace),
        ] {
            let cli = Cli {
                config: None,
                verbose,
                quiet: false,
                command: Command::Stats(StatsCommand { json: false }),
            };
            assert_eq!(cli.verbosity(), expected);
        }
    }

    #[test]
    fn test_parse_edit_set() {
        let args = vec!["cardbox", "edit", "set", "--first-name", "Ada"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Edit(EditCommand::Set(set)) => {
                assert_eq!(set.first_name.as_deref(), Some("Ada"));
                assert!(set.last_name.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_edit_add_field() {
        let args = vec!["cardbox", "edit", "add-field", "Office", "B12"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Edit(EditCommand::AddField { .. })
        ));
    }

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::try_parse_from(["cardbox", "show", "--vcf"]).unwrap();
        match cli.command {
            Command::Show(show) => assert!(show.vcf && !show.html),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_html_conflicts_with_vcf() {
        let result = Cli::try_parse_from(["cardbox", "show", "--html", "--vcf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_export_output() {
        let cli = Cli::try_parse_from(["cardbox", "export", "-o", "me.vcf"]).unwrap();
        match cli.command {
            Command::Export(export) => {
                assert_eq!(export.output, Some(PathBuf::from("me.vcf")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_open_link() {
        let cli =
            Cli::try_parse_from(["cardbox", "open", "https://cards.example.com/?id=abc"]).unwrap();
        match cli.command {
            Command::Open(open) => {
                assert_eq!(open.link, "https://cards.example.com/?id=abc");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let args = vec!["cardbox", "-c", "/custom/config.toml", "stats"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["cardbox", "-v", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_with_quiet() {
        let args = vec!["cardbox", "-q", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.quiet);
    }
}
