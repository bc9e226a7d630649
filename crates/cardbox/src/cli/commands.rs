//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::card::{Template, Theme};

/// Editor commands operating on the working card.
#[derive(Debug, Subcommand)]
pub enum EditCommand {
    /// Set one or more card fields
    Set(SetArgs),

    /// Add a custom label/value field
    AddField {
        /// Display label
        label: String,
        /// Display value
        value: String,
        /// Optional icon name
        #[arg(long)]
        icon: Option<String>,
    },

    /// Remove a custom field by id
    RemoveField {
        /// The field id (shown by `show`)
        id: String,
    },

    /// Add a social platform link
    AddSocial {
        /// Platform name (unique per card)
        platform: String,
        /// Profile URL
        url: String,
        /// Icon name
        #[arg(long, default_value = "link")]
        icon: String,
    },

    /// Remove a social platform link
    RemoveSocial {
        /// Platform name
        platform: String,
    },

    /// Add a gallery image URL
    AddImage {
        /// Image URL
        url: String,
    },

    /// Remove a gallery image URL
    RemoveImage {
        /// Image URL
        url: String,
    },

    /// Reset the working card to defaults
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Field-setting arguments; only the provided options are applied.
#[derive(Debug, Default, Args)]
pub struct SetArgs {
    /// Given name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Family name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Company or organization
    #[arg(long)]
    pub organization: Option<String>,

    /// Job title
    #[arg(long)]
    pub title: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Website URL
    #[arg(long)]
    pub website: Option<String>,

    /// Profile photo data URI
    #[arg(long)]
    pub photo: Option<String>,

    /// Company logo data URI
    #[arg(long)]
    pub logo: Option<String>,

    /// LinkedIn profile URL
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Instagram profile URL
    #[arg(long)]
    pub instagram: Option<String>,

    /// WhatsApp phone number (digits only)
    #[arg(long)]
    pub whatsapp: Option<String>,

    /// Street address
    #[arg(long)]
    pub street: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// State or province
    #[arg(long)]
    pub state: Option<String>,

    /// Postal code
    #[arg(long)]
    pub zip: Option<String>,

    /// Country
    #[arg(long)]
    pub country: Option<String>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Layout template
    #[arg(long, value_enum)]
    pub template: Option<TemplateArg>,

    /// Accent color as a hex string
    #[arg(long)]
    pub brand_color: Option<String>,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Render as a standalone HTML document
    #[arg(long, conflicts_with = "vcf")]
    pub html: bool,

    /// Render as vCard 3.0 text
    #[arg(long)]
    pub vcf: bool,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Output file (defaults to `<firstName>_<lastName>.vcf`)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Share command arguments.
#[derive(Debug, Args)]
pub struct ShareCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Open command arguments.
#[derive(Debug, Args)]
pub struct OpenCommand {
    /// The shareable link to open
    pub link: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Theme argument for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    /// Light background, dark text
    Light,
    /// Dark background, light text
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

/// Template argument for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    /// The default layout
    Modern,
    /// A traditional layout
    Classic,
    /// A stripped-down layout
    Minimal,
}

impl From<TemplateArg> for Template {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Modern => Self::Modern,
            TemplateArg::Classic => Self::Classic,
            TemplateArg::Minimal => Self::Minimal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_arg_conversion() {
        assert_eq!(Theme::from(ThemeArg::Light), Theme::Light);
        assert_eq!(Theme::from(ThemeArg::Dark), Theme::Dark);
    }

    #[test]
    fn test_template_arg_conversion() {
        assert_eq!(Template::from(TemplateArg::Modern), Template::Modern);
        assert_eq!(Template::from(TemplateArg::Classic), Template::Classic);
        assert_eq!(Template::from(TemplateArg::Minimal), Template::Minimal);
    }

    #[test]
    fn test_set_args_default_is_all_none() {
        let args = SetArgs::default();
        assert!(args.first_name.is_none());
        assert!(args.theme.is_none());
        assert!(args.brand_color.is_none());
    }

    #[test]
    fn test_edit_command_debug() {
        let cmd = EditCommand::Clear { yes: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Clear"));
    }

    #[test]
    fn test_show_command_debug() {
        let cmd = ShowCommand {
            html: false,
            vcf: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("vcf"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
