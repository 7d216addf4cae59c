use clap::{Parser, Subcommand, ValueEnum};
use memex::model::Section;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memex")]
#[command(about = "Scaffold and maintain front matter for a Markdown docs repository", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Repository root (defaults to MEMEX_ROOT, then the nearest dir with .memex.yml)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// IANA time zone for timestamps (overrides MEMEX_TZ and settings)
    #[arg(long, global = true, value_name = "ZONE")]
    pub tz: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write default .memex.yml and docs/_data/taxonomy.yml
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Create a new dated post under docs/<folder>/
    #[command(alias = "n")]
    New {
        /// Filename slug, e.g. git-privacy (a date prefix and .md are stripped)
        slug: String,

        /// Pick folder, categories and tags from numbered menus
        #[arg(short, long)]
        interactive: bool,

        /// Target folder under docs/
        #[arg(long, value_name = "NAME")]
        folder: Option<String>,

        /// Categories as a JSON array, e.g. '["🤖 tech","🐧 linux"]'
        #[arg(long, value_name = "JSON")]
        cats: Option<String>,

        /// Tags as a JSON array
        #[arg(long, value_name = "JSON")]
        tags: Option<String>,

        /// Overwrite the target if it exists
        #[arg(long)]
        force: bool,

        /// Skip the backup copy when overwriting
        #[arg(long)]
        no_backup: bool,
    },

    /// Front matter maintenance
    Yfm {
        #[command(subcommand)]
        action: YfmCommands,
    },

    /// Manage the categories/tags taxonomy
    Taxa {
        #[command(subcommand)]
        action: TaxaCommands,
    },

    /// Replace typographic punctuation with ASCII
    Clean {
        #[arg(required = true, num_args = 1..)]
        files: Vec<String>,

        /// Rewrite files instead of printing
        #[arg(short, long)]
        write: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum YfmCommands {
    /// Re-render front matter and set last_update to now
    Touch {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Re-render front matter without changing timestamps
    Fmt {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaxaCommands {
    /// Print one section
    #[command(alias = "ls")]
    List { section: SectionArg },

    /// Add values to a section
    Add {
        section: SectionArg,
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },

    /// Remove values from a section
    Rm {
        section: SectionArg,
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionArg {
    #[value(alias = "categories")]
    Cats,
    Tags,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Cats => Section::Categories,
            SectionArg::Tags => Section::Tags,
        }
    }
}
