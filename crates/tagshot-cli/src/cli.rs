use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagshot")]
#[command(author, version)]
#[command(about = "Render chat-flavoured markdown tags as message transcripts and images")]
#[command(after_help = "\
EXAMPLES:

    # Inspect how a tag is segmented
    echo '**hello** <@123456789012345678>' | tagshot parse

    # Print the HTML page for a tag
    tagshot render tag.md --author TagBot

    # Capture an image through the configured snapshot command
    tagshot snapshot tag.md -o tag.png

CONFIGURATION:

tagshot reads ~/.config/tagshot/config.toml unless --config is given.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse tag content and print the node sequence as JSON
    Parse {
        /// Input file (stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Print the plain-text reconstruction instead of JSON
        #[arg(long)]
        plain: bool,
    },

    /// Render tag content to an HTML page
    Render {
        /// Input file (stdin if omitted or "-")
        file: Option<PathBuf>,

        #[command(flatten)]
        author: AuthorArgs,
    },

    /// Render tag content and capture it as an image
    Snapshot {
        /// Input file (stdin if omitted or "-")
        file: Option<PathBuf>,

        /// Where to write the image
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        author: AuthorArgs,

        /// Snapshot timeout in seconds (overrides config)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
}

#[derive(clap::Args)]
pub struct AuthorArgs {
    /// Display name of the message author (overrides config)
    #[arg(long)]
    pub author: Option<String>,

    /// Avatar URL of the message author (overrides config)
    #[arg(long)]
    pub avatar: Option<String>,
}
