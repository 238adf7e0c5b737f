//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Decorate rendered blog pages with credit labels and permalinks
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: decor.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Rendered site directory (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decorate pages in place
    #[command(visible_alias = "r")]
    Run {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Report what would be decorated, without writing
    #[command(visible_alias = "s")]
    Scan {
        #[command(flatten)]
        args: ScanArgs,
    },
}

/// Page selection and decorator toggles shared by Run and Scan
#[derive(clap::Args, Debug, Clone)]
pub struct DecorateArgs {
    /// Files or directories to process. If omitted, processes the whole output directory.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Prefix image credits with a label
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub credit: Option<bool>,

    /// Wrap heading content in a permalink
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub heading: Option<bool>,

    /// Insert gutter anchor icons
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub anchor: Option<bool>,

    /// Override site URL.
    ///
    /// The path component becomes the base path of the anchor icon, e.g.
    /// `https://example.github.io/blog` gives `/blog/assets/img/meta/permalink.png`.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Run command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub decorate: DecorateArgs,

    /// Decorate in memory and report counts, but don't write pages
    #[arg(short = 'n', long)]
    pub dry: bool,
}

/// Scan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub decorate: DecorateArgs,

    /// Output per-page reports as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Commands {
    pub const fn decorate_args(&self) -> &DecorateArgs {
        match self {
            Self::Run { args } => &args.decorate,
            Self::Scan { args } => &args.decorate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::parse_from(["decor", "r", "_site/post.html", "--credit=false", "--anchor", "-n"]);
        let Commands::Run { args } = &cli.command else {
            panic!("expected run");
        };
        assert!(args.dry);
        assert_eq!(args.decorate.paths, vec![PathBuf::from("_site/post.html")]);
        assert_eq!(args.decorate.credit, Some(false));
        assert_eq!(args.decorate.anchor, Some(true));
        assert_eq!(args.decorate.heading, None);
    }

    #[test]
    fn test_parse_scan_with_globals() {
        let cli = Cli::parse_from(["decor", "scan", "--json", "-p", "-C", "site/decor.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("site/decor.toml")));
        let Commands::Scan { args } = &cli.command else {
            panic!("expected scan");
        };
        assert!(args.json && args.pretty);
        assert!(cli.command.decorate_args().paths.is_empty());
    }
}
