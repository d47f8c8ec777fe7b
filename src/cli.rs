use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gselect - browse and pick GIS elements grouped by mapset
#[derive(Parser, Debug)]
#[command(name = "gselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read the catalog from a TOML fixture instead of the GIS tools
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to ~/.config/gselect/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the mapset/element tree for an element type
    Tree {
        /// Element type (e.g. raster, vector, region, "imagery group")
        element_type: String,

        /// Mapsets to list, in order (defaults to the search path)
        #[arg(short, long = "mapset", value_name = "MAPSET")]
        mapsets: Vec<String>,

        /// Use ASCII icons
        #[arg(long)]
        ascii: bool,
    },

    /// Resolve a selection and print it as comma-joined text
    Pick {
        /// Element type (e.g. raster, vector, region, "imagery group")
        element_type: String,

        /// Mapsets to list, in order (defaults to the search path)
        #[arg(short, long = "mapset", value_name = "MAPSET")]
        mapsets: Vec<String>,

        /// Element to select by display text (`name@mapset`); repeatable.
        /// Prompts interactively when omitted on a terminal.
        #[arg(short, long = "select", value_name = "TEXT")]
        select: Vec<String>,

        /// Allow more than one selected element
        #[arg(long)]
        multiple: bool,

        /// Fail when a --select text matches nothing
        #[arg(long)]
        strict: bool,
    },

    /// List the element types and their aliases
    Types,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn pick_collects_repeated_selects() {
        let cli = Cli::try_parse_from([
            "gselect",
            "pick",
            "raster",
            "-s",
            "a@m",
            "--select",
            "b@m",
            "--multiple",
        ])
        .unwrap();

        match cli.command {
            Commands::Pick {
                element_type,
                select,
                multiple,
                ..
            } => {
                assert_eq!(element_type, "raster");
                assert_eq!(select, vec!["a@m", "b@m"]);
                assert!(multiple);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["gselect", "tree", "vect", "-m", "PERMANENT", "--json", "-vv"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
