use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for flagphone
#[derive(Debug, Parser)]
#[command(
    name = "flagphone",
    version,
    about = "Browse, search and pick countries with their flags and dial codes"
)]
pub struct CliArgs {
    /// Path to a dataset file (.json, or .json.gz). Defaults to the bundled dataset.
    #[arg(short = 'i', long = "input", global = true, env = "FLAGPHONE_DATASET")]
    pub input: Option<String>,

    /// Do not show dial codes next to country names
    #[arg(
        long = "hide-phone-code",
        global = true,
        env = "FLAGPHONE_HIDE_PHONE_CODE"
    )]
    pub hide_phone_code: bool,

    /// Ignore accents when matching queries (e.g. "reunion" finds Réunion)
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides it.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every country, grouped by initial
    List,

    /// Print the section index titles
    Sections,

    /// Search by name, region code or dial code and print the grouped hits
    Search {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// Select the country at a section/row position and print it
    Pick {
        /// Narrow the list with this query before picking
        #[arg(short = 'q', long = "query")]
        query: Option<String>,

        /// Section index (0-based)
        section: usize,

        /// Row index within the section (0-based)
        row: usize,
    },

    /// Lookup a country by region code
    Country {
        /// ISO2 code (e.g. DE, fr)
        code: String,
    },

    /// List countries whose dial code starts with a prefix
    Phone {
        /// Dial code prefix (e.g. +1, 44)
        prefix: String,
    },
}
