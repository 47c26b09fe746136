use clap::{Parser, Subcommand, ValueEnum};
use getflix::store::StorageFormat;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for StorageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => StorageFormat::Json,
            FormatArg::Csv => StorageFormat::Csv,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "getflix", bin_name = "getflix", version)]
#[command(about = "Keep track of the movies you have watched", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json and the catalog
    #[arg(long, global = true, env = "GETFLIX_HOME", value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Catalog file; relative paths are resolved against the data dir
    #[arg(short, long, global = true, value_name = "FILE", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Catalog format, inferred from the file extension when omitted
    #[arg(long, global = true, value_enum, help_heading = "Options")]
    pub format: Option<FormatArg>,

    /// OMDb API key used to look up new movies
    #[arg(
        long,
        global = true,
        env = "GETFLIX_OMDB_API_KEY",
        hide_env_values = true,
        help_heading = "Options"
    )]
    pub api_key: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (default)
    Menu,

    /// List all movies
    #[command(alias = "ls")]
    List,

    /// Average, median, best and worst ratings
    Stats,

    /// Movies whose title contains the term, case-insensitively
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Movies ordered by rating, best first
    Sort,

    /// Pick a movie for tonight
    Random,

    /// Generate the static website
    Site {
        /// Output file, overriding the configured one
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
