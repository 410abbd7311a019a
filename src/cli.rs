use clap_verbosity_flag::{InfoLevel, Verbosity};
use clap::{Parser, Subcommand};

/// Group "now playing" status utility for Last.fm.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The path to the configuration file to load.
    #[arg(short, long = "config", value_name = "PATH", global = true)]
    pub config_file_path: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Poll every tracked user on an interval and emit the freshest track.
    Start,
    /// Run a single resolution cycle and exit.
    Once,
    /// Configure the application.
    #[clap(visible_alias("config"))]
    Configure {
        #[command(subcommand)]
        action: ConfigurationAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigurationAction {
    /// Print the location of the configuration file that would be used in the
    /// current context.
    #[clap(visible_alias("which"))]
    Where {
        /// Escape special characters (such as spaces) in the path.
        #[arg(short, long, default_value = "false")]
        escape: bool,
    },
}
