use std::path::PathBuf;

use clap::{Parser, Subcommand};
use waypoint_core::config::{DEFAULT_API_BASE_URL, DEFAULT_WEB_BASE_URL};

use crate::cli::{ActivityCommands, GuestCommands, LinkCommands, ServeArgs, TripCommands};

/// Plan trips with friends from the command line
///
/// Waypoint keeps trips, their guests, scheduled activities and important
/// links in a local SQLite database. The same data can be served over a REST
/// API with `waypoint serve`.
#[derive(Parser)]
#[command(version, about, name = "waypoint")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true, env = "WAYPOINT_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Public address of the API, used in emailed confirmation links
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Public address of the web front end, used for post-confirmation
    /// redirects
    #[arg(long, global = true, env = "WEB_BASE_URL", default_value = DEFAULT_WEB_BASE_URL)]
    pub web_base_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage the guests of a trip
    #[command(alias = "g")]
    Guest {
        #[command(subcommand)]
        command: GuestCommands,
    },
    /// Manage the activities of a trip
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Manage the important links of a trip
    #[command(alias = "l")]
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },
    /// Start the REST API server
    Serve(ServeArgs),
}
