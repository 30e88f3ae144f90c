//! Command line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;

/// Bookshelf - Personal Library Manager
///
/// Keeps track of the books you own and the ones you have read.
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal library manager with a console menu and a web form interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Library JSON file (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Subcommand to execute (defaults to the console menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive numbered menu on the terminal
    Console,

    /// Web form interface and JSON API
    Serve {
        /// Address to bind (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(file) = &self.file {
            config.library.path = file.clone();
        }
        if let Some(Commands::Serve { host, port }) = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}
