use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CLI {
    #[command(subcommand)]
    pub(crate) command: SteampatchCommand,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum SteampatchCommand {
    /// Lists the executables found directly inside a game folder
    Scan {
        /// The game folder to look in
        dir: PathBuf,
    },
    /// Searches the Steam catalog for entries matching an executable name.
    /// The `.exe` suffix is optional
    Search {
        name: String,
    },
    /// Downloads the patch bundle into a game folder, merges it in and
    /// writes the `ColdClientLoader.ini` for the chosen app id
    Install {
        /// The game folder to patch
        dir: PathBuf,
        /// File name of the game executable inside the folder
        exe: String,
        /// App id to bind the executable to. Must be one of the entries
        /// `search` lists for the executable
        #[clap(long)]
        app_id: u32,
    },
}
