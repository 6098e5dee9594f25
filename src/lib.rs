//! # Steampatch Core Library
//!
//! This crate contains the core logic of the `steampatch` tool: it identifies
//! a game's executable against the Steam app catalog and installs the
//! `steam-game-patcher` bundle into the game folder, ending with a generated
//! `ColdClientLoader.ini` that binds the executable to the chosen app id.
//!
//! The library is built for the `steampatch` CLI, but the pieces are plain
//! functions over plain values and can be reused as a backend in other tools.
//!
//! ## Modules Overview
//! - [`catalog`] – Fetching and decoding the remote app catalog
//! - [`resolve`] – Matching an executable name against a catalog snapshot
//! - [`installer`] – The download, extract, merge and configure pipeline
//! - [`config`] – Rendering and writing the loader configuration file
//! - [`net`] – Blocking HTTP plumbing shared by catalog and bundle fetches
//! - [`util`] – Shared helpers (game folder scanning)

pub mod catalog;
pub mod config;
pub mod installer;
pub mod net;
pub mod resolve;
pub mod util;

pub use catalog::*;
pub use config::*;
pub use installer::*;
pub use net::*;
pub use resolve::*;
pub use util::*;
