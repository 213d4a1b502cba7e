pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{
    http::HttpBackend,
    page::{Document, TerminalPage},
};
pub use config::{toml_config::TomlConfig, Overrides, Settings};
pub use crate::core::controller::{Controller, Outcome};
pub use domain::event::Event;
pub use domain::model::{Article, Credentials, PreferenceCatalog, PreferenceSelection, Region};
pub use utils::error::{ClientError, Result};
