// Configuration for restyle: target file and the ordered rule list

#[allow(clippy::module_inception)]
pub mod config;
pub mod config_loader;

pub use config::FixupConfig;
pub use config_loader::{ConfigFormat, ConfigLoader};
