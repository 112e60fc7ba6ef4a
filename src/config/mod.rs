//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::TandemPaths;
pub use settings::Settings;
