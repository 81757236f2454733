mod app;

pub use app::{AppConfig, ConfigError, SearchSettings};
