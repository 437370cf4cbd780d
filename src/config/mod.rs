mod errors;
mod generator_config;

pub use errors::ConfigError;
pub use generator_config::{GeneratorConfig, MAX_WINDOW_DAYS};
