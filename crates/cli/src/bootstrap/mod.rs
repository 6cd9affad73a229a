pub mod config;
pub mod hosts;
pub mod logging;

pub use config::load_config;
pub use hosts::split_hosts;
pub use logging::init_logging;
