pub mod config;
pub mod ports;
pub mod time_format;
