pub mod config;
pub mod modules;
pub mod server;

#[cfg(test)]
mod test_utils;
