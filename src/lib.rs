pub mod clickup;
pub mod config;
pub mod mcp;

#[cfg(test)]
mod config_test;
