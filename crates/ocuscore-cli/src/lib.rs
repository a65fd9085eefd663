//! ocuscore command-line front end.
//!
//! Argument parsing, config loading and the subcommand implementations live
//! here so integration tests can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
