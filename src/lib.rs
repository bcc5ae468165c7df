//! Hostedit - edit hosts files from the command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod ip;
