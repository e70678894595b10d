//! CLI module for the User Gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// User Gateway - HTTP CRUD service for user records
#[derive(Parser)]
#[command(name = "user-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
