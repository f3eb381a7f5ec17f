use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Opts {
    #[command(subcommand)]
    pub cmd: OptsCmd,
}

#[derive(Debug, Subcommand)]
pub enum OptsCmd {
    /// Run the storefront web server.
    Serve(ServeOpts),

    /// Hash a seller password for the sellers file.
    HashPassword { password: String },
}

#[derive(Debug, Args)]
pub struct ServeOpts {
    #[arg(long, default_value = "127.0.0.1:3000", env = "NAMKEEN_LISTEN")]
    pub listen: String,

    #[arg(long)]
    pub cors_origin: Option<String>,

    /// JSON file with seller emails and argon2 password hashes.
    #[arg(long, env = "NAMKEEN_SELLERS_FILE")]
    pub sellers_file: Option<PathBuf>,

    #[arg(long)]
    pub reuseport: bool,
}
