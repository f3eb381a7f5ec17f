mod cli;

use std::io;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher as _};
use clap::Parser;
use cli::{Opts, OptsCmd};
use namkeen_web_ui::{Opts as WebOpts, Server, WebServerError};
use rand_core::OsRng;
use snafu::{FromString, ResultExt, Snafu, Whatever};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const PROJECT_NAME: &str = "namkeen";
pub const LOG_TARGET: &str = "namkeen::cli";

type WhateverResult<T> = std::result::Result<T, snafu::Whatever>;

#[derive(Debug, Snafu)]
pub enum CliError {
    #[snafu(display("Web server error: {source}"))]
    WebServer { source: WebServerError },
    #[snafu(display("Password hashing error: {msg}"))]
    HashPassword { msg: String },
    #[snafu(display("Miscellaneous error: {source}"))]
    Whatever { source: Whatever },
}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[snafu::report]
#[tokio::main]
async fn main() -> CliResult<()> {
    init_logging().context(WhateverSnafu)?;

    let opts = Opts::parse();
    match opts.cmd {
        OptsCmd::Serve(serve) => {
            info!(target: LOG_TARGET, "Starting {PROJECT_NAME} server");
            let server = Server::init(WebOpts::new(
                serve.listen,
                serve.cors_origin,
                serve.sellers_file,
                serve.reuseport,
            ))
            .await
            .context(WebServerSnafu)?;

            server.run().await.context(WebServerSnafu)?;
        }
        OptsCmd::HashPassword { password } => {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|err| {
                    HashPasswordSnafu {
                        msg: err.to_string(),
                    }
                    .build()
                })?;
            println!("{hash}");
        }
    }

    Ok(())
}

pub fn init_logging() -> WhateverResult<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|_| Whatever::without_source("Failed to initialize logging".to_string()))?;

    Ok(())
}
