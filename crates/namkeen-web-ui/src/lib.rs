mod error;
pub mod guard;
mod layout;
mod routes;
mod sellers;
mod serde_util;
pub mod session;

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr as _;
use std::sync::Arc;
use std::time::Duration;
use std::{io, result};

use axum::http::header::{ACCEPT, CONTENT_TYPE, InvalidHeaderValue};
use axum::http::{HeaderValue, Method};
use sellers::{SellerDirectory, SellerDirectoryError};
use session::{MemorySessionStore, SessionStore};
use snafu::{ResultExt as _, Snafu};
use tokio::net::{TcpListener, TcpSocket};
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::info;

pub const LOG_TARGET: &str = "namkeen::web";

#[derive(Clone, Debug)]
pub struct Opts {
    pub listen: String,
    pub cors_origin: Option<String>,
    pub sellers_file: Option<PathBuf>,
    pub reuseport: bool,
}

impl Opts {
    pub fn new(
        listen: String,
        cors_origin: Option<String>,
        sellers_file: Option<PathBuf>,
        reuseport: bool,
    ) -> Self {
        Self {
            listen,
            cors_origin,
            sellers_file,
            reuseport,
        }
    }
}

pub struct UiState {
    sellers: SellerDirectory,
    sessions: MemorySessionStore,
}

impl UiState {
    pub fn sellers(&self) -> &SellerDirectory {
        &self.sellers
    }

    /// The one session store shared by the page guard and the API
    /// extractor; nothing else re-implements the validity check.
    pub fn sessions(&self) -> &dyn SessionStore {
        &self.sessions
    }
}

pub type SharedState = Arc<UiState>;

pub struct Server {
    listener: TcpListener,

    state: SharedState,
    opts: Opts,
}

#[derive(Debug, Snafu)]
pub enum WebServerError {
    #[snafu(transparent)]
    Io {
        source: io::Error,
    },

    Sellers {
        source: SellerDirectoryError,
    },

    ListenAddr {
        source: AddrParseError,
    },

    #[snafu(display("cors_origin does not parse as an http value: {source}"))]
    Cors {
        source: InvalidHeaderValue,
    },
}

pub type ServerResult<T> = result::Result<T, WebServerError>;

impl Server {
    pub async fn init(opts: Opts) -> ServerResult<Server> {
        let listener = Self::get_listener(&opts).await?;

        let sellers = if let Some(sellers_file) = opts.sellers_file.clone() {
            SellerDirectory::load(&sellers_file)
                .await
                .context(SellersSnafu)?
        } else {
            SellerDirectory::default()
        };

        let state = Arc::new(UiState {
            sellers,
            sessions: MemorySessionStore::default(),
        });

        info!(target: LOG_TARGET, "Listening on {}", listener.local_addr()?);
        Ok(Self {
            listener,
            state,
            opts,
        })
    }

    pub async fn get_listener(opts: &Opts) -> ServerResult<TcpListener> {
        let socket = {
            let addr = SocketAddr::from_str(&opts.listen).context(ListenAddrSnafu)?;

            let socket = if addr.is_ipv4() {
                TcpSocket::new_v4()?
            } else {
                TcpSocket::new_v6()?
            };
            if opts.reuseport {
                #[cfg(unix)]
                socket.set_reuseport(true)?;
            }
            socket.set_nodelay(true)?;

            socket.bind(addr)?;

            socket
        };

        Ok(socket.listen(1024)?)
    }

    pub async fn run(self) -> ServerResult<()> {
        let router = routes::route_handler(self.state.clone());

        info!(target: LOG_TARGET, "Starting server");
        let listen = self.addr()?;
        axum::serve(
            self.listener,
            router
                .layer(cors_layer(&self.opts, listen)?)
                .into_make_service(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        Ok(())
    }

    pub fn addr(&self) -> ServerResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
}

fn cors_layer(opts: &Opts, listen: SocketAddr) -> ServerResult<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_credentials(true)
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .max_age(Duration::from_secs(86400))
        .allow_origin(opts.cors_origin(listen).context(CorsSnafu)?)
        .allow_methods([Method::GET, Method::POST]))
}

impl Opts {
    pub fn cors_origin(&self, listen: SocketAddr) -> Result<HeaderValue, InvalidHeaderValue> {
        self.cors_origin
            .clone()
            .unwrap_or_else(|| format!("http://{}", listen))
            .parse()
    }
}


async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
