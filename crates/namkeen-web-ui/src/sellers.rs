//! Seller directory: who may sign in to the seller area.
//!
//! Loaded once at server init from a JSON file of email and argon2
//! PHC-string pairs. Verification failures are logged with their cause
//! but surfaced to the client as a single fixed message, so responses
//! don't reveal which seller accounts exist.

use std::collections::HashMap;
use std::path::Path;

use argon2::password_hash::PasswordHash;
use argon2::{Argon2, PasswordVerifier as _};
use serde::Deserialize;
use snafu::{ResultExt as _, Snafu};
use tracing::debug;

use crate::LOG_TARGET;

#[derive(Debug, Snafu)]
pub enum SellerDirectoryError {
    #[snafu(display("can't read sellers file: {source}"))]
    Read { source: std::io::Error },
    #[snafu(display("can't parse sellers file: {source}"))]
    Parse { source: serde_json::Error },
}

#[derive(Debug, Deserialize)]
pub struct SellerRecord {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Default)]
pub struct SellerDirectory {
    sellers: HashMap<String, String>,
}

impl SellerDirectory {
    pub async fn load(path: &Path) -> Result<Self, SellerDirectoryError> {
        let raw = tokio::fs::read_to_string(path).await.context(ReadSnafu)?;
        let records: Vec<SellerRecord> = serde_json::from_str(&raw).context(ParseSnafu)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: impl IntoIterator<Item = SellerRecord>) -> Self {
        Self {
            sellers: records
                .into_iter()
                .map(|record| (record.email, record.password_hash))
                .collect(),
        }
    }

    /// Plain pass/fail credential check.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let Some(hash) = self.sellers.get(email) else {
            debug!(target: LOG_TARGET, "Unknown seller email");
            return false;
        };
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(target: LOG_TARGET, %err, "Unparseable password hash in seller directory");
                return false;
            }
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
