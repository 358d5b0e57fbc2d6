//! Runtime configuration for the desk.
//!
//! Values come from command-line flags, falling back to environment
//! variables and then to built-in defaults.

use std::{fmt, path::PathBuf};

use clap::Parser;
use serde::Serialize;

use crate::{auth::StaticCredentials, persistence::DEFAULT_DATA_FILE};

/// Username accepted when none is configured
pub const DEFAULT_ADMIN_USER: &str = "abhinikesh";
/// Password accepted when none is configured
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";
/// Log filter used when none is configured
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line arguments for the hotel desk
#[derive(Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File used by the save and load menu entries
    #[arg(long, env = "HOTEL_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Username accepted at login
    #[arg(long, env = "HOTEL_ADMIN_USER", default_value = DEFAULT_ADMIN_USER)]
    pub admin_user: String,

    /// Password accepted at login
    #[arg(
        long,
        env = "HOTEL_ADMIN_PASSWORD",
        default_value = DEFAULT_ADMIN_PASSWORD,
        hide_env_values = true
    )]
    pub admin_password: String,

    /// Log filter directive, e.g. `info` or `hotel_desk=debug`
    #[arg(long, env = "HOTEL_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,

    /// Print the saved booking state as JSON and exit without logging in
    #[arg(long)]
    pub snapshot: bool,
}

// The password never goes to logs
impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("data_file", &self.data_file)
            .field("admin_user", &self.admin_user)
            .field("admin_password", &"<redacted>")
            .field("log", &self.log)
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Path of the booking data file
    pub data_file: PathBuf,
    /// Administrator login
    pub admin: AdminConfig,
    /// Log filter directive
    pub log_filter: String,
}

/// Administrator credentials
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    /// Accepted username
    pub username: String,
    /// Accepted password
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            admin: AdminConfig {
                username: DEFAULT_ADMIN_USER.to_string(),
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            },
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            data_file: args.data_file.clone(),
            admin: AdminConfig {
                username: args.admin_user.clone(),
                password: args.admin_password.clone(),
            },
            log_filter: args.log.clone(),
        }
    }
}

impl Config {
    /// Build the credential checker for the configured administrator
    #[must_use]
    pub fn authenticator(&self) -> StaticCredentials {
        StaticCredentials::new(self.admin.username.clone(), self.admin.password.clone())
    }
}
