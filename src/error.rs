use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotelError {
    /// No room carries the requested number. Signed, so that numbers typed
    /// at the desk that no room could ever have are reported the same way.
    #[error("Room not found!")]
    RoomNotFound(i64),
    /// The room already has a guest
    #[error("Room is already booked.")]
    AlreadyBooked(u32),
    /// The room has no guest to release
    #[error("Room is already free.")]
    AlreadyFree(u32),
    /// A guest name or phone cannot be stored as a single data-file token
    #[error("Invalid guest {field}: {reason}")]
    InvalidGuestField {
        /// Which field was rejected ("name" or "phone")
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

/// Errors raised while saving or loading booking state
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The data file could not be opened for reading
    #[error("No saved data found.")]
    Unavailable {
        /// Path that was tried
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },
    /// Any other I/O failure while reading or writing the data file
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },
}
