//! Line-oriented persistence of booking state.
//!
//! Each room is stored as `number price flag name phone`. Free rooms carry
//! `-` in both guest fields so every line splits into exactly five tokens.
//! Room definitions are never stored; loading only overwrites the booking
//! state of rooms that already exist in the hotel.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    error::PersistenceError,
    registry::Hotel,
    room::{EMPTY_FIELD, Guest, Room},
};

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "hotel_data.txt";

/// Counters describing what a load did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines applied to a room
    pub applied: usize,
    /// Lines naming a room number the hotel does not have
    pub unknown_rooms: usize,
    /// Lines that could not be parsed
    pub skipped: usize,
}

/// One parsed line of the data file
#[derive(Debug, Clone, PartialEq)]
struct RoomRecord {
    /// Room number
    number: u32,
    /// Stored nightly price, informational only
    price: f64,
    /// Guest, present when the stored flag is `1`
    guest: Option<Guest>,
}

/// Render one room as a data-file line, without the newline
#[must_use]
pub fn format_line(room: &Room) -> String {
    let free = (0, EMPTY_FIELD, EMPTY_FIELD);
    let (flag, name, phone) = room
        .guest()
        .map_or(free, |guest| (1, guest.name(), guest.phone()));
    format!(
        "{} {} {flag} {name} {phone}",
        room.number(),
        room.price_per_night()
    )
}

/// Render every room, one line each, in the given order
#[must_use]
pub fn encode(rooms: &[Room]) -> String {
    let mut out = String::new();
    for room in rooms {
        out.push_str(&format_line(room));
        out.push('\n');
    }
    out
}

/// Write the booking state of every room to `path`
///
/// # Errors
///
/// Returns `PersistenceError::Io` if the file cannot be created or written.
pub fn save(rooms: &[Room], path: &Path) -> Result<(), PersistenceError> {
    info!(path = %path.display(), rooms = rooms.len(), "Saving booking state");
    fs::write(path, encode(rooms)).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Restore booking state from `path` into `hotel`
///
/// Rooms the file does not mention keep their current state.
///
/// # Errors
///
/// Returns `PersistenceError::Unavailable` if the file does not exist or
/// cannot be opened, and `PersistenceError::Io` if it cannot be read or is
/// not valid UTF-8.
pub fn load(hotel: &mut Hotel, path: &Path) -> Result<LoadReport, PersistenceError> {
    info!(path = %path.display(), "Loading booking state");
    let contents = fs::read_to_string(path)
        .map_err(|source| classify(path.to_path_buf(), source))?;
    Ok(apply(hotel, &contents))
}

/// Map an I/O error from reading the data file onto the error taxonomy
fn classify(path: PathBuf, source: io::Error) -> PersistenceError {
    match source.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            PersistenceError::Unavailable { path, source }
        }
        _ => PersistenceError::Io { path, source },
    }
}

/// Apply the contents of a data file to `hotel`
pub fn apply(hotel: &mut Hotel, contents: &str) -> LoadReport {
    let mut report = LoadReport::default();
    let mut seen: Vec<u32> = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx.saturating_add(1);

        let Some(record) = parse_line(line) else {
            warn!(line = line_no, content = line, "Skipping malformed line");
            report.skipped = report.skipped.saturating_add(1);
            continue;
        };

        let Some(room) = hotel.find_room_mut(record.number) else {
            warn!(
                line = line_no,
                room = record.number,
                "Skipping line for unknown room"
            );
            report.unknown_rooms = report.unknown_rooms.saturating_add(1);
            continue;
        };

        if (record.price - room.price_per_night()).abs() > f64::EPSILON {
            warn!(
                room = record.number,
                stored = record.price,
                current = room.price_per_night(),
                "Stored price differs from current rate, keeping current rate"
            );
        }
        if seen.contains(&record.number) {
            debug!(
                room = record.number,
                line = line_no,
                "Room listed again, later line wins"
            );
        } else {
            seen.push(record.number);
        }

        match record.guest {
            Some(guest) => room.book(guest),
            None => room.free(),
        }
        report.applied = report.applied.saturating_add(1);
    }

    info!(
        applied = report.applied,
        unknown_rooms = report.unknown_rooms,
        skipped = report.skipped,
        "Booking state loaded"
    );
    report
}

/// Parse one non-blank line, or `None` if it is malformed
fn parse_line(line: &str) -> Option<RoomRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (number, price, flag, guest_fields) = match fields.as_slice() {
        [number, price, flag] => (number, price, flag, None),
        [number, price, flag, name, phone] => (number, price, flag, Some((*name, *phone))),
        _ => return None,
    };

    let number = number.parse::<u32>().ok()?;
    let price = price.parse::<f64>().ok().filter(|p| p.is_finite())?;
    let guest = match (*flag, guest_fields) {
        ("0", _) => None,
        ("1", Some((name, phone))) => Some(Guest::new(name, phone).ok()?),
        _ => return None,
    };

    Some(RoomRecord {
        number,
        price,
        guest,
    })
}
