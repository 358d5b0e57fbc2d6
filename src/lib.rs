//! Front-desk booking system for a small hotel.
//!
//! This crate tracks a fixed set of rooms, books and frees them for a
//! single operator, and saves booking state to a flat text file.

pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod persistence;
pub mod registry;
pub mod report;
pub mod room;

pub use auth::{Authenticator, StaticCredentials};
pub use config::{Args, Config};
pub use console::Console;
pub use error::{HotelError, PersistenceError};
pub use menu::MenuChoice;
pub use persistence::LoadReport;
pub use registry::{Booking, Hotel};
pub use report::RoomReport;
pub use room::{Guest, Room, RoomCategory};
