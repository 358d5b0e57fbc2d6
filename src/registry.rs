use std::fmt;

use tracing::{debug, info};

use crate::{
    error::HotelError,
    room::{Guest, Room, RoomCategory},
};

/// How many rooms of each category the hotel has, and the first number of each block
const LAYOUT: [(RoomCategory, u32, u32); 3] = [
    (RoomCategory::Standard, 101, 5),
    (RoomCategory::Deluxe, 201, 3),
    (RoomCategory::Suite, 301, 2),
];

/// Outcome of a successful booking
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Room that was booked
    pub room_number: u32,
    /// Length of the stay
    pub nights: u32,
    /// Total charge for the stay
    pub bill: f64,
}

/// The fixed set of rooms for one run of the desk
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    /// All rooms, in creation order
    rooms: Vec<Room>,
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

impl Hotel {
    /// Build the hotel with its standard layout: 101-105 Standard,
    /// 201-203 Deluxe, 301-302 Suite, all free
    #[must_use]
    pub fn new() -> Self {
        let rooms = LAYOUT
            .iter()
            .flat_map(|&(category, first, count)| {
                (first..first.saturating_add(count))
                    .map(move |number| Room::new(number, category))
            })
            .collect();
        Self { rooms }
    }

    /// Find a room by number
    #[must_use]
    pub fn find_room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    /// Find a room by number for mutation
    pub fn find_room_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number() == number)
    }

    /// All rooms, in creation order
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms without a guest, in creation order
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| !room.is_booked())
    }

    /// Book a free room for `nights` nights and return the bill
    ///
    /// # Errors
    ///
    /// Returns `HotelError::RoomNotFound` if no room has that number and
    /// `HotelError::AlreadyBooked` if the room has a guest. The room is left
    /// untouched in both cases.
    pub fn book(&mut self, number: u32, nights: u32, guest: Guest) -> Result<Booking, HotelError> {
        let room = self
            .find_room_mut(number)
            .ok_or_else(|| HotelError::RoomNotFound(i64::from(number)))?;
        if room.is_booked() {
            debug!(room = number, "Booking rejected, room already booked");
            return Err(HotelError::AlreadyBooked(number));
        }

        info!(room = number, nights, guest = guest.name(), "Room booked");
        room.book(guest);
        let bill = room.calculate_bill(nights);

        Ok(Booking {
            room_number: number,
            nights,
            bill,
        })
    }

    /// Release a booked room
    ///
    /// # Errors
    ///
    /// Returns `HotelError::RoomNotFound` if no room has that number and
    /// `HotelError::AlreadyFree` if the room has no guest.
    pub fn free(&mut self, number: u32) -> Result<(), HotelError> {
        let room = self
            .find_room_mut(number)
            .ok_or_else(|| HotelError::RoomNotFound(i64::from(number)))?;
        if !room.is_booked() {
            debug!(room = number, "Free rejected, room already free");
            return Err(HotelError::AlreadyFree(number));
        }

        room.free();
        info!(room = number, "Room freed");
        Ok(())
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let booked = self.rooms.iter().filter(|room| room.is_booked()).count();
        write!(f, "{booked} of {} rooms booked", self.rooms.len())
    }
}
