use serde::Serialize;

use crate::{
    registry::Hotel,
    room::{Guest, Room},
};

/// Placeholder shown in guest columns for a free room
const NO_GUEST: &str = "-";

/// Serializable view of one room
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomView<'a> {
    /// Room number
    pub number: u32,
    /// Category label
    pub category: &'static str,
    /// Nightly rate
    pub price_per_night: f64,
    /// Whether the room has a guest
    pub booked: bool,
    /// Guest name, absent while free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<&'a str>,
    /// Guest phone, absent while free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<&'a str>,
}

impl<'a> From<&'a Room> for RoomView<'a> {
    fn from(room: &'a Room) -> Self {
        Self {
            number: room.number(),
            category: room.category().label(),
            price_per_night: room.price_per_night(),
            booked: room.is_booked(),
            guest_name: room.guest().map(Guest::name),
            guest_phone: room.guest().map(Guest::phone),
        }
    }
}

/// Text and JSON renderings of the hotel
#[derive(Debug)]
pub struct RoomReport;

impl RoomReport {
    /// Table of every room with its status and guest
    #[must_use]
    pub fn all_rooms_table(hotel: &Hotel) -> String {
        let mut table = String::from("\nAll Rooms in Hotel:\n");
        table.push_str(&format!(
            "{:<12}{:<12}{:<12}{:<12}{:<20}{:<15}\n",
            "Room No", "Type", "Price/day", "Status", "Customer Name", "Phone"
        ));
        table.push_str(&"-".repeat(80));
        table.push('\n');

        for room in hotel.rooms() {
            let free = ("Free", NO_GUEST, NO_GUEST);
            let (status, name, phone) = room
                .guest()
                .map_or(free, |guest| ("Booked", guest.name(), guest.phone()));
            table.push_str(&format!(
                "{:<12}{:<12}{:<12}{:<12}{:<20}{:<15}\n",
                room.number(),
                room.category().label(),
                room.price_per_night(),
                status,
                name,
                phone
            ));
        }

        table
    }

    /// Table of rooms without a guest
    #[must_use]
    pub fn available_rooms_table(hotel: &Hotel) -> String {
        let mut table = String::from("\nAvailable Rooms:\n");
        table.push_str(&format!(
            "{:<12}{:<12}{:<12}\n",
            "Room No", "Type", "Price/day"
        ));
        table.push_str(&"-".repeat(36));
        table.push('\n');

        let mut any = false;
        for room in hotel.available_rooms() {
            any = true;
            table.push_str(&format!(
                "{:<12}{:<12}{:<12}\n",
                room.number(),
                room.category().label(),
                room.price_per_night()
            ));
        }
        if !any {
            table.push_str("No rooms available.\n");
        }

        table
    }

    /// Serializable view of every room, in creation order
    #[must_use]
    pub fn snapshot(hotel: &Hotel) -> Vec<RoomView<'_>> {
        hotel.rooms().iter().map(RoomView::from).collect()
    }

    /// Pretty-printed JSON of the snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn snapshot_json(hotel: &Hotel) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::snapshot(hotel))
    }
}
