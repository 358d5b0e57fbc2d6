use std::fmt;

use crate::error::HotelError;

/// Token written in place of guest fields for a free room
pub const EMPTY_FIELD: &str = "-";

/// The closed set of room categories offered by the hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomCategory {
    /// Basic room at the base rate
    Standard,
    /// Larger room, 5% off the nightly total
    Deluxe,
    /// Top category, 10% off the nightly total
    Suite,
}

/// Pricing data attached to a category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRules {
    /// Display label
    pub label: &'static str,
    /// Nightly rate in rupees
    pub rate: f64,
    /// Multiplier applied to `rate * nights`
    pub discount: f64,
}

impl RoomCategory {
    /// Every category, in the order rooms are seeded
    pub const ALL: [Self; 3] = [Self::Standard, Self::Deluxe, Self::Suite];

    /// Look up the pricing rules for this category
    #[must_use]
    pub const fn rules(self) -> CategoryRules {
        match self {
            Self::Standard => CategoryRules {
                label: "Standard",
                rate: 1500.0,
                discount: 1.0,
            },
            Self::Deluxe => CategoryRules {
                label: "Deluxe",
                rate: 3000.0,
                discount: 0.95,
            },
            Self::Suite => CategoryRules {
                label: "Suite",
                rate: 5000.0,
                discount: 0.90,
            },
        }
    }

    /// Human-readable category name
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.rules().label
    }

    /// Nightly rate for this category
    #[must_use]
    pub const fn rate(self) -> f64 {
        self.rules().rate
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact details of the guest occupying a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    /// Guest name, a single whitespace-free token
    name: String,
    /// Guest phone, a single whitespace-free token
    phone: String,
}

impl Guest {
    /// Create a guest after checking that both fields fit the data file format
    ///
    /// # Errors
    ///
    /// Returns `HotelError::InvalidGuestField` if a field is empty, contains
    /// whitespace, or equals the free-room placeholder `-`.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Result<Self, HotelError> {
        let name = name.into();
        let phone = phone.into();
        check_token("name", &name)?;
        check_token("phone", &phone)?;
        Ok(Self { name, phone })
    }

    /// Guest name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Guest phone
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Validate a single guest field
fn check_token(field: &'static str, value: &str) -> Result<(), HotelError> {
    let reason = if value.is_empty() {
        "must not be empty"
    } else if value.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else if value == EMPTY_FIELD {
        "\"-\" is reserved"
    } else {
        return Ok(());
    };
    Err(HotelError::InvalidGuestField { field, reason })
}

/// A single bookable room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Room number, unique within the hotel
    number: u32,
    /// Fixed category
    category: RoomCategory,
    /// Current occupant, `None` while the room is free
    guest: Option<Guest>,
}

impl Room {
    /// Create a free room
    #[must_use]
    pub const fn new(number: u32, category: RoomCategory) -> Self {
        Self {
            number,
            category,
            guest: None,
        }
    }

    /// Room number
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Room category
    #[must_use]
    pub const fn category(&self) -> RoomCategory {
        self.category
    }

    /// Nightly rate, derived from the category
    #[must_use]
    pub const fn price_per_night(&self) -> f64 {
        self.category.rate()
    }

    /// Whether a guest currently occupies the room
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.guest.is_some()
    }

    /// Current guest, if any
    #[must_use]
    pub const fn guest(&self) -> Option<&Guest> {
        self.guest.as_ref()
    }

    /// Guest name, empty while free
    #[must_use]
    pub fn guest_name(&self) -> &str {
        self.guest.as_ref().map_or("", Guest::name)
    }

    /// Guest phone, empty while free
    #[must_use]
    pub fn guest_phone(&self) -> &str {
        self.guest.as_ref().map_or("", Guest::phone)
    }

    /// Put a guest in the room. Callers check `is_booked` first.
    pub fn book(&mut self, guest: Guest) {
        self.guest = Some(guest);
    }

    /// Release the room
    pub fn free(&mut self) {
        self.guest = None;
    }

    /// Total charge for a stay of `nights` nights
    #[must_use]
    pub fn calculate_bill(&self, nights: u32) -> f64 {
        let rules = self.category.rules();
        rules.rate * f64::from(nights) * rules.discount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compare two bills to floating-point tolerance
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_category_rules() {
        assert_eq!(RoomCategory::Standard.label(), "Standard");
        assert_close(RoomCategory::Deluxe.rate(), 3000.0);
        assert_close(RoomCategory::Suite.rules().discount, 0.90);
        assert_eq!(RoomCategory::Suite.to_string(), "Suite");
    }

    #[test]
    fn test_bills_per_category() {
        let standard = Room::new(101, RoomCategory::Standard);
        let deluxe = Room::new(201, RoomCategory::Deluxe);
        let suite = Room::new(301, RoomCategory::Suite);

        assert_close(standard.calculate_bill(3), 4500.0);
        assert_close(deluxe.calculate_bill(2), 5700.0);
        assert_close(suite.calculate_bill(1), 4500.0);
    }

    #[test]
    fn test_zero_nights_is_free_of_charge() {
        for category in RoomCategory::ALL {
            assert_close(Room::new(1, category).calculate_bill(0), 0.0);
        }
    }

    #[test]
    fn test_standard_bill_is_linear() {
        let room = Room::new(102, RoomCategory::Standard);
        for nights in 0..30 {
            assert_close(room.calculate_bill(nights), 1500.0 * f64::from(nights));
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_book_then_free_clears_guest() {
        let mut room = Room::new(203, RoomCategory::Deluxe);
        room.book(Guest::new("Asha", "555").unwrap());
        assert!(room.is_booked());
        assert_eq!(room.guest_name(), "Asha");
        assert_eq!(room.guest_phone(), "555");

        room.free();
        assert!(!room.is_booked());
        assert_eq!(room.guest_name(), "");
        assert_eq!(room.guest_phone(), "");
    }

    #[test]
    fn test_guest_fields_must_be_tokens() {
        assert!(matches!(
            Guest::new("", "555"),
            Err(HotelError::InvalidGuestField { field: "name", .. })
        ));
        assert!(matches!(
            Guest::new("Asha Rao", "555"),
            Err(HotelError::InvalidGuestField { field: "name", .. })
        ));
        assert!(matches!(
            Guest::new("Asha", "-"),
            Err(HotelError::InvalidGuestField { field: "phone", .. })
        ));
        assert!(Guest::new("Asha", "+91-555").is_ok());
    }
}
