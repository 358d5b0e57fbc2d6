use std::{fmt, str::FromStr};

/// Entries of the main menu, numbered as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// List rooms without a guest
    ShowAvailable,
    /// Book a room
    Book,
    /// Free a room
    Free,
    /// List every room
    ShowAll,
    /// Write booking state to the data file
    Save,
    /// Read booking state from the data file
    Load,
    /// Leave the desk
    Exit,
}

impl MenuChoice {
    /// Every entry, in menu order
    pub const ALL: [Self; 7] = [
        Self::ShowAvailable,
        Self::Book,
        Self::Free,
        Self::ShowAll,
        Self::Save,
        Self::Load,
        Self::Exit,
    ];

    /// Number the operator types to pick this entry
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::ShowAvailable => 1,
            Self::Book => 2,
            Self::Free => 3,
            Self::ShowAll => 4,
            Self::Save => 5,
            Self::Load => 6,
            Self::Exit => 7,
        }
    }

    /// Text shown next to the number
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ShowAvailable => "Show Available Rooms",
            Self::Book => "Book a Room",
            Self::Free => "Free a Room",
            Self::ShowAll => "Show All Rooms",
            Self::Save => "Save Data to File",
            Self::Load => "Load Data from File",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Input that does not name a menu entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid choice.")]
pub struct InvalidChoice;

impl TryFrom<u32> for MenuChoice {
    type Error = InvalidChoice;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(InvalidChoice)
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| InvalidChoice)
            .and_then(Self::try_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::try_from(choice.number()), Ok(choice));
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::Book));
        assert_eq!("7".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!("0".parse::<MenuChoice>(), Err(InvalidChoice));
        assert_eq!("8".parse::<MenuChoice>(), Err(InvalidChoice));
        assert_eq!("book".parse::<MenuChoice>(), Err(InvalidChoice));
        assert_eq!("".parse::<MenuChoice>(), Err(InvalidChoice));
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuChoice::Load.to_string(), "6. Load Data from File");
    }
}
