//! Interactive front desk: login gate and the numbered main menu.
//!
//! The console owns the hotel for the session and talks to the operator
//! through any `BufRead`/`Write` pair, so it can be driven by a script.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use colored::Colorize;
use tracing::{info, warn};

use crate::{
    auth::Authenticator,
    error::{HotelError, PersistenceError},
    menu::MenuChoice,
    persistence,
    registry::Hotel,
    report::RoomReport,
    room::Guest,
};

/// Operator session over a hotel
#[derive(Debug)]
pub struct Console<R, W> {
    /// Rooms managed during this session
    hotel: Hotel,
    /// Target of the save and load entries
    data_file: PathBuf,
    /// Operator input
    input: R,
    /// Operator output
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a session over `hotel`
    #[must_use]
    pub fn new(hotel: Hotel, data_file: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            hotel,
            data_file: data_file.into(),
            input,
            output,
        }
    }

    /// End the session, handing back the hotel and the output sink
    #[must_use]
    pub fn into_parts(self) -> (Hotel, W) {
        (self.hotel, self.output)
    }

    /// Ask for a username and password and check them
    ///
    /// Running out of input counts as a failed login.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn login<A: Authenticator + ?Sized>(&mut self, auth: &A) -> io::Result<bool> {
        self.say("=== HOTEL LOGIN SYSTEM ===".bold())?;
        let username = self.prompt("Enter username: ")?.unwrap_or_default();
        let password = self.prompt("Enter password: ")?.unwrap_or_default();
        writeln!(self.output)?;

        if auth.authenticate(&username, &password) {
            info!(user = %username, "Operator logged in");
            self.say("Login successful! Welcome Admin.".green())?;
            Ok(true)
        } else {
            warn!(user = %username, "Rejected login");
            self.say("Invalid username or password. Access denied.".red())?;
            Ok(false)
        }
    }

    /// Show the menu and handle choices until the operator exits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. Booking and
    /// persistence failures are reported to the operator instead.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => self.say(err.to_string().red())?,
            }
        }
    }

    /// Print the numbered menu
    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        self.say("=== HOTEL MANAGEMENT SYSTEM ===".bold())?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        Ok(())
    }

    /// Carry out one menu entry other than exit
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::ShowAvailable => {
                let table = RoomReport::available_rooms_table(&self.hotel);
                write!(self.output, "{table}")
            }
            MenuChoice::ShowAll => {
                let table = RoomReport::all_rooms_table(&self.hotel);
                write!(self.output, "{table}")
            }
            MenuChoice::Book => self.book_room(),
            MenuChoice::Free => self.free_room(),
            MenuChoice::Save => self.save(),
            MenuChoice::Load => self.load(),
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Collect booking details and book the room
    fn book_room(&mut self) -> io::Result<()> {
        let Some(raw) = self.prompt_room_number("Enter room number: ")? else {
            return Ok(());
        };
        let Some(nights) = self.prompt_nights()? else {
            return Ok(());
        };
        let name = self.prompt("Enter customer name: ")?.unwrap_or_default();
        let phone = self.prompt("Enter customer phone: ")?.unwrap_or_default();

        let guest = match Guest::new(name, phone) {
            Ok(guest) => guest,
            Err(err) => return self.say(err.to_string().red()),
        };

        let customer = format!("Customer: {} | Phone: {}", guest.name(), guest.phone());
        let hotel = &mut self.hotel;
        let booked = room_number(raw).and_then(|n| hotel.book(n, nights, guest));
        match booked {
            Ok(booking) => {
                let number = booking.room_number;
                let done = format!("Room {number} booked successfully for {nights} day(s).");
                writeln!(self.output)?;
                self.say(done.green())?;
                self.say(customer)?;
                writeln!(self.output, "Total bill: Rs {:.2}", booking.bill)
            }
            Err(err) => self.say(err.to_string().red()),
        }
    }

    /// Ask for a room number and free it
    fn free_room(&mut self) -> io::Result<()> {
        let Some(raw) = self.prompt_room_number("Enter room number to free: ")? else {
            return Ok(());
        };

        let freed = room_number(raw).and_then(|n| self.hotel.free(n));
        match freed {
            Ok(()) => self.say(format!("Room {raw} is now available.").green()),
            Err(err) => self.say(err.to_string().red()),
        }
    }

    /// Write booking state to the data file
    fn save(&mut self) -> io::Result<()> {
        match persistence::save(self.hotel.rooms(), &self.data_file) {
            Ok(()) => self.say("Data saved successfully.".green()),
            Err(err) => {
                warn!(error = %err, "Save failed");
                self.say(err.to_string().red())
            }
        }
    }

    /// Read booking state from the data file
    fn load(&mut self) -> io::Result<()> {
        match persistence::load(&mut self.hotel, &self.data_file) {
            Ok(report) => {
                self.say("Data loaded successfully.".green())?;
                let ignored = report.skipped.saturating_add(report.unknown_rooms);
                if ignored > 0 {
                    let note = format!("Ignored {ignored} unreadable line(s).");
                    self.say(note.yellow())?;
                }
                Ok(())
            }
            Err(err @ PersistenceError::Unavailable { .. }) => self.say(err.to_string().yellow()),
            Err(err) => {
                warn!(error = %err, "Load failed");
                self.say(err.to_string().red())
            }
        }
    }

    /// Ask for a room number, reporting input that is not a number at all
    fn prompt_room_number(&mut self, text: &str) -> io::Result<Option<i64>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                self.say("Invalid room number.".red())?;
                Ok(None)
            }
        }
    }

    /// Ask for a number of nights, rejecting negative or unparsable input
    fn prompt_nights(&mut self) -> io::Result<Option<u32>> {
        let Some(line) = self.prompt("Enter number of days: ")? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(nights) if nights < 0 => {
                self.say("Number of days cannot be negative.".red())?;
                Ok(None)
            }
            Ok(nights) => match u32::try_from(nights) {
                Ok(nights) => Ok(Some(nights)),
                Err(_) => {
                    self.say("Number of days is too large.".red())?;
                    Ok(None)
                }
            },
            Err(_) => {
                self.say("Invalid number of days.".red())?;
                Ok(None)
            }
        }
    }

    /// Print `text` and read one trimmed line, or `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line is
    /// rejected by whichever parser reads it instead of ending the session.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    /// Write one line of operator feedback
    fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}

/// Narrow a typed room number; numbers no room can carry are missing rooms
fn room_number(raw: i64) -> Result<u32, HotelError> {
    u32::try_from(raw).map_err(|_| HotelError::RoomNotFound(raw))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::{fs, io::Cursor, path::Path};

    use super::*;
    use crate::auth::StaticCredentials;

    /// Run a full menu session over scripted input and return the hotel and transcript
    fn run_script(hotel: Hotel, data_file: &Path, script: impl AsRef<[u8]>) -> (Hotel, String) {
        let input = Cursor::new(script.as_ref().to_vec());
        let mut console = Console::new(hotel, data_file, input, Vec::new());
        console.run().unwrap();
        let (hotel, output) = console.into_parts();
        (hotel, String::from_utf8(output).unwrap())
    }

    /// Session over scripted input that never touches the data file
    fn session(script: &'static str) -> Console<Cursor<&'static str>, Vec<u8>> {
        Console::new(Hotel::new(), "unused", Cursor::new(script), Vec::new())
    }

    #[test]
    fn test_login() {
        let auth = StaticCredentials::new("abhinikesh", "1234");

        let mut console = session("abhinikesh\n1234\n");
        assert!(console.login(&auth).unwrap());

        let mut console = session("abhinikesh\nwrong\n");
        assert!(!console.login(&auth).unwrap());
        let (_, output) = console.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Access denied."));

        let mut console = session("");
        assert!(!console.login(&auth).unwrap());
    }

    #[test]
    fn test_book_and_free_through_menu() {
        let dir = tempfile::tempdir().unwrap();
        let (hotel, output) = run_script(
            Hotel::new(),
            &dir.path().join("data.txt"),
            "2\n101\n3\nAsha\n555\n2\n101\n1\nRavi\n777\n3\n101\n3\n101\n7\n",
        );

        assert!(output.contains("Room 101 booked successfully"));
        assert!(output.contains("for 3 day(s)."));
        assert!(output.contains("Customer: Asha | Phone: 555"));
        assert!(output.contains("Total bill: Rs 4500.00"));
        assert!(output.contains("Room is already booked."));
        assert!(output.contains("Room 101 is now available."));
        assert!(output.contains("Room is already free."));
        assert!(output.contains("Exiting..."));
        assert!(!hotel.find_room(101).unwrap().is_booked());
    }

    #[test]
    fn test_invalid_input_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let script = concat!(
            "9\nhello\n",
            "2\n999\n1\nAsha\n555\n",
            "2\n101\n-2\n",
            "2\n102\nmany\n",
            "2\n103\n1\nAsha Rao\n555\n",
            "3\nabc\n"
        );
        let (hotel, output) = run_script(Hotel::new(), &dir.path().join("data.txt"), script);

        assert_eq!(output.matches("Invalid choice.").count(), 2);
        assert!(output.contains("Room not found!"));
        assert!(output.contains("Number of days cannot be negative."));
        assert!(output.contains("Invalid number of days."));
        assert!(output.contains("Invalid guest name"));
        assert!(output.contains("Invalid room number."));
        assert!(output.contains("Exiting..."));
        assert_eq!(hotel.available_rooms().count(), 10);
    }

    #[test]
    fn test_impossible_room_numbers_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let script = "2\n-5\n1\nAsha\n555\n3\n-7\n3\n99999999999\n7\n";
        let (hotel, output) = run_script(Hotel::new(), &dir.path().join("data.txt"), script);

        assert_eq!(output.matches("Room not found!").count(), 3);
        assert!(!output.contains("Invalid room number."));
        assert!(output.contains("Enter customer phone: "));
        assert_eq!(hotel.available_rooms().count(), 10);
    }

    #[test]
    fn test_non_utf8_line_keeps_session_alive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let script = b"2\n101\n3\nAsha\n555\n\xff\n5\n7\n";

        let (hotel, output) = run_script(Hotel::new(), &path, script);

        assert!(output.contains("Invalid choice."));
        assert!(output.contains("Data saved successfully."));
        assert!(hotel.find_room(101).unwrap().is_booked());
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("101 1500 1 Asha 555"));
    }

    #[test]
    fn test_save_and_load_through_menu() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");

        let (_, output) = run_script(Hotel::new(), &path, "6\n2\n201\n2\nAsha\n555\n5\n7\n");
        assert!(output.contains("No saved data found."));
        assert!(output.contains("Total bill: Rs 5700.00"));
        assert!(output.contains("Data saved successfully."));

        let (hotel, output) = run_script(Hotel::new(), &path, "6\n4\n7\n");
        assert!(output.contains("Data loaded successfully."));
        assert_eq!(hotel.find_room(201).unwrap().guest_name(), "Asha");
        assert!(output.contains("Booked"));
    }

    #[test]
    fn test_unreadable_data_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, b"101 1500 1 Asha 555\n\xff\n").unwrap();

        let (hotel, output) = run_script(Hotel::new(), &path, "6\n1\n7\n");

        assert!(output.contains("Failed to access"));
        assert!(!output.contains("Data loaded successfully."));
        assert!(output.contains("Available Rooms:"));
        assert!(output.contains("Exiting..."));
        assert_eq!(hotel.available_rooms().count(), 10);
    }

    #[test]
    fn test_listing_available_rooms() {
        let dir = tempfile::tempdir().unwrap();
        let (_, output) = run_script(Hotel::new(), &dir.path().join("data.txt"), "1\n7\n");
        assert!(output.contains("Available Rooms:"));
        assert!(output.contains("302"));
    }
}
