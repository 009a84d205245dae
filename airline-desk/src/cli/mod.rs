//! Interactive menu over a [`ReservationSystem`].
//!
//! Reads choices and arguments from any `BufRead`, writes results to any
//! `Write`. Lookup failures and malformed input are reported and the menu is
//! shown again; only I/O errors end the session early.

mod input;
mod render;

use std::io::{BufRead, Write};

use tracing::{debug, error};

use crate::catalog::FlightHandle;
use crate::domain::{FlightId, Pnr, ReservationError};
use crate::system::ReservationSystem;

pub use input::{PromptError, TokenReader};

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListFlights,
    Book,
    Cancel,
    ListPassengers,
    UndoCancel,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to its entry.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ListFlights),
            2 => Some(MenuChoice::Book),
            3 => Some(MenuChoice::Cancel),
            4 => Some(MenuChoice::ListPassengers),
            5 => Some(MenuChoice::UndoCancel),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    system: &mut ReservationSystem,
    input: R,
    output: W,
) -> Result<(), PromptError> {
    let mut session = Session {
        system,
        input: TokenReader::new(input),
        out: output,
    };
    session.run()
}

struct Session<'a, R, W> {
    system: &'a mut ReservationSystem,
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<(), PromptError> {
        loop {
            write!(self.out, "\n{}Choice: ", render::MENU)?;
            self.out.flush()?;

            let step = self
                .input
                .parse::<u32>("menu choice")
                .and_then(|n| match MenuChoice::from_number(n) {
                    Some(choice) => self.dispatch(choice),
                    None => {
                        writeln!(self.out, "Invalid choice!")?;
                        Ok(true)
                    }
                });

            match step {
                Ok(true) => {}
                Ok(false) | Err(PromptError::Eof) => break,
                Err(PromptError::Invalid { expected, token }) => {
                    writeln!(self.out, "Invalid {}: {}", expected, token)?;
                    self.input.discard_pending();
                }
                Err(e) => return Err(e),
            }
        }
        writeln!(self.out, "Exiting system...")?;
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool, PromptError> {
        debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::ListFlights => self.list_flights()?,
            MenuChoice::Book => self.book()?,
            MenuChoice::Cancel => self.cancel()?,
            MenuChoice::ListPassengers => self.list_passengers()?,
            MenuChoice::UndoCancel => {
                let record = self.system.undo_last_cancellation();
                render::undo(&mut self.out, record.as_ref())?;
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn list_flights(&mut self) -> Result<(), PromptError> {
        for summary in self.system.list_flights() {
            writeln!(self.out, "{}", render::flight_line(&summary))?;
        }
        Ok(())
    }

    /// Prompt for a flight id and resolve it, reporting unknown flights.
    fn prompt_flight(&mut self) -> Result<Option<(FlightId, FlightHandle)>, PromptError> {
        let id = FlightId::new(self.prompt("Enter Flight ID: ", "flight id")?);
        match self.system.find_flight(id) {
            Some(handle) => Ok(Some((id, handle))),
            None => {
                writeln!(self.out, "Flight not found!")?;
                Ok(None)
            }
        }
    }

    fn prompt<T: std::str::FromStr>(
        &mut self,
        label: &str,
        expected: &'static str,
    ) -> Result<T, PromptError> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.input.parse(expected)
    }

    fn prompt_token(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.input.token()
    }

    fn book(&mut self) -> Result<(), PromptError> {
        let Some((id, handle)) = self.prompt_flight()? else {
            return Ok(());
        };
        let name = self.prompt_token("Enter Name: ")?;
        let age: u32 = self.prompt("Enter Age: ", "age")?;
        let class = self.prompt_token("Enter Class: ")?;

        match self.system.book(handle, &name, age, &class) {
            Ok(outcome) => render::booking(&mut self.out, id, &outcome, &name)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), PromptError> {
        let Some((_, handle)) = self.prompt_flight()? else {
            return Ok(());
        };
        let pnr = Pnr::new(self.prompt("Enter PNR: ", "PNR")?);

        match self.system.cancel(handle, pnr) {
            Ok(c) => render::cancellation(&mut self.out, &c)?,
            Err(ReservationError::PnrNotFound { .. }) => writeln!(self.out, "PNR not found.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn list_passengers(&mut self) -> Result<(), PromptError> {
        let Some((_, handle)) = self.prompt_flight()? else {
            return Ok(());
        };
        match self.system.flight(handle) {
            Ok(flight) => render::passengers(&mut self.out, flight)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn report(&mut self, err: &ReservationError) -> Result<(), PromptError> {
        error!(error = %err, "Operation failed");
        writeln!(self.out, "Error: {}", err)?;
        Ok(())
    }
}
