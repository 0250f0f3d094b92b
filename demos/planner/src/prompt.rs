//! Line-oriented prompts.  Every reader re-asks until it gets a usable
//! value, so nothing unvalidated reaches the planning crates.
//!
//! `Ok(None)` from any prompt means the input ended or the user quit.

use std::io::{BufRead, Write};

use anyhow::Result;
use lift_core::{Direction, Floor, valid_directions};
use lift_dispatch::Request;
use lift_estimate::BuildingProfile;

pub struct Prompter<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line.  `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    pub fn positive_int(&mut self, prompt: &str) -> Result<Option<u32>> {
        loop {
            let Some(line) = self.ask(prompt)? else { return Ok(None) };
            match line.parse::<u32>() {
                Ok(v) if v > 0 => return Ok(Some(v)),
                Ok(_)          => self.say("Please enter a positive integer.")?,
                Err(_)         => self.say("Invalid input. Please enter a positive integer.")?,
            }
        }
    }

    pub fn positive_number(&mut self, prompt: &str) -> Result<Option<f64>> {
        loop {
            let Some(line) = self.ask(prompt)? else { return Ok(None) };
            match line.parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => return Ok(Some(v)),
                Ok(_)  => self.say("Please enter a positive number.")?,
                Err(_) => self.say("Invalid input. Please enter a positive number.")?,
            }
        }
    }

    /// Blank skips; an invalid value is reported and also skipped.
    pub fn optional_positive_int(&mut self, prompt: &str) -> Result<Option<u32>> {
        let Some(line) = self.ask(prompt)? else { return Ok(None) };
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse::<u32>() {
            Ok(v) if v > 0 => Ok(Some(v)),
            _ => {
                self.say("Invalid value. Skipping preferred capacity.")?;
                Ok(None)
            }
        }
    }

    /// Collect a full building profile.  Floor count must be at least 2.
    pub fn building_profile(&mut self) -> Result<Option<BuildingProfile>> {
        let floors = loop {
            let Some(n) = self.positive_int("Enter the number of floors in the building: ")? else {
                return Ok(None);
            };
            if n >= 2 {
                break n;
            }
            self.say("A building needs at least 2 floors for an elevator.")?;
        };
        let Some(peak_riders) = self.positive_int("Enter the total number of people during peak hours: ")? else {
            return Ok(None);
        };
        let Some(max_wait_secs) = self.positive_number(
            "Enter the maximum acceptable waiting time for an elevator (in seconds): ",
        )? else {
            return Ok(None);
        };
        let Some(floor_height_m) = self.positive_number("Enter the floor height (in meters): ")? else {
            return Ok(None);
        };
        let preferred_capacity =
            self.optional_positive_int("Enter preferred elevator capacity (press Enter to skip): ")?;

        Ok(Some(BuildingProfile {
            floors,
            peak_riders,
            max_wait_secs,
            floor_height_m,
            preferred_capacity,
        }))
    }

    /// Ask for one rider request, offering only the directions available at
    /// the origin.  `q` at any step quits.
    pub fn request(&mut self, floor_count: u32) -> Result<Option<Request>> {
        let origin = loop {
            let Some(line) = self.ask(&format!("Your floor (1-{floor_count}, q to quit): "))? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            match line.parse::<u32>() {
                Ok(n) if Floor(n).within(floor_count) => break Floor(n),
                _ => self.say(&format!("Please enter a floor between 1 and {floor_count}."))?,
            }
        };

        let offered = valid_directions(origin, floor_count);
        let direction = match offered.iter().collect::<Vec<_>>().as_slice() {
            [only] => {
                self.say(&format!("Only {only} is available from floor {origin}."))?;
                *only
            }
            _ => loop {
                let Some(line) = self.ask("Direction (up/down): ")? else { return Ok(None) };
                if is_quit(&line) {
                    return Ok(None);
                }
                match line.parse::<Direction>() {
                    Ok(d) if offered.contains(d) => break d,
                    _ => self.say(&format!("Please choose one of {offered}."))?,
                }
            },
        };

        let (low, high) = match direction {
            Direction::Up   => (origin.0 + 1, floor_count),
            Direction::Down => (1, origin.0 - 1),
        };
        let destination = loop {
            let Some(line) = self.ask(&format!("Destination floor ({low}-{high}): "))? else {
                return Ok(None);
            };
            if is_quit(&line) {
                return Ok(None);
            }
            match line.parse::<u32>() {
                Ok(n) if (low..=high).contains(&n) => break n,
                _ => self.say(&format!("Please enter a floor between {low} and {high}."))?,
            }
        };

        Ok(Some(Request::new(origin, direction, destination)))
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}
