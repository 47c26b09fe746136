//! The numbered menu loop.
//!
//! Generic over its input and output so tests can script a whole session.
//! Duplicate and missing titles are reported and the loop goes on; so are
//! command errors such as a failed flush. Only a broken output stream ends
//! the session with an error. End of input ends it cleanly.

use super::render::{write_messages, write_result};
use colored::Colorize;
use getflix::api::{CmdMessage, CmdResult, GetflixApi};
use getflix::commands::site::SiteOptions;
use getflix::error::Result;
use getflix::lookup::MovieLookup;
use getflix::model::{is_valid_rating, Movie};
use getflix::store::MovieStorage;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const BANNER: &str = "********** My Movies Database **********";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    List,
    Add,
    Delete,
    Update,
    Stats,
    Random,
    Search,
    Sort,
    Site,
}

impl MenuChoice {
    /// In menu order; the index is the number the user types.
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::Exit,
        MenuChoice::List,
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::Update,
        MenuChoice::Stats,
        MenuChoice::Random,
        MenuChoice::Search,
        MenuChoice::Sort,
        MenuChoice::Site,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::List => "List movies",
            MenuChoice::Add => "Add movie",
            MenuChoice::Delete => "Delete movie",
            MenuChoice::Update => "Update movie",
            MenuChoice::Stats => "Stats",
            MenuChoice::Random => "Random movie",
            MenuChoice::Search => "Search movie",
            MenuChoice::Sort => "Movies sorted by rating",
            MenuChoice::Site => "Generate website",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChoice {
    NotANumber,
    OutOfRange,
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let n: i64 = s.trim().parse().map_err(|_| InvalidChoice::NotANumber)?;
        usize::try_from(n)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(InvalidChoice::OutOfRange)
    }
}

enum Flow {
    Continue,
    Quit,
}

fn parse_year(input: &str) -> std::result::Result<i32, &'static str> {
    input
        .parse()
        .map_err(|_| "Invalid year. Please enter a whole number.")
}

fn parse_rating(input: &str) -> std::result::Result<f64, &'static str> {
    input
        .parse::<f64>()
        .ok()
        .filter(|r| is_valid_rating(*r))
        .ok_or("Invalid rating. Please enter a number between 0 and 10.")
}

pub struct Menu<'a, S: MovieStorage, R, W> {
    api: &'a mut GetflixApi<S>,
    lookup: &'a dyn MovieLookup,
    site: &'a SiteOptions,
    input: R,
    output: W,
}

impl<'a, S: MovieStorage, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(
        api: &'a mut GetflixApi<S>,
        lookup: &'a dyn MovieLookup,
        site: &'a SiteOptions,
        input: R,
        output: W,
    ) -> Self {
        Self {
            api,
            lookup,
            site,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER.bold())?;
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter choice (0-9): ")? else {
                break;
            };
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(InvalidChoice::NotANumber) => {
                    self.warn("Invalid input. Please enter a number.")?;
                    continue;
                }
                Err(InvalidChoice::OutOfRange) => {
                    self.warn("Invalid choice. Please try again.")?;
                    continue;
                }
            };
            if let Flow::Quit = self.dispatch(choice)? {
                break;
            }
        }
        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for (number, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", number, choice.label())?;
        }
        writeln!(self.output)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => Ok(Flow::Quit),
            MenuChoice::List => {
                let result = self.api.list_movies();
                self.report(result)
            }
            MenuChoice::Add => self.add(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Update => self.update(),
            MenuChoice::Stats => {
                let result = self.api.stats();
                self.report(result)
            }
            MenuChoice::Random => {
                let result = self.api.random_movie();
                self.report(result)
            }
            MenuChoice::Search => {
                let Some(term) = self.prompt_required("Enter part of movie name: ")? else {
                    return Ok(Flow::Quit);
                };
                let result = self.api.search_movies(&term);
                self.report(result)
            }
            MenuChoice::Sort => {
                let result = self.api.movies_by_rating();
                self.report(result)
            }
            MenuChoice::Site => {
                let result = self.api.generate_site(self.site);
                self.report(result)
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt_required("Enter new movie name: ")? else {
            return Ok(Flow::Quit);
        };
        if self.api.has_movie(&title) {
            self.warn(&format!("Movie '{}' already exists!", title))?;
            return Ok(Flow::Continue);
        }

        let (title, movie) = if self.lookup.is_enabled() {
            match self.lookup.find(&title) {
                Some(details) => details.into_movie(),
                None => {
                    self.warn(&format!("Movie '{}' not found.", title))?;
                    return Ok(Flow::Continue);
                }
            }
        } else {
            let Some(year) = self.prompt_parsed("Enter new movie year: ", parse_year)? else {
                return Ok(Flow::Quit);
            };
            let Some(rating) = self.prompt_parsed("Enter new movie rating (0-10): ", parse_rating)?
            else {
                return Ok(Flow::Quit);
            };
            (title, Movie::new(year, rating))
        };

        let result = self.api.add_movie(&title, movie);
        self.report(result)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt_required("Enter movie name to delete: ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.delete_movie(&title);
        self.report(result)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt_required("Enter movie name: ")? else {
            return Ok(Flow::Quit);
        };
        if !self.api.has_movie(&title) {
            self.warn(&format!("Movie '{}' not found.", title))?;
            return Ok(Flow::Continue);
        }
        let Some(note) = self.prompt_required("Enter movie note: ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.add_note(&title, &note);
        self.report(result)
    }

    /// Print a command's output, or its error. Either way the session goes on.
    fn report(&mut self, result: Result<CmdResult>) -> Result<Flow> {
        match result {
            Ok(result) => write_result(&mut self.output, &result)?,
            Err(e) => write_messages(
                &mut self.output,
                &[CmdMessage::error(format!("Error: {}", e))],
            )?,
        }
        Ok(Flow::Continue)
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        write_messages(&mut self.output, &[CmdMessage::warning(message)])
    }

    /// One trimmed line, or `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_required(&mut self, text: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(text)? {
                Some(value) if value.is_empty() => self.warn("Please enter a value.")?,
                other => return Ok(other),
            }
        }
    }

    fn prompt_parsed<T>(
        &mut self,
        text: &str,
        parse: fn(&str) -> std::result::Result<T, &'static str>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(value) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse(&value) {
                Ok(parsed) => return Ok(Some(parsed)),
                Err(message) => self.warn(message)?,
            }
        }
    }
}
