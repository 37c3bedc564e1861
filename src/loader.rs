//! Reads a hotel description from text
//!
//! The format is a whitespace-separated integer stream: room count, corridor
//! count, then one `from to` pair per corridor. Line breaks carry no meaning
//! and tokens after the last declared pair are ignored.

use std::path::Path;

use miette::{NamedSource, SourceSpan};

use crate::constants::limits::MAX_ROOMS;
use crate::error::{HotelError, InputParseError};
use crate::graph::Hotel;

/// A hotel together with the corridors that were dropped while building it
#[derive(Debug)]
pub struct LoadedHotel {
    pub hotel: Hotel,
    pub rejected: Vec<HotelError>,
}

/// Read and parse a hotel description file
pub fn load_hotel(path: &Path) -> Result<LoadedHotel, HotelError> {
    let content = std::fs::read_to_string(path).map_err(|source| HotelError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_hotel(&path.display().to_string(), &content)
}

/// Parse a hotel description; `name` labels diagnostics
pub fn parse_hotel(name: &str, content: &str) -> Result<LoadedHotel, HotelError> {
    let mut tokens = Tokens::new(name, content);

    let (room_count, room_span) = tokens.next_count("room count")?;
    let (corridor_count, _) = tokens.next_count("corridor count")?;

    let mut hotel = Some(room_count)
        .filter(|&count| count <= MAX_ROOMS)
        .and_then(Hotel::try_new)
        .ok_or_else(|| {
            tokens.error(
                format!("room count must be at most {MAX_ROOMS}"),
                Some(room_span),
            )
        })?;
    let mut rejected = Vec::new();
    for corridor in 1..=corridor_count {
        let from = tokens.next_integer(&format!("source room of corridor {corridor}"))?;
        let to = tokens.next_integer(&format!("target room of corridor {corridor}"))?;
        if let Err(err) = hotel.add_corridor(from, to) {
            rejected.push(err);
        }
    }

    Ok(LoadedHotel { hotel, rejected })
}

struct Tokens<'a> {
    name: &'a str,
    content: &'a str,
    offset: usize,
}

impl<'a> Tokens<'a> {
    fn new(name: &'a str, content: &'a str) -> Self {
        Self {
            name,
            content,
            offset: 0,
        }
    }

    /// Next whitespace-delimited token and its byte span
    fn next_token(&mut self) -> Option<(&'a str, SourceSpan)> {
        let rest = &self.content[self.offset..];
        let start = self.offset + (rest.len() - rest.trim_start().len());
        let token_len = self.content[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.content.len() - start);
        self.offset = start + token_len;

        if token_len == 0 {
            None
        } else {
            Some((
                &self.content[start..start + token_len],
                (start, token_len).into(),
            ))
        }
    }

    fn next_integer(&mut self, what: &str) -> Result<i64, HotelError> {
        let (token, span) = self
            .next_token()
            .ok_or_else(|| self.error(format!("input ended before the {what}"), None))?;
        token
            .parse::<i64>()
            .map_err(|_| self.error(format!("expected an integer {what}"), Some(span)))
    }

    fn next_count(&mut self, what: &str) -> Result<(usize, SourceSpan), HotelError> {
        let (token, span) = self
            .next_token()
            .ok_or_else(|| self.error(format!("input ended before the {what}"), None))?;
        let count = token
            .parse::<usize>()
            .map_err(|_| self.error(format!("expected a non-negative {what}"), Some(span)))?;
        Ok((count, span))
    }

    fn error(&self, message: String, span: Option<SourceSpan>) -> HotelError {
        let span = span.or_else(|| Some((self.content.len(), 0).into()));
        HotelError::InputParseError(Box::new(InputParseError {
            file: self.name.to_string(),
            message,
            source_code: NamedSource::new(self.name, self.content.to_string()),
            span,
        }))
    }
}
