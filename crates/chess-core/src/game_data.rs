//! Parsed game records: header map plus the played move line.

use std::collections::HashMap;

use serde::Serialize;

/// One game out of a movetext batch. Immutable once parsed: the header map
/// carries whatever tag pairs the source provided, and `moves` is the played
/// line in order.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub headers: HashMap<String, String>,
    pub moves: Vec<String>,
}

impl Game {
    pub fn new(headers: HashMap<String, String>, moves: Vec<String>) -> Game {
        Game { headers, moves }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Header value for display purposes, `"?"` when absent.
    pub fn header_or_unknown(&self, key: &str) -> &str {
        self.header(key).unwrap_or("?")
    }
}
