//! Interactive converter session
//!
//! Holds what a converter screen holds: the selected category, the from/to
//! units, the raw input text, the current result and a short history. Every
//! edit that changes the state triggers one synchronous recompute.

use std::collections::VecDeque;
use serde::Serialize;
use tracing::trace;
use converto_core::{format_history_entry, format_result, parse_magnitude};
use crate::{Category, ConversionError, Unit, UnitRegistry};

/// Number of history entries kept when no limit is given
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Most-recent-first log of successful conversions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionHistory {
    entries: VecDeque<String>,
    limit: usize,
}

impl ConversionHistory {
    /// History keeping at most `limit` entries (at least one)
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        ConversionHistory {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn record(&mut self, entry: String) {
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ConversionHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

/// A converted value at full precision and as displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub display: String,
}

/// Serializable view of a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub category: String,
    pub display_name: String,
    pub from: Unit,
    pub to: Unit,
    pub input: String,
    pub result: Option<ConversionResult>,
    pub history: Vec<String>,
}

/// State of one converter screen
#[derive(Debug, Clone)]
pub struct ConverterSession<'r> {
    registry: &'r UnitRegistry,
    category: &'r Category,
    from: &'r Unit,
    to: &'r Unit,
    input: String,
    result: Option<ConversionResult>,
    history: ConversionHistory,
}

impl<'r> ConverterSession<'r> {
    /// Open a converter on `category` with its default unit pair
    pub fn open(registry: &'r UnitRegistry, category: &str) -> Result<Self, ConversionError> {
        let (category, from, to) = Self::defaults(registry, category)?;
        Ok(ConverterSession {
            registry,
            category,
            from,
            to,
            input: String::new(),
            result: None,
            history: ConversionHistory::default(),
        })
    }

    /// Replace the history with an empty one holding at most `limit` entries
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = ConversionHistory::new(limit);
        self
    }

    /// Switch category: input, result and history are reset and the
    /// default pair is selected. An unknown key leaves the session as is.
    pub fn select_category(&mut self, category: &str) -> Result<(), ConversionError> {
        let (category, from, to) = Self::defaults(self.registry, category)?;
        self.category = category;
        self.from = from;
        self.to = to;
        self.input.clear();
        self.result = None;
        self.history.clear();
        trace!(category = %category.key, from = %from.key, to = %to.key, "category selected");
        Ok(())
    }

    pub fn set_input(&mut self, text: &str) {
        if self.input != text {
            self.input = text.to_string();
            self.recompute();
        }
    }

    pub fn set_from(&mut self, unit: &str) -> Result<(), ConversionError> {
        let unit = self.lookup(unit)?;
        if unit.key != self.from.key {
            self.from = unit;
            self.recompute();
        }
        Ok(())
    }

    pub fn set_to(&mut self, unit: &str) -> Result<(), ConversionError> {
        let unit = self.lookup(unit)?;
        if unit.key != self.to.key {
            self.to = unit;
            self.recompute();
        }
        Ok(())
    }

    /// Exchange from and to units, keeping the input
    pub fn swap(&mut self) {
        if self.from.key != self.to.key {
            std::mem::swap(&mut self.from, &mut self.to);
            self.recompute();
        }
    }

    pub fn category(&self) -> &'r Category {
        self.category
    }

    pub fn from(&self) -> &'r Unit {
        self.from
    }

    pub fn to(&self) -> &'r Unit {
        self.to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// One-line description of the current state, e.g. "5 km = 5000 m"
    pub fn summary(&self) -> String {
        match &self.result {
            Some(result) => format!("{} {} = {} {}", self.input, self.from.symbol, result.display, self.to.symbol),
            None => format!("{}: {} → {}", self.category.display_name, self.from.label(), self.to.label()),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            category: self.category.key.clone(),
            display_name: self.category.display_name.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            input: self.input.clone(),
            result: self.result.clone(),
            history: self.history.entries().map(String::from).collect(),
        }
    }

    fn recompute(&mut self) {
        let converted = parse_magnitude(&self.input)
            .and_then(|value| self.category.convert(value, &self.from.key, &self.to.key).ok());

        match converted {
            Some(value) => {
                let shown = format_result(value);
                trace!(input = %self.input, from = %self.from.key, to = %self.to.key, display = %shown, "recomputed");
                self.history.record(format_history_entry(&self.input, &self.from.symbol, value, &self.to.symbol));
                self.result = Some(ConversionResult { value, display: shown });
            }
            None => {
                trace!(input = %self.input, "no result");
                self.result = None;
            }
        }
    }

    fn lookup(&self, unit: &str) -> Result<&'r Unit, ConversionError> {
        self.category.unit(unit).ok_or_else(|| ConversionError::UnitNotFound {
            category: self.category.key.clone(),
            unit: unit.to_string(),
        })
    }

    fn defaults(registry: &'r UnitRegistry, key: &str) -> Result<(&'r Category, &'r Unit, &'r Unit), ConversionError> {
        let category = registry.category(key)
            .ok_or_else(|| ConversionError::CategoryNotFound(key.to_string()))?;
        let (from, to) = category.default_pair()
            .ok_or_else(|| ConversionError::UnitNotFound {
                category: key.to_string(),
                unit: "*".to_string(),
            })?;
        Ok((category, from, to))
    }
}
