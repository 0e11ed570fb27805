//! Log level definitions
//!
//! Levels are plain ordered integers so that values between the named
//! levels stay meaningful (`INFO+2` sits between `INFO` and `WARN`). Two
//! levels extend the standard `DEBUG < INFO < WARN < ERROR` set: [`Level::FATAL`]
//! just above `ERROR`, and the [`Level::PRINT`] sentinel above everything,
//! which marks a record for raw passthrough.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

/// Display labels for levels outside the standard set.
static LEVEL_NAMES: &[(Level, &str)] = &[(Level::FATAL, "FATAL")];

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);
    pub const FATAL: Level = Level(12);
    /// Sentinel used by the print family; never filtered and never labelled.
    pub const PRINT: Level = Level(16);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_print(self) -> bool {
        self.0 == Self::PRINT.0
    }

    /// Resolve the label rendered for this level.
    ///
    /// Custom names win over the standard form; `None` means the level
    /// attribute must be left out of the output entirely.
    ///
    /// ```
    /// use eslog::Level;
    ///
    /// assert_eq!(Level::FATAL.label().as_deref(), Some("FATAL"));
    /// assert_eq!(Level::new(2).label().as_deref(), Some("INFO+2"));
    /// assert_eq!(Level::PRINT.label(), None);
    /// ```
    #[must_use]
    pub fn label(self) -> Option<Cow<'static, str>> {
        if self.is_print() {
            return None;
        }
        match LEVEL_NAMES.iter().find(|(level, _)| *level == self) {
            Some((_, name)) => Some(Cow::Borrowed(*name)),
            None => Some(Cow::Owned(self.to_string())),
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        if self < Level::INFO {
            Blue
        } else if self < Level::WARN {
            Green
        } else if self < Level::ERROR {
            Yellow
        } else if self < Level::FATAL {
            Red
        } else {
            BrightRed
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::INFO
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

/// Standard form: the nearest named level at or below the value, plus the
/// signed distance to it when non-zero (`ERROR+4`, `DEBUG-1`).
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (base, anchor) = if *self < Level::INFO {
            ("DEBUG", Level::DEBUG)
        } else if *self < Level::WARN {
            ("INFO", Level::INFO)
        } else if *self < Level::ERROR {
            ("WARN", Level::WARN)
        } else {
            ("ERROR", Level::ERROR)
        };
        let offset = self.0 - anchor.0;
        if offset == 0 {
            f.write_str(base)
        } else {
            write!(f, "{}{:+}", base, offset)
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, offset) = match s.find(|c: char| c == '+' || c == '-') {
            Some(idx) => {
                let offset: i32 = s[idx..]
                    .parse()
                    .map_err(|_| LoggerError::invalid_level(s))?;
                (&s[..idx], offset)
            }
            None => (s, 0),
        };

        let base = match name.to_uppercase().as_str() {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            "FATAL" => Level::FATAL,
            _ => return Err(LoggerError::invalid_level(s)),
        };

        base.0
            .checked_add(offset)
            .map(Level)
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

/// Parse a level name such as `info`, `FATAL` or `warn-1`.
pub fn parse_level(name: &str) -> Result<Level> {
    name.parse()
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.label() {
            Some(label) => serializer.serialize_str(&label),
            None => serializer.serialize_str(&self.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
