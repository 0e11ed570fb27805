//! Shared, dynamically adjustable minimum level
//!
//! A [`LevelVar`] is a handle to a single atomic cell. Clones share the
//! cell, so every logger and handler built from the same variable sees a
//! threshold change at once, while writes stay whole-value replacements.

use super::error::Result;
use super::log_level::Level;
use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct LevelVar {
    cell: Arc<AtomicI32>,
}

impl LevelVar {
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            cell: Arc::new(AtomicI32::new(level.value())),
        }
    }

    /// Current threshold
    #[inline]
    pub fn level(&self) -> Level {
        Level::new(self.cell.load(Ordering::Acquire))
    }

    /// Replace the threshold
    #[inline]
    pub fn set(&self, level: Level) {
        self.cell.store(level.value(), Ordering::Release);
    }

    /// Parse `name` and replace the threshold.
    ///
    /// On a parse failure the previous threshold stays active.
    ///
    /// ```
    /// use eslog::{Level, LevelVar};
    ///
    /// let var = LevelVar::default();
    /// var.set_from_str("Warn").unwrap();
    /// assert_eq!(var.level(), Level::WARN);
    ///
    /// assert!(var.set_from_str("loud").is_err());
    /// assert_eq!(var.level(), Level::WARN);
    /// ```
    pub fn set_from_str(&self, name: &str) -> Result<()> {
        let level: Level = name.parse()?;
        self.set(level);
        Ok(())
    }

    /// `true` when `level` is at or above the threshold
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// `true` when both handles point at the same cell
    pub fn shares_cell_with(&self, other: &LevelVar) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl Default for LevelVar {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl fmt::Debug for LevelVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelVar({})", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_debug() {
        let var = LevelVar::default();
        assert_eq!(var.level(), Level::DEBUG);
        assert!(var.is_enabled(Level::DEBUG));
    }

    #[test]
    fn test_is_enabled_boundary() {
        let var = LevelVar::new(Level::WARN);
        assert!(!var.is_enabled(Level::INFO));
        assert!(!var.is_enabled(Level::new(3)));
        assert!(var.is_enabled(Level::WARN));
        assert!(var.is_enabled(Level::ERROR));
        assert!(var.is_enabled(Level::PRINT));
    }

    #[test]
    fn test_clones_share_cell() {
        let var = LevelVar::default();
        let clone = var.clone();
        clone.set(Level::ERROR);

        assert_eq!(var.level(), Level::ERROR);
        assert!(var.shares_cell_with(&clone));
        assert!(!var.shares_cell_with(&LevelVar::default()));
    }

    #[test]
    fn test_invalid_name_keeps_threshold() {
        let var = LevelVar::new(Level::INFO);
        assert!(var.set_from_str("").is_err());
        assert!(var.set_from_str("trace").is_err());
        assert_eq!(var.level(), Level::INFO);
    }

    #[test]
    fn test_setting_same_level_twice() {
        let var = LevelVar::default();
        var.set_from_str("error").unwrap();
        let first: Vec<bool> = [Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR]
            .iter()
            .map(|l| var.is_enabled(*l))
            .collect();

        var.set_from_str("ERROR").unwrap();
        let second: Vec<bool> = [Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR]
            .iter()
            .map(|l| var.is_enabled(*l))
            .collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![false, false, false, true]);
    }

    #[test]
    fn test_debug_format() {
        let var = LevelVar::new(Level::FATAL);
        assert_eq!(format!("{:?}", var), "LevelVar(ERROR+4)");
    }
}
