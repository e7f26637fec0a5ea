use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::algo::clamp::clamp_by;
use crate::algo::range::{clamp_in_place_by, par_clamp_in_place_by};
use crate::foundation::compare::{Greater, Less};
use crate::foundation::error::{ClampError, ClampResult};

/// Direction of the ordering the bounds are interpreted under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Natural order; `lo` is the numerically smaller bound.
    #[default]
    Ascending,
    /// Reversed order; `lo` is the numerically larger bound.
    Descending,
}

/// Numeric bound pair plus ordering, as read from JSON.
///
/// ```json
/// { "lo": 3.0, "hi": 7.0, "order": "ascending" }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampConfig {
    /// Bound that orders first under `order`.
    pub lo: f64,
    /// Bound that orders last under `order`.
    pub hi: f64,
    /// Ordering direction; defaults to ascending.
    #[serde(default)]
    pub order: Order,
}

impl ClampConfig {
    /// Build and validate a config.
    pub fn new(lo: f64, hi: f64, order: Order) -> ClampResult<Self> {
        let cfg = Self { lo, hi, order };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(s: &str) -> ClampResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ClampError::serde(format!("parse clamp config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ClampResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ClampError::serde(format!("parse clamp config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a config from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> ClampResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open clamp config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ClampResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ClampError::serde(e.to_string()))
    }

    /// Check that both bounds are finite and form a well-formed range under `order`.
    pub fn validate(&self) -> ClampResult<()> {
        for (name, value) in [("lo", self.lo), ("hi", self.hi)] {
            if !value.is_finite() {
                return Err(ClampError::validation(format!("{name} must be finite")));
            }
        }
        let malformed = match self.order {
            Order::Ascending => self.hi < self.lo,
            Order::Descending => self.hi > self.lo,
        };
        if malformed {
            return Err(ClampError::malformed_range(format!(
                "hi={} orders before lo={} in {:?} order",
                self.hi, self.lo, self.order
            )));
        }
        Ok(())
    }

    /// Clamp a single value.
    pub fn apply(&self, value: f64) -> f64 {
        match self.order {
            Order::Ascending => *clamp_by(&value, &self.lo, &self.hi, Less),
            Order::Descending => *clamp_by(&value, &self.lo, &self.hi, Greater),
        }
    }

    /// Clamp `values` in place and return how many changed.
    #[tracing::instrument(skip(self, values), fields(len = values.len()))]
    pub fn apply_in_place(&self, values: &mut [f64], parallel: bool) -> usize {
        match (self.order, parallel) {
            (Order::Ascending, false) => clamp_in_place_by(values, &self.lo, &self.hi, Less),
            (Order::Descending, false) => clamp_in_place_by(values, &self.lo, &self.hi, Greater),
            (Order::Ascending, true) => par_clamp_in_place_by(values, &self.lo, &self.hi, Less),
            (Order::Descending, true) => {
                par_clamp_in_place_by(values, &self.lo, &self.hi, Greater)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
