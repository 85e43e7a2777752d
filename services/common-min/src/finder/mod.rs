//! Smallest value common to three arrays.
//!
//! Three interchangeable strategies produce the same answer:
//! - [`merge`]: sort, then a three-cursor linear scan
//! - [`binary`]: sort, then binary-search each element of the first array in the others
//! - [`counting`]: deduplicate, then count occurrences in an ordered map
//!
//! The strategies assume non-empty arrays of positive values and never mutate
//! the caller's slices. [`Finder`] adds optional input validation, logging and
//! metrics on top.

pub mod binary;
pub mod counting;
pub mod merge;


use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::FinderConfig;
use crate::error::{CommonMinError, Result};
use crate::metrics::{record_find, record_validation_failure};

/// Returned when the three arrays share no value.
pub const NOT_FOUND: i32 = -1;

pub const DEFAULT_MAX_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "merge", alias = "optimal")]
    Merge,
    #[serde(rename = "binary_search", alias = "binary", alias = "concise")]
    BinarySearch,
    #[serde(rename = "counting", alias = "streaming")]
    Counting,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Merge, Strategy::BinarySearch, Strategy::Counting];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Merge => "merge",
            Strategy::BinarySearch => "binary_search",
            Strategy::Counting => "counting",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = CommonMinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" | "optimal" => Ok(Strategy::Merge),
            "binary" | "binary_search" | "concise" => Ok(Strategy::BinarySearch),
            "counting" | "streaming" => Ok(Strategy::Counting),
            other => Err(CommonMinError::InvalidStrategy(other.to_string())),
        }
    }
}

pub fn find_smallest_common(strategy: Strategy, a: &[i32], b: &[i32], c: &[i32]) -> i32 {
    match strategy {
        Strategy::Merge => merge::find_smallest_common(a, b, c),
        Strategy::BinarySearch => binary::find_smallest_common(a, b, c),
        Strategy::Counting => counting::find_smallest_common(a, b, c),
    }
}

/// Checks the finder preconditions, reporting the first violation in A, B, C order.
pub fn validate_inputs(a: &[i32], b: &[i32], c: &[i32], max_len: usize) -> Result<()> {
    for (array, values) in [('A', a), ('B', b), ('C', c)] {
        if values.is_empty() {
            return Err(CommonMinError::EmptyArray { array });
        }
        if values.len() > max_len {
            return Err(CommonMinError::TooManyElements {
                array,
                len: values.len(),
                max: max_len,
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v <= 0) {
            return Err(CommonMinError::NonPositive { array, index, value });
        }
    }
    Ok(())
}

/// Result of running every strategy over the same inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub results: Vec<(Strategy, i32)>,
}

impl Comparison {
    pub fn agree(&self) -> bool {
        self.results.windows(2).all(|w| w[0].1 == w[1].1)
    }

    pub fn value(&self) -> Option<i32> {
        if self.agree() {
            self.results.first().map(|(_, v)| *v)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Finder {
    config: FinderConfig,
}

impl Finder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    pub fn find(&self, a: &[i32], b: &[i32], c: &[i32]) -> Result<i32> {
        self.find_with(self.config.strategy, a, b, c)
    }

    pub fn find_with(&self, strategy: Strategy, a: &[i32], b: &[i32], c: &[i32]) -> Result<i32> {
        self.check(a, b, c)?;

        let start = Instant::now();
        let result = find_smallest_common(strategy, a, b, c);
        record_find(strategy, result != NOT_FOUND, start.elapsed());

        tracing::debug!(
            strategy = %strategy,
            a_len = a.len(),
            b_len = b.len(),
            c_len = c.len(),
            result,
            "Found smallest common value"
        );
        Ok(result)
    }

    pub fn compare(&self, a: &[i32], b: &[i32], c: &[i32]) -> Result<Comparison> {
        self.check(a, b, c)?;

        let results = Strategy::ALL
            .iter()
            .map(|&strategy| (strategy, find_smallest_common(strategy, a, b, c)))
            .collect();
        let comparison = Comparison { results };

        if !comparison.agree() {
            tracing::warn!("Strategies disagree: {:?}", comparison.results);
        }
        Ok(comparison)
    }

    fn check(&self, a: &[i32], b: &[i32], c: &[i32]) -> Result<()> {
        if !self.config.validate {
            return Ok(());
        }
        validate_inputs(a, b, c, self.config.max_len).inspect_err(|e| {
            record_validation_failure();
            tracing::warn!("Rejected input: {}", e);
        })
    }
}
