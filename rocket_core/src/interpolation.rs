//! # Piecewise-Linear Interpolation
//!
//! Clamped linear lookup over a sorted sample table. Shared by the flame
//! temperature, specific impulse and nozzle area-ratio tables.
//!
//! Queries outside the tabulated domain return the nearest endpoint value;
//! the table never extrapolates. [`InterpolationTable::lookup`] also reports
//! when that happened so callers can surface it.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::interpolation::{InterpolationTable, Sample};
//!
//! let table = InterpolationTable::new(
//!     "demo",
//!     vec![Sample::new(0.0, 0.0), Sample::new(10.0, 100.0)],
//! )
//! .unwrap();
//!
//! assert_eq!(table.interpolate(5.0), 50.0);
//! assert_eq!(table.interpolate(-3.0), 0.0);   // clamp-low
//! assert_eq!(table.interpolate(42.0), 100.0); // clamp-high
//! ```

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// One tabulated point. Implemented by every sample kind a table can hold.
pub trait TableSample: Copy {
    /// Independent variable
    fn x(&self) -> f64;
    /// Dependent variable
    fn y(&self) -> f64;
}

/// Plain (x, y) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }
}

impl TableSample for Sample {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// Which end of the table a query was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampSide {
    Below,
    Above,
}

/// A query that fell outside the tabulated domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Clamp {
    /// Name of the table that clamped
    pub table: &'static str,
    /// The requested x
    pub query: f64,
    /// The x of the endpoint whose y was returned
    pub bound: f64,
    pub side: ClampSide,
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lookup {
    pub value: f64,
    /// `Some` when the query lay strictly outside the tabulated x range
    pub clamped: Option<Clamp>,
}

/// Collects the clamps hit during one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClampLog {
    clamps: Vec<Clamp>,
}

impl ClampLog {
    /// Record a lookup and return its value.
    pub fn note(&mut self, lookup: Lookup) -> f64 {
        if let Some(clamp) = lookup.clamped {
            tracing::warn!(
                table = clamp.table,
                query = clamp.query,
                bound = clamp.bound,
                side = ?clamp.side,
                "query outside tabulated range, clamped to endpoint"
            );
            self.clamps.push(clamp);
        }
        lookup.value
    }

    pub fn is_empty(&self) -> bool {
        self.clamps.is_empty()
    }

    pub fn into_clamps(self) -> Vec<Clamp> {
        self.clamps
    }
}

/// Ordered sample table with clamped linear interpolation.
///
/// Invariant: at least one sample, all x finite and strictly ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable<S: TableSample> {
    name: &'static str,
    samples: Vec<S>,
}

impl<S: TableSample> InterpolationTable<S> {
    /// Build a table, checking the ordering invariant.
    pub fn new(name: &'static str, samples: Vec<S>) -> CalcResult<Self> {
        if samples.is_empty() {
            return Err(CalcError::invalid_table(name, "table has no samples"));
        }
        if let Some(bad) = samples.iter().find(|s| !s.x().is_finite() || !s.y().is_finite()) {
            return Err(CalcError::invalid_table(
                name,
                format!("non-finite sample ({}, {})", bad.x(), bad.y()),
            ));
        }
        if let Some(pair) = samples.windows(2).find(|w| w[1].x() <= w[0].x()) {
            return Err(CalcError::invalid_table(
                name,
                format!(
                    "sample x values must be strictly ascending ({} then {})",
                    pair[0].x(),
                    pair[1].x()
                ),
            ));
        }
        Ok(InterpolationTable { name, samples })
    }

    /// Build a table from compile-time data known to be sorted.
    pub(crate) fn from_sorted(name: &'static str, samples: Vec<S>) -> Self {
        debug_assert!(
            Self::new(name, samples.clone()).is_ok(),
            "built-in table '{name}' violates its ordering invariant"
        );
        InterpolationTable { name, samples }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    /// Interpolated value at `x`, clamped to the table's endpoints.
    pub fn interpolate(&self, x: f64) -> f64 {
        self.lookup(x).value
    }

    /// Interpolated value at `x` together with any clamp that was applied.
    pub fn lookup(&self, x: f64) -> Lookup {
        let first = self.samples[0];
        let last = self.samples[self.samples.len() - 1];

        if x.is_nan() {
            return Lookup {
                value: f64::NAN,
                clamped: None,
            };
        }

        if x <= first.x() {
            return Lookup {
                value: first.y(),
                clamped: (x < first.x()).then_some(Clamp {
                    table: self.name,
                    query: x,
                    bound: first.x(),
                    side: ClampSide::Below,
                }),
            };
        }

        if x >= last.x() {
            return Lookup {
                value: last.y(),
                clamped: (x > last.x()).then_some(Clamp {
                    table: self.name,
                    query: x,
                    bound: last.x(),
                    side: ClampSide::Above,
                }),
            };
        }

        // first.x < x < last.x, so the split lies strictly inside the table
        let upper = self.samples.partition_point(|s| s.x() <= x);
        let lo = self.samples[upper - 1];
        if lo.x() == x {
            return Lookup {
                value: lo.y(),
                clamped: None,
            };
        }
        let hi = self.samples[upper];

        Lookup {
            value: lo.y() + (x - lo.x()) * (hi.y() - lo.y()) / (hi.x() - lo.x()),
            clamped: None,
        }
    }
}
