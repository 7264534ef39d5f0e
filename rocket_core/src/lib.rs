//! # rocket_core - Liquid Rocket Engine Sizing Engine
//!
//! `rocket_core` turns top-level requirements for a small gaseous-oxygen
//! liquid rocket engine (thrust, chamber pressure, fuel, mixture ratio) into
//! a fully dimensioned design: propellant flows, nozzle throat and exit,
//! chamber, wall, regenerative cooling jacket and injector orifices.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a request and return a result
//! - **Deterministic**: Identical inputs give bit-identical outputs
//! - **JSON-First**: Requests, results and design constants serialize cleanly
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use rocket_core::{calculate, DesignRequest, Fuel};
//!
//! let request = DesignRequest::for_fuel(Fuel::Alcohol);
//! let result = calculate(&request).unwrap();
//!
//! for quantity in result.quantities() {
//!     println!("{quantity}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The sizing pipeline, requests and results
//! - [`propellants`] - Fuel profiles and the nozzle area-ratio table
//! - [`interpolation`] - Clamped piecewise-linear tables
//! - [`assumptions`] - Fixed design constants (configurable)
//! - [`geometry`] - Dimension sets for solid modelling
//! - [`record`] / [`file_io`] - Design records, text output, atomic saves
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod assumptions;
pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod interpolation;
pub mod propellants;
pub mod record;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use assumptions::DesignAssumptions;
pub use calculations::{
    calculate, calculate_with, evaluate, evaluate_with, DesignRequest, DesignResult, Evaluation, Quantity,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_assumptions, load_record, save_record, MemorySink, ResultSink, TextRecordSink};
pub use geometry::{ChamberNozzleProfile, FlangeLayout, FlangeSpec, InjectorLayout};
pub use propellants::Fuel;
pub use record::DesignRecord;
