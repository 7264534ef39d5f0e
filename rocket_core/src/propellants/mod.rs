//! # Propellant Data
//!
//! Static empirical data the sizing pipeline interpolates:
//!
//! - [`fuel`] - per-fuel density, flame temperature vs mixture ratio and
//!   specific impulse vs chamber pressure (gaseous oxygen oxidizer)
//! - [`area_ratio`] - fuel-independent nozzle exit/throat area ratio vs
//!   chamber pressure
//!
//! Tables are built once on first use and never change afterwards.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::propellants::{Fuel, area_ratio_table};
//!
//! let profile = Fuel::Gasoline.profile();
//! assert_eq!(profile.flame_temperature_r(2.5), 6202.0);
//! assert_eq!(area_ratio_table().interpolate(500.0), 5.28);
//! ```

pub mod area_ratio;
pub mod fuel;

pub use area_ratio::{area_ratio_table, AreaRatioSample};
pub use fuel::{FlameTemperatureSample, Fuel, FuelProfile, ImpulseSample};
