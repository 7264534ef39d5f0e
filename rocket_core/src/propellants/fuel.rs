//! Fuel Property Profiles (gaseous oxygen oxidizer)
//!
//! Each profile carries the fuel's liquid density, the adiabatic flame
//! temperature curve over mixture ratio, and the specific impulse curve over
//! chamber pressure. Flame temperatures are tabulated in °F and stored in °R.
//!
//! Only methyl alcohol and gasoline have their own data. Ethanol is accepted
//! as a fuel but has no tabulated data yet; [`Fuel::profile`] maps it to the
//! gasoline profile explicitly.

use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::interpolation::{InterpolationTable, TableSample};

/// °F → °R offset used when tabulating flame temperatures
const FAHRENHEIT_TO_RANKINE: f64 = 460.0;

/// Supported fuels
///
/// Serializes as the lowercase code; deserializes through
/// [`Fuel::from_str_flexible`], so `"Gasoline"` and `"methyl alcohol"` are
/// accepted and unknown names are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fuel {
    /// Methyl alcohol
    Alcohol,
    /// Gasoline
    Gasoline,
    /// Ethyl alcohol (no distinct data, see [`Fuel::profile`])
    Ethanol,
}

impl Fuel {
    /// All fuel variants for front-end selection
    pub const ALL: [Fuel; 3] = [Fuel::Alcohol, Fuel::Gasoline, Fuel::Ethanol];

    /// Fuel used when an identifier cannot be resolved
    pub const DEFAULT: Fuel = Fuel::Gasoline;

    /// Lowercase identifier, as used in record file names
    pub fn code(&self) -> &'static str {
        match self {
            Fuel::Alcohol => "alcohol",
            Fuel::Gasoline => "gasoline",
            Fuel::Ethanol => "ethanol",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Fuel::Alcohol => "Methyl Alcohol",
            Fuel::Gasoline => "Gasoline",
            Fuel::Ethanol => "Ethanol",
        }
    }

    /// Parse from common string representations. Unknown names are an error.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "alcohol" | "methanol" | "methylalcohol" => Ok(Fuel::Alcohol),
            "gasoline" | "petrol" => Ok(Fuel::Gasoline),
            "ethanol" | "ethylalcohol" => Ok(Fuel::Ethanol),
            _ => Err(CalcError::unknown_fuel(s)),
        }
    }

    /// Lenient resolution: unknown identifiers fall back to [`Fuel::DEFAULT`].
    pub fn resolve(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            tracing::warn!(identifier = s, fallback = Fuel::DEFAULT.code(), "unknown fuel identifier");
            Fuel::DEFAULT
        })
    }

    /// Mixture ratio the interactive front-end proposes for this fuel
    pub fn default_mixture_ratio(&self) -> f64 {
        match self {
            Fuel::Alcohol => 1.2,
            Fuel::Gasoline => 2.5,
            Fuel::Ethanol => 4.5,
        }
    }

    /// Property profile for this fuel.
    pub fn profile(&self) -> &'static FuelProfile {
        match self {
            Fuel::Alcohol => &ALCOHOL,
            Fuel::Gasoline => &GASOLINE,
            Fuel::Ethanol => {
                tracing::warn!("ethanol has no tabulated data, using the gasoline profile");
                &GASOLINE
            }
        }
    }

    /// Whether [`Fuel::profile`] returns data measured for this fuel
    pub fn has_own_profile(&self) -> bool {
        !matches!(self, Fuel::Ethanol)
    }
}

impl FromStr for Fuel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl<'de> Deserialize<'de> for Fuel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        Fuel::from_str_flexible(&identifier).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Fuel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Mixture ratio → flame temperature (°R)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlameTemperatureSample {
    pub mixture_ratio: f64,
    pub temperature_r: f64,
}

impl TableSample for FlameTemperatureSample {
    fn x(&self) -> f64 {
        self.mixture_ratio
    }

    fn y(&self) -> f64 {
        self.temperature_r
    }
}

/// Chamber pressure (psi) → specific impulse (s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpulseSample {
    pub chamber_pressure_psi: f64,
    pub isp_s: f64,
}

impl TableSample for ImpulseSample {
    fn x(&self) -> f64 {
        self.chamber_pressure_psi
    }

    fn y(&self) -> f64 {
        self.isp_s
    }
}

/// Empirical data for one fuel burned with gaseous oxygen.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelProfile {
    /// Fuel whose measurements these are
    pub source: Fuel,
    /// Liquid fuel density (lb/ft³)
    pub density_lb_ft3: f64,
    pub flame_temperature: InterpolationTable<FlameTemperatureSample>,
    pub specific_impulse: InterpolationTable<ImpulseSample>,
}

impl FuelProfile {
    /// Flame temperature (°R) at the given mixture ratio
    pub fn flame_temperature_r(&self, mixture_ratio: f64) -> f64 {
        self.flame_temperature.interpolate(mixture_ratio)
    }

    /// Specific impulse (s) at the given chamber pressure
    pub fn specific_impulse_s(&self, chamber_pressure_psi: f64) -> f64 {
        self.specific_impulse.interpolate(chamber_pressure_psi)
    }
}

/// Mixture ratio → flame temperature (°F)
const ALCOHOL_FLAME_F: [(f64, f64); 4] = [
    (1.0, 5000.0),
    (1.2, 5220.0),
    (1.5, 5250.0),
    (2.0, 5000.0),
];

/// Chamber pressure (psi) → specific impulse (s)
const ALCOHOL_ISP: [(f64, f64); 5] = [
    (100.0, 205.0),
    (200.0, 230.0),
    (300.0, 248.0),
    (400.0, 258.0),
    (500.0, 265.0),
];

const GASOLINE_FLAME_F: [(f64, f64); 4] = [
    (1.5, 4500.0),
    (2.0, 5500.0),
    (2.5, 5742.0),
    (3.0, 5500.0),
];

const GASOLINE_ISP: [(f64, f64); 5] = [
    (100.0, 220.0),
    (200.0, 244.0),
    (300.0, 260.0),
    (400.0, 270.0),
    (500.0, 279.0),
];

fn flame_table(name: &'static str, data: &[(f64, f64)]) -> InterpolationTable<FlameTemperatureSample> {
    let samples = data
        .iter()
        .map(|&(mixture_ratio, temperature_f)| FlameTemperatureSample {
            mixture_ratio,
            temperature_r: temperature_f + FAHRENHEIT_TO_RANKINE,
        })
        .collect();
    InterpolationTable::from_sorted(name, samples)
}

fn impulse_table(name: &'static str, data: &[(f64, f64)]) -> InterpolationTable<ImpulseSample> {
    let samples = data
        .iter()
        .map(|&(chamber_pressure_psi, isp_s)| ImpulseSample {
            chamber_pressure_psi,
            isp_s,
        })
        .collect();
    InterpolationTable::from_sorted(name, samples)
}

static ALCOHOL: Lazy<FuelProfile> = Lazy::new(|| FuelProfile {
    source: Fuel::Alcohol,
    density_lb_ft3: 48.0,
    flame_temperature: flame_table("alcohol_flame_temperature", &ALCOHOL_FLAME_F),
    specific_impulse: impulse_table("alcohol_specific_impulse", &ALCOHOL_ISP),
});

static GASOLINE: Lazy<FuelProfile> = Lazy::new(|| FuelProfile {
    source: Fuel::Gasoline,
    density_lb_ft3: 44.5,
    flame_temperature: flame_table("gasoline_flame_temperature", &GASOLINE_FLAME_F),
    specific_impulse: impulse_table("gasoline_specific_impulse", &GASOLINE_ISP),
});
