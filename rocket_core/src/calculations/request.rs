//! Design request: the top-level engine requirements.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::propellants::Fuel;

/// Top-level requirements for one engine design.
///
/// Inputs use US customary units, matching the empirical tables.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fuel": "gasoline",
///   "thrust_lbf": 200.0,
///   "chamber_pressure_psi": 500.0,
///   "mixture_ratio": 2.5,
///   "characteristic_length_in": 60.0,
///   "coolant_velocity_ft_s": 30.0,
///   "fuel_holes": 12,
///   "oxidizer_holes": 12,
///   "contraction_ratio": 3.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Fuel burned with gaseous oxygen
    pub fuel: Fuel,

    /// Sea-level thrust (lbf)
    pub thrust_lbf: f64,

    /// Chamber stagnation pressure (psi)
    pub chamber_pressure_psi: f64,

    /// Oxidizer-to-fuel mass flow ratio
    pub mixture_ratio: f64,

    /// Characteristic length L* = Vc / At (inches)
    pub characteristic_length_in: f64,

    /// Target coolant velocity in the jacket (ft/s)
    pub coolant_velocity_ft_s: f64,

    /// Number of fuel injector orifices
    pub fuel_holes: u32,

    /// Number of oxidizer injector orifices
    pub oxidizer_holes: u32,

    /// Chamber to throat diameter ratio Dc/Dt
    pub contraction_ratio: f64,
}

impl Default for DesignRequest {
    fn default() -> Self {
        DesignRequest::for_fuel(Fuel::Gasoline)
    }
}

impl DesignRequest {
    /// Reference requirements for a fuel: 200 lbf at 500 psi, L* 60 in,
    /// Dc/Dt 3, 30 ft/s coolant, 12 + 12 orifices, fuel's usual mixture ratio.
    pub fn for_fuel(fuel: Fuel) -> Self {
        DesignRequest {
            fuel,
            thrust_lbf: 200.0,
            chamber_pressure_psi: 500.0,
            mixture_ratio: fuel.default_mixture_ratio(),
            characteristic_length_in: 60.0,
            coolant_velocity_ft_s: 30.0,
            fuel_holes: 12,
            oxidizer_holes: 12,
            contraction_ratio: 3.0,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let finite = [
            ("thrust_lbf", self.thrust_lbf),
            ("chamber_pressure_psi", self.chamber_pressure_psi),
            ("mixture_ratio", self.mixture_ratio),
            ("characteristic_length_in", self.characteristic_length_in),
            ("coolant_velocity_ft_s", self.coolant_velocity_ft_s),
            ("contraction_ratio", self.contraction_ratio),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
            }
        }

        if self.thrust_lbf <= 0.0 {
            return Err(CalcError::invalid_input(
                "thrust_lbf",
                self.thrust_lbf.to_string(),
                "Thrust must be positive",
            ));
        }
        if self.chamber_pressure_psi <= 0.0 {
            return Err(CalcError::invalid_input(
                "chamber_pressure_psi",
                self.chamber_pressure_psi.to_string(),
                "Chamber pressure must be positive",
            ));
        }
        if self.mixture_ratio <= -1.0 {
            return Err(CalcError::invalid_input(
                "mixture_ratio",
                self.mixture_ratio.to_string(),
                "Mixture ratio must be greater than -1",
            ));
        }
        if self.characteristic_length_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "characteristic_length_in",
                self.characteristic_length_in.to_string(),
                "Characteristic length must be positive",
            ));
        }
        if self.coolant_velocity_ft_s <= 0.0 {
            return Err(CalcError::invalid_input(
                "coolant_velocity_ft_s",
                self.coolant_velocity_ft_s.to_string(),
                "Coolant velocity must be positive",
            ));
        }
        if self.fuel_holes == 0 {
            return Err(CalcError::invalid_input(
                "fuel_holes",
                "0",
                "Injector needs at least one fuel orifice",
            ));
        }
        if self.oxidizer_holes == 0 {
            return Err(CalcError::invalid_input(
                "oxidizer_holes",
                "0",
                "Injector needs at least one oxidizer orifice",
            ));
        }
        if self.contraction_ratio <= 1.0 {
            return Err(CalcError::invalid_input(
                "contraction_ratio",
                self.contraction_ratio.to_string(),
                "Chamber must be wider than the throat (Dc/Dt > 1)",
            ));
        }
        Ok(())
    }

    /// Deterministic file stem built from the inputs,
    /// e.g. `gasoline_200_500_2.5_60_3`.
    pub fn record_stem(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}_{}",
            self.fuel.code(),
            self.thrust_lbf,
            self.chamber_pressure_psi,
            self.mixture_ratio,
            self.characteristic_length_in,
            self.contraction_ratio
        )
    }
}
