//! # Design Assumptions
//!
//! Every fixed constant the sizing pipeline relies on, gathered in one
//! serializable settings struct. [`DesignAssumptions::default`] reproduces the
//! reference design basis; callers may load an override from JSON.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::assumptions::DesignAssumptions;
//!
//! let basis: DesignAssumptions =
//!     serde_json::from_str(r#"{ "wall_safety_factor": 4.0 }"#).unwrap();
//! assert_eq!(basis.wall_safety_factor, 4.0);
//! assert_eq!(basis.gamma, 1.2); // unspecified fields keep their defaults
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Fixed design basis for one sizing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignAssumptions {
    /// Combustion gas constant R (ft·lbf / (lb·°R))
    pub gas_constant_ft_lbf_lb_r: f64,

    /// Gravitational constant g (ft/s²)
    pub gravity_ft_s2: f64,

    /// Ratio of specific heats γ of the combustion products
    pub gamma: f64,

    /// Throat/chamber static temperature ratio for γ = 1.2
    pub throat_temperature_ratio: f64,

    /// Throat/chamber static pressure ratio for γ = 1.2
    pub throat_pressure_ratio: f64,

    /// Chamber volume factor covering the convergent section and
    /// scaling the cooled area
    pub chamber_volume_factor: f64,

    /// Allowable hoop stress of the chamber wall material (psi, copper)
    pub wall_allowable_stress_psi: f64,

    /// Factor of safety applied to the hoop-stress wall thickness
    pub wall_safety_factor: f64,

    /// Heat flux into the coolant (BTU / (in²·s))
    pub heat_flux_btu_in2_s: f64,

    /// Allowed coolant temperature rise through the jacket (°R)
    pub coolant_temperature_rise_r: f64,

    /// Coolant (water) density (lb/ft³)
    pub coolant_density_lb_ft3: f64,

    /// Oxidizer (gaseous oxygen) density at injection (lb/ft³)
    pub oxidizer_density_lb_ft3: f64,

    /// Fuel injector discharge coefficient
    pub fuel_injector_cd: f64,

    /// Fuel injector pressure drop (psi)
    pub fuel_injector_delta_p_psi: f64,

    /// Oxidizer injector discharge coefficient
    pub oxidizer_injector_cd: f64,

    /// Oxidizer injector pressure drop (psi)
    pub oxidizer_injector_delta_p_psi: f64,

    /// Convergent cone half-angle (degrees)
    pub convergent_half_angle_deg: f64,

    /// Divergent cone half-angle (degrees)
    pub divergent_half_angle_deg: f64,
}

impl Default for DesignAssumptions {
    fn default() -> Self {
        DesignAssumptions {
            gas_constant_ft_lbf_lb_r: 65.0,
            gravity_ft_s2: 32.2,
            gamma: 1.2,
            throat_temperature_ratio: 0.909,
            throat_pressure_ratio: 0.564,
            chamber_volume_factor: 1.1,
            wall_allowable_stress_psi: 16_000.0,
            wall_safety_factor: 3.0,
            heat_flux_btu_in2_s: 3.0,
            coolant_temperature_rise_r: 40.0,
            coolant_density_lb_ft3: 62.4,
            oxidizer_density_lb_ft3: 2.26,
            fuel_injector_cd: 0.7,
            fuel_injector_delta_p_psi: 100.0,
            oxidizer_injector_cd: 0.7,
            oxidizer_injector_delta_p_psi: 100.0,
            convergent_half_angle_deg: 30.0,
            divergent_half_angle_deg: 15.0,
        }
    }
}

impl DesignAssumptions {
    /// Validate that every constant is finite and physically meaningful.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("gas_constant_ft_lbf_lb_r", self.gas_constant_ft_lbf_lb_r),
            ("gravity_ft_s2", self.gravity_ft_s2),
            ("gamma", self.gamma),
            ("throat_temperature_ratio", self.throat_temperature_ratio),
            ("throat_pressure_ratio", self.throat_pressure_ratio),
            ("chamber_volume_factor", self.chamber_volume_factor),
            ("wall_allowable_stress_psi", self.wall_allowable_stress_psi),
            ("wall_safety_factor", self.wall_safety_factor),
            ("heat_flux_btu_in2_s", self.heat_flux_btu_in2_s),
            ("coolant_temperature_rise_r", self.coolant_temperature_rise_r),
            ("coolant_density_lb_ft3", self.coolant_density_lb_ft3),
            ("oxidizer_density_lb_ft3", self.oxidizer_density_lb_ft3),
            ("fuel_injector_cd", self.fuel_injector_cd),
            ("fuel_injector_delta_p_psi", self.fuel_injector_delta_p_psi),
            ("oxidizer_injector_cd", self.oxidizer_injector_cd),
            ("oxidizer_injector_delta_p_psi", self.oxidizer_injector_delta_p_psi),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Design constant must be positive and finite",
                ));
            }
        }

        let angles = [
            ("convergent_half_angle_deg", self.convergent_half_angle_deg),
            ("divergent_half_angle_deg", self.divergent_half_angle_deg),
        ];
        for (field, value) in angles {
            if !value.is_finite() || value <= 0.0 || value >= 90.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Cone half-angle must be between 0 and 90 degrees",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DesignAssumptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_discharge_coefficient() {
        let basis = DesignAssumptions {
            fuel_injector_cd: 0.0,
            ..DesignAssumptions::default()
        };
        let err = basis.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "fuel_injector_cd"));
    }

    #[test]
    fn test_rejects_flat_cone() {
        let basis = DesignAssumptions {
            divergent_half_angle_deg: 90.0,
            ..DesignAssumptions::default()
        };
        assert!(basis.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let basis: DesignAssumptions =
            serde_json::from_str(r#"{ "coolant_temperature_rise_r": 60.0 }"#).unwrap();
        assert_eq!(basis.coolant_temperature_rise_r, 60.0);
        assert_eq!(basis.wall_allowable_stress_psi, 16_000.0);
    }

    #[test]
    fn test_serialization() {
        let basis = DesignAssumptions::default();
        let json = serde_json::to_string_pretty(&basis).unwrap();
        let roundtrip: DesignAssumptions = serde_json::from_str(&json).unwrap();
        assert_eq!(basis, roundtrip);
    }
}
