//! # Nozzle Throat & Exit
//!
//! Fixed isentropic ratios give the throat state; the throat area follows
//! from the choked mass flow relation, worked in ft/lb/s/°R:
//!
//! ```text
//! Tt = 0.909 Tc            Pt = 0.564 Pc
//! At = (w / Pt) * sqrt(R Tt / (γ g))       (Pt in lb/ft²)
//! Ae = At * (Ae/At)(Pc)
//! ```
//!
//! Axisymmetric geometry only: diameters assume circular sections.

use serde::Serialize;

use super::combustion::Combustion;
use crate::assumptions::DesignAssumptions;
use crate::interpolation::ClampLog;
use crate::propellants::area_ratio_table;
use crate::units::{circle_diameter, Feet, Psf, Psi, Rankine, SqFt};

/// Nozzle stage outputs (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nozzle {
    pub throat_temperature: Rankine,
    pub throat_pressure: Psi,
    pub throat_area: SqFt,
    pub throat_diameter: Feet,
    /// Interpolated Ae/At
    pub area_ratio: f64,
    pub exit_area: SqFt,
    pub exit_diameter: Feet,
}

/// Run the nozzle stage.
pub fn calculate(
    combustion: &Combustion,
    chamber_pressure: Psi,
    basis: &DesignAssumptions,
    log: &mut ClampLog,
) -> Nozzle {
    let throat_temperature = combustion.chamber_temperature * basis.throat_temperature_ratio;
    let throat_pressure = chamber_pressure * basis.throat_pressure_ratio;
    let throat_pressure_psf: Psf = throat_pressure.into();

    let throat_area = SqFt(
        (combustion.total_flow.0 / throat_pressure_psf.0)
            * (basis.gas_constant_ft_lbf_lb_r * throat_temperature.0 / (basis.gamma * basis.gravity_ft_s2)).sqrt(),
    );
    let throat_diameter = Feet(circle_diameter(throat_area.0));

    let area_ratio = log.note(area_ratio_table().lookup(chamber_pressure.0));
    let exit_area = throat_area * area_ratio;
    let exit_diameter = Feet(circle_diameter(exit_area.0));

    Nozzle {
        throat_temperature,
        throat_pressure,
        throat_area,
        throat_diameter,
        area_ratio,
        exit_area,
        exit_diameter,
    }
}
