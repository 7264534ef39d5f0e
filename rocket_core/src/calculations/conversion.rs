//! # SI Conversion & Nozzle Cone Lengths
//!
//! Converts every imperial stage output to its SI counterpart and derives the
//! conical convergent/divergent lengths used by geometry construction:
//!
//! ```text
//! L_conv = (Rc - Rt) / tan(θ_conv)     θ_conv = 30°
//! L_div  = (Re - Rt) / tan(θ_div)      θ_div  = 15°
//! ```

use serde::{Deserialize, Serialize};

use super::chamber::Chamber;
use super::combustion::Combustion;
use super::cooling::Cooling;
use super::injector::Injector;
use super::nozzle::Nozzle;
use super::result::DesignResult;
use super::wall::Wall;
use crate::assumptions::DesignAssumptions;
use crate::units::Millimeters;

/// Axial lengths of the two nozzle cones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeLengths {
    pub convergent: Millimeters,
    pub divergent: Millimeters,
}

/// Cone lengths from the three section diameters and the basis half-angles.
pub fn cone_lengths(
    chamber_diameter: Millimeters,
    throat_diameter: Millimeters,
    exit_diameter: Millimeters,
    basis: &DesignAssumptions,
) -> ConeLengths {
    let throat_radius = throat_diameter / 2.0;
    let convergent_drop = chamber_diameter / 2.0 - throat_radius;
    let divergent_rise = exit_diameter / 2.0 - throat_radius;

    ConeLengths {
        convergent: convergent_drop / basis.convergent_half_angle_deg.to_radians().tan(),
        divergent: divergent_rise / basis.divergent_half_angle_deg.to_radians().tan(),
    }
}

/// Assemble the SI result from the imperial stage outputs.
pub fn calculate(
    combustion: &Combustion,
    nozzle: &Nozzle,
    chamber: &Chamber,
    wall: &Wall,
    cooling: &Cooling,
    injector: &Injector,
    basis: &DesignAssumptions,
) -> DesignResult {
    let chamber_diameter: Millimeters = chamber.diameter.into();
    let throat_diameter: Millimeters = nozzle.throat_diameter.into();
    let exit_diameter: Millimeters = nozzle.exit_diameter.into();
    let cones = cone_lengths(chamber_diameter, throat_diameter, exit_diameter, basis);

    DesignResult {
        total_propellant_flow: combustion.total_flow.into(),
        fuel_flow: combustion.fuel_flow.into(),
        oxidizer_flow: combustion.oxidizer_flow.into(),
        chamber_temperature: combustion.chamber_temperature.into(),
        throat_temperature: nozzle.throat_temperature.into(),
        throat_pressure: nozzle.throat_pressure.into(),
        throat_area: nozzle.throat_area.into(),
        throat_diameter,
        exit_area: nozzle.exit_area.into(),
        exit_diameter,
        chamber_volume: chamber.volume.into(),
        chamber_diameter,
        chamber_area: chamber.area.into(),
        chamber_length: chamber.length.into(),
        wall_thickness: wall.thickness.into(),
        heat_transfer_area: cooling.heat_transfer_area.into(),
        total_heat_transfer: cooling.total_heat.into(),
        coolant_flow: cooling.coolant_flow.into(),
        coolant_inner_diameter: cooling.inner_diameter.into(),
        coolant_outer_diameter: cooling.outer_diameter.into(),
        coolant_gap: cooling.gap.into(),
        fuel_injector_area: injector.fuel.total_area.into(),
        fuel_hole_area: injector.fuel.hole_area.into(),
        fuel_hole_diameter: injector.fuel.hole_diameter.into(),
        oxidizer_injector_area: injector.oxidizer.total_area.into(),
        oxidizer_hole_area: injector.oxidizer.hole_area.into(),
        oxidizer_hole_diameter: injector.oxidizer.hole_diameter.into(),
        specific_impulse: combustion.specific_impulse,
        convergent_length: cones.convergent,
        divergent_length: cones.divergent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_lengths() {
        let basis = DesignAssumptions::default();
        let cones = cone_lengths(Millimeters(40.0), Millimeters(10.0), Millimeters(30.0), &basis);
        // (20 - 5) / tan 30°
        assert!((cones.convergent.0 - 15.0 / (30.0_f64).to_radians().tan()).abs() < 1e-12);
        assert!((cones.convergent.0 - 25.980762).abs() < 1e-6);
        // (15 - 5) / tan 15°
        assert!((cones.divergent.0 - 37.320508).abs() < 1e-6);
    }

    #[test]
    fn test_steeper_cone_is_shorter() {
        let steep = DesignAssumptions {
            convergent_half_angle_deg: 45.0,
            ..DesignAssumptions::default()
        };
        let cones = cone_lengths(Millimeters(40.0), Millimeters(10.0), Millimeters(30.0), &steep);
        assert!((cones.convergent.0 - 15.0).abs() < 1e-9);
    }
}
