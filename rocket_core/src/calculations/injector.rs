//! # Injector Orifices
//!
//! Incompressible orifice discharge, solved for area, per propellant:
//!
//! ```text
//! w = Cd A sqrt(2 g ρ ΔP)      (ΔP in lb/ft²)
//! ```
//!
//! The total area is split evenly over the holes, each assumed circular.

use serde::Serialize;

use crate::assumptions::DesignAssumptions;
use crate::units::{circle_diameter, Feet, LbPerSec, Psf, Psi, SqFt};

/// Orifice sizing for one propellant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Orifices {
    pub total_area: SqFt,
    pub hole_area: SqFt,
    pub hole_diameter: Feet,
}

/// Injector stage outputs (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Injector {
    pub fuel: Orifices,
    pub oxidizer: Orifices,
}

/// Size one propellant's orifices. `holes` must be at least 1.
pub fn size_orifices(
    flow: LbPerSec,
    density_lb_ft3: f64,
    discharge_coefficient: f64,
    pressure_drop: Psi,
    holes: u32,
    gravity_ft_s2: f64,
) -> Orifices {
    let pressure_drop: Psf = pressure_drop.into();
    let total_area = SqFt(
        flow.0 / (discharge_coefficient * (2.0 * gravity_ft_s2 * density_lb_ft3 * pressure_drop.0).sqrt()),
    );
    let hole_area = total_area / f64::from(holes);
    Orifices {
        total_area,
        hole_area,
        hole_diameter: Feet(circle_diameter(hole_area.0)),
    }
}

/// Run the injector stage.
pub fn calculate(
    fuel_flow: LbPerSec,
    oxidizer_flow: LbPerSec,
    fuel_density_lb_ft3: f64,
    fuel_holes: u32,
    oxidizer_holes: u32,
    basis: &DesignAssumptions,
) -> Injector {
    Injector {
        fuel: size_orifices(
            fuel_flow,
            fuel_density_lb_ft3,
            basis.fuel_injector_cd,
            Psi(basis.fuel_injector_delta_p_psi),
            fuel_holes,
            basis.gravity_ft_s2,
        ),
        oxidizer: size_orifices(
            oxidizer_flow,
            basis.oxidizer_density_lb_ft3,
            basis.oxidizer_injector_cd,
            Psi(basis.oxidizer_injector_delta_p_psi),
            oxidizer_holes,
            basis.gravity_ft_s2,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discharge_relation_holds() {
        let o = size_orifices(LbPerSec(0.2), 44.5, 0.7, Psi(100.0), 1, 32.2);
        let flow = 0.7 * o.total_area.0 * (2.0 * 32.2 * 44.5 * 100.0 * 144.0_f64).sqrt();
        assert!((flow - 0.2).abs() < 1e-12);
        assert_eq!(o.hole_area, o.total_area);
    }

    #[test]
    fn test_area_splits_over_holes() {
        let one = size_orifices(LbPerSec(0.2), 44.5, 0.7, Psi(100.0), 1, 32.2);
        let twelve = size_orifices(LbPerSec(0.2), 44.5, 0.7, Psi(100.0), 12, 32.2);
        assert_eq!(one.total_area, twelve.total_area);
        assert!((twelve.hole_area.0 * 12.0 - one.total_area.0).abs() < 1e-15);
        // d scales with 1/sqrt(n)
        assert!((one.hole_diameter.0 / twelve.hole_diameter.0 - 12.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_oxidizer_uses_gas_density() {
        let basis = DesignAssumptions::default();
        let inj = calculate(LbPerSec(0.1), LbPerSec(0.1), 44.5, 12, 12, &basis);
        // Same flow through a far less dense propellant needs more area
        let ratio = inj.oxidizer.total_area.0 / inj.fuel.total_area.0;
        assert!((ratio - (44.5_f64 / 2.26).sqrt()).abs() < 1e-9);
    }
}
