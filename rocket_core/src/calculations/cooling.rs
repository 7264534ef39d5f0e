//! # Regenerative Cooling Jacket
//!
//! Coolant flow from an assumed heat flux over the chamber + wall surface,
//! then the jacket's outer diameter from continuity:
//!
//! ```text
//! A_ht = 1.1 π (Dc + 2t) Lc
//! Q    = q'' A_ht
//! w_c  = Q / ΔT
//! w_c  = V ρ (π/4)(Do² - Di²)   →   Do = sqrt(4 w_c / (V ρ π) + Di²)
//! gap  = (Do - Di) / 2
//! ```

use std::f64::consts::PI;

use serde::Serialize;

use super::chamber::Chamber;
use super::wall::Wall;
use crate::assumptions::DesignAssumptions;
use crate::units::{BtuPerSec, Feet, Inches, LbPerSec, SqFt, SqIn};

/// Cooling stage outputs (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cooling {
    pub heat_transfer_area: SqFt,
    pub total_heat: BtuPerSec,
    pub coolant_flow: LbPerSec,
    /// Jacket inner diameter (chamber outer surface)
    pub inner_diameter: Inches,
    pub outer_diameter: Inches,
    /// Radial coolant passage height
    pub gap: Inches,
}

/// Run the cooling stage.
pub fn calculate(
    chamber: &Chamber,
    wall: &Wall,
    coolant_velocity_ft_s: f64,
    basis: &DesignAssumptions,
) -> Cooling {
    let wall_ft: Feet = wall.thickness.into();
    let heat_transfer_area = SqFt(
        basis.chamber_volume_factor * PI * (chamber.diameter.0 + 2.0 * wall_ft.0) * chamber.length.0,
    );
    let heat_transfer_area_in2: SqIn = heat_transfer_area.into();
    let total_heat = BtuPerSec(basis.heat_flux_btu_in2_s * heat_transfer_area_in2.0);
    let coolant_flow = LbPerSec(total_heat.0 / basis.coolant_temperature_rise_r);

    let chamber_in: Inches = chamber.diameter.into();
    let inner_diameter = chamber_in + wall.thickness * 2.0;
    let inner_ft: Feet = inner_diameter.into();
    let outer_ft = Feet(
        (4.0 * coolant_flow.0 / (coolant_velocity_ft_s * basis.coolant_density_lb_ft3 * PI) + inner_ft.0.powi(2))
            .sqrt(),
    );
    let outer_diameter: Inches = outer_ft.into();
    let gap = (outer_diameter - inner_diameter) / 2.0;

    Cooling {
        heat_transfer_area,
        total_heat,
        coolant_flow,
        inner_diameter,
        outer_diameter,
        gap,
    }
}
