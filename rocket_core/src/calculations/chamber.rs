//! # Combustion Chamber Geometry
//!
//! ```text
//! Vc = L* At
//! Dc = (Dc/Dt) Dt
//! Lc = Vc / (1.1 Ac)
//! ```
//!
//! The 1.1 factor stands in for the convergent-section volume a plain
//! cylinder does not capture.

use serde::Serialize;

use super::nozzle::Nozzle;
use crate::assumptions::DesignAssumptions;
use crate::units::{circle_area, CuFt, Feet, Inches, SqFt};

/// Chamber stage outputs (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chamber {
    pub volume: CuFt,
    pub diameter: Feet,
    pub area: SqFt,
    pub length: Feet,
}

/// Run the chamber stage.
pub fn calculate(
    nozzle: &Nozzle,
    characteristic_length: Inches,
    contraction_ratio: f64,
    basis: &DesignAssumptions,
) -> Chamber {
    let characteristic_length: Feet = characteristic_length.into();
    let volume = CuFt(characteristic_length.0 * nozzle.throat_area.0);

    let diameter = nozzle.throat_diameter * contraction_ratio;
    let area = SqFt(circle_area(diameter.0));
    let length = Feet(volume.0 / (basis.chamber_volume_factor * area.0));

    Chamber {
        volume,
        diameter,
        area,
        length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{circle_diameter, Psi, Rankine};

    fn nozzle_with_throat(area_ft2: f64) -> Nozzle {
        Nozzle {
            throat_temperature: Rankine(5000.0),
            throat_pressure: Psi(282.0),
            throat_area: SqFt(area_ft2),
            throat_diameter: Feet(circle_diameter(area_ft2)),
            area_ratio: 5.28,
            exit_area: SqFt(area_ft2 * 5.28),
            exit_diameter: Feet(circle_diameter(area_ft2 * 5.28)),
        }
    }

    #[test]
    fn test_volume_from_characteristic_length() {
        let c = calculate(&nozzle_with_throat(0.002), Inches(60.0), 3.0, &DesignAssumptions::default());
        assert!((c.volume.0 - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_length_depends_only_on_l_star_and_contraction() {
        // Lc = L* / (1.1 (Dc/Dt)²), independent of throat size
        let basis = DesignAssumptions::default();
        for area in [0.0005, 0.002, 0.05] {
            let c = calculate(&nozzle_with_throat(area), Inches(60.0), 3.0, &basis);
            assert!((c.length.0 - 5.0 / 9.9).abs() < 1e-12);
        }
    }

    #[test]
    fn test_diameter_scales_with_contraction_ratio() {
        let n = nozzle_with_throat(0.002);
        let c = calculate(&n, Inches(60.0), 4.0, &DesignAssumptions::default());
        assert!((c.diameter.0 / n.throat_diameter.0 - 4.0).abs() < 1e-12);
        assert!((c.area.0 / n.throat_area.0 - 16.0).abs() < 1e-9);
    }
}
