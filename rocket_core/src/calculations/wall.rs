//! # Chamber Wall Thickness
//!
//! Thin-wall hoop stress with a fixed factor of safety:
//!
//! ```text
//! t = (Pc Dc / S) * SF
//! ```

use serde::Serialize;

use super::chamber::Chamber;
use crate::assumptions::DesignAssumptions;
use crate::units::{Inches, Psi};

/// Wall stage outputs (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wall {
    pub thickness: Inches,
}

/// Run the wall stage.
pub fn calculate(chamber_pressure: Psi, chamber: &Chamber, basis: &DesignAssumptions) -> Wall {
    let diameter: Inches = chamber.diameter.into();
    let thickness =
        Inches(chamber_pressure.0 * diameter.0 / basis.wall_allowable_stress_psi * basis.wall_safety_factor);
    Wall { thickness }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{CuFt, Feet, SqFt};

    fn chamber(diameter_in: f64) -> Chamber {
        Chamber {
            volume: CuFt(0.01),
            diameter: Inches(diameter_in).into(),
            area: SqFt(0.1),
            length: Feet(0.5),
        }
    }

    #[test]
    fn test_hoop_stress_thickness() {
        // 500 psi * 2 in / 16000 psi * 3 = 0.1875 in
        let w = calculate(Psi(500.0), &chamber(2.0), &DesignAssumptions::default());
        assert!((w.thickness.0 - 0.1875).abs() < 1e-12);
    }

    #[test]
    fn test_safety_factor_is_linear() {
        let basis = DesignAssumptions {
            wall_safety_factor: 6.0,
            ..DesignAssumptions::default()
        };
        let w = calculate(Psi(500.0), &chamber(2.0), &basis);
        assert!((w.thickness.0 - 0.375).abs() < 1e-12);
    }
}
