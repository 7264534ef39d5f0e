//! Nozzle exit/throat area ratio (Ae/At) vs chamber pressure.
//!
//! Optimum expansion to sea-level ambient for γ ≈ 1.2 combustion products.
//! Independent of fuel choice.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::interpolation::{InterpolationTable, TableSample};

/// Chamber pressure (psi) → Ae/At
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaRatioSample {
    pub chamber_pressure_psi: f64,
    pub area_ratio: f64,
}

impl TableSample for AreaRatioSample {
    fn x(&self) -> f64 {
        self.chamber_pressure_psi
    }

    fn y(&self) -> f64 {
        self.area_ratio
    }
}

const fn sample(chamber_pressure_psi: f64, area_ratio: f64) -> AreaRatioSample {
    AreaRatioSample {
        chamber_pressure_psi,
        area_ratio,
    }
}

const AREA_RATIO_DATA: [AreaRatioSample; 5] = [
    sample(100.0, 1.79),
    sample(200.0, 2.74),
    sample(300.0, 3.65),
    sample(400.0, 4.6),
    sample(500.0, 5.28),
];

static AREA_RATIO: Lazy<InterpolationTable<AreaRatioSample>> =
    Lazy::new(|| InterpolationTable::from_sorted("area_ratio", AREA_RATIO_DATA.to_vec()));

/// The shared area-ratio table.
pub fn area_ratio_table() -> &'static InterpolationTable<AreaRatioSample> {
    &AREA_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_valid() {
        assert!(InterpolationTable::new("area_ratio", AREA_RATIO_DATA.to_vec()).is_ok());
    }

    #[test]
    fn test_lookups() {
        let t = area_ratio_table();
        assert_eq!(t.interpolate(100.0), 1.79);
        assert_eq!(t.interpolate(500.0), 5.28);
        assert!((t.interpolate(350.0) - 4.125).abs() < 1e-12);
        assert_eq!(t.interpolate(1000.0), 5.28);
    }
}
