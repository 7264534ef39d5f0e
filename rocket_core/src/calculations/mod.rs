//! # Engine Sizing Pipeline
//!
//! A strictly forward chain of stages, each a pure function of the request,
//! the design basis and the outputs of earlier stages:
//!
//! 1. [`combustion`] - flame temperature, specific impulse, propellant flows
//! 2. [`nozzle`] - throat state, throat and exit areas
//! 3. [`chamber`] - chamber volume, diameter, area and length
//! 4. [`wall`] - hoop-stress wall thickness
//! 5. [`cooling`] - heat load, coolant flow, jacket annulus
//! 6. [`injector`] - fuel and oxidizer orifice sizing
//! 7. [`conversion`] - SI conversion and nozzle cone lengths
//!
//! Stages compute in US customary units; only [`DesignResult`] is SI.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::calculations::{calculate, DesignRequest};
//!
//! let result = calculate(&DesignRequest::default()).unwrap();
//! assert!((result.total_propellant_flow.0 - 0.3252).abs() < 1e-3);
//! assert_eq!(result.quantities().len(), 30);
//! ```

pub mod chamber;
pub mod combustion;
pub mod conversion;
pub mod cooling;
pub mod injector;
pub mod nozzle;
pub mod request;
pub mod result;
pub mod wall;

use serde::Serialize;

use crate::assumptions::DesignAssumptions;
use crate::errors::CalcResult;
use crate::interpolation::{Clamp, ClampLog};
use crate::units::{Inches, PoundsForce, Psi};

pub use conversion::ConeLengths;
pub use request::DesignRequest;
pub use result::{DesignResult, Quantity, QUANTITY_COUNT};

/// A design together with every table lookup that had to clamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub result: DesignResult,
    /// Empty when every lookup fell inside its tabulated range
    pub clamps: Vec<Clamp>,
}

impl Evaluation {
    /// True when no lookup left its table's domain
    pub fn is_within_tables(&self) -> bool {
        self.clamps.is_empty()
    }
}

/// Size an engine using the default design basis.
pub fn calculate(request: &DesignRequest) -> CalcResult<DesignResult> {
    calculate_with(request, &DesignAssumptions::default())
}

/// Size an engine against an explicit design basis.
pub fn calculate_with(request: &DesignRequest, basis: &DesignAssumptions) -> CalcResult<DesignResult> {
    evaluate_with(request, basis).map(|evaluation| evaluation.result)
}

/// Like [`calculate`], also returning the clamped lookups.
pub fn evaluate(request: &DesignRequest) -> CalcResult<Evaluation> {
    evaluate_with(request, &DesignAssumptions::default())
}

/// Run every stage in order. Inputs are validated up front, so a
/// returned result is always complete.
pub fn evaluate_with(request: &DesignRequest, basis: &DesignAssumptions) -> CalcResult<Evaluation> {
    request.validate()?;
    basis.validate()?;

    let profile = request.fuel.profile();
    let chamber_pressure = Psi(request.chamber_pressure_psi);
    let mut log = ClampLog::default();

    let combustion = combustion::calculate(
        profile,
        PoundsForce(request.thrust_lbf),
        chamber_pressure,
        request.mixture_ratio,
        &mut log,
    );
    tracing::debug!(
        chamber_temperature_r = combustion.chamber_temperature.0,
        isp_s = combustion.specific_impulse.0,
        total_flow_lb_s = combustion.total_flow.0,
        "combustion"
    );

    let nozzle = nozzle::calculate(&combustion, chamber_pressure, basis, &mut log);
    tracing::debug!(
        throat_area_ft2 = nozzle.throat_area.0,
        area_ratio = nozzle.area_ratio,
        exit_area_ft2 = nozzle.exit_area.0,
        "nozzle"
    );

    let chamber = chamber::calculate(
        &nozzle,
        Inches(request.characteristic_length_in),
        request.contraction_ratio,
        basis,
    );
    tracing::debug!(
        volume_ft3 = chamber.volume.0,
        diameter_ft = chamber.diameter.0,
        length_ft = chamber.length.0,
        "chamber"
    );

    let wall = wall::calculate(chamber_pressure, &chamber, basis);
    tracing::debug!(thickness_in = wall.thickness.0, "wall");

    let cooling = cooling::calculate(&chamber, &wall, request.coolant_velocity_ft_s, basis);
    tracing::debug!(
        total_heat_btu_s = cooling.total_heat.0,
        coolant_flow_lb_s = cooling.coolant_flow.0,
        gap_in = cooling.gap.0,
        "cooling"
    );

    let injector = injector::calculate(
        combustion.fuel_flow,
        combustion.oxidizer_flow,
        profile.density_lb_ft3,
        request.fuel_holes,
        request.oxidizer_holes,
        basis,
    );
    tracing::debug!(
        fuel_hole_diameter_ft = injector.fuel.hole_diameter.0,
        oxidizer_hole_diameter_ft = injector.oxidizer.hole_diameter.0,
        "injector"
    );

    let result = conversion::calculate(&combustion, &nozzle, &chamber, &wall, &cooling, &injector, basis);

    Ok(Evaluation {
        result,
        clamps: log.into_clamps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::interpolation::ClampSide;
    use crate::propellants::Fuel;

    fn close(actual: f64, expected: f64, rel: f64) -> bool {
        ((actual - expected) / expected).abs() < rel
    }

    #[test]
    fn test_reference_gasoline_design() {
        let r = calculate(&DesignRequest::default()).unwrap();
        assert!(close(r.total_propellant_flow.0, 0.325156, 1e-5));
        assert!(close(r.fuel_flow.0, 0.0929017, 1e-5));
        assert!(close(r.oxidizer_flow.0, 0.232254, 1e-5));
        assert!(close(r.chamber_temperature.0, 3445.556, 1e-5));
        assert!(close(r.throat_temperature.0, 3132.01, 1e-5));
        assert!(close(r.throat_diameter.0, 14.2600, 1e-4));
        assert!(close(r.exit_diameter.0, 32.767, 1e-4));
        assert!(close(r.chamber_diameter.0, 42.780, 1e-4));
        assert!(close(r.chamber_length.0, 153.939, 1e-4));
        assert!(close(r.wall_thickness.0, 4.0106, 1e-4));
        assert!(close(r.coolant_flow.0, 1.42504, 1e-3));
        assert!(close(r.coolant_gap.0, 0.95883, 1e-3));
        assert!(close(r.fuel_hole_diameter.0, 0.67005, 1e-3));
        assert!(close(r.oxidizer_hole_diameter.0, 2.23172, 1e-3));
        assert!(close(r.convergent_length.0, 24.699, 1e-3));
        assert!(close(r.divergent_length.0, 34.535, 1e-3));
        assert_eq!(r.specific_impulse.0, 279.0);
    }

    #[test]
    fn test_reference_design_has_no_clamps() {
        let evaluation = evaluate(&DesignRequest::default()).unwrap();
        assert!(evaluation.is_within_tables());
    }

    #[test]
    fn test_low_pressure_reports_clamp() {
        let request = DesignRequest {
            chamber_pressure_psi: 50.0,
            ..DesignRequest::default()
        };
        let evaluation = evaluate(&request).unwrap();
        assert_eq!(evaluation.result.specific_impulse.0, 220.0);
        // specific impulse and area ratio both clamp
        assert_eq!(evaluation.clamps.len(), 2);
        assert!(evaluation.clamps.iter().all(|c| c.side == ClampSide::Below));
    }

    #[test]
    fn test_invalid_request_is_rejected_before_stages() {
        let request = DesignRequest {
            oxidizer_holes: 0,
            ..DesignRequest::default()
        };
        assert!(matches!(calculate(&request), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_invalid_basis_is_rejected() {
        let basis = DesignAssumptions {
            gamma: -1.2,
            ..DesignAssumptions::default()
        };
        assert!(calculate_with(&DesignRequest::default(), &basis).is_err());
    }

    #[test]
    fn test_alcohol_design() {
        let r = calculate(&DesignRequest::for_fuel(Fuel::Alcohol)).unwrap();
        assert_eq!(r.specific_impulse.0, 265.0);
        // 5680 °R
        assert!(close(r.chamber_temperature.0, (5680.0 - 491.67) * 5.0 / 9.0 + 273.15, 1e-12));
    }

    #[test]
    fn test_stricter_safety_factor_thickens_wall() {
        let request = DesignRequest::default();
        let base = calculate(&request).unwrap();
        let basis = DesignAssumptions {
            wall_safety_factor: 6.0,
            ..DesignAssumptions::default()
        };
        let thick = calculate_with(&request, &basis).unwrap();
        assert!(close(thick.wall_thickness.0, 2.0 * base.wall_thickness.0, 1e-12));
    }
}
