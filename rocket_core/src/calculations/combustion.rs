//! # Combustion & Flow
//!
//! Flame temperature and specific impulse from the fuel's empirical curves,
//! then the propellant mass flows needed for the requested thrust:
//!
//! ```text
//! w   = F / Isp
//! w_f = w / (MR + 1)
//! w_o = w - w_f
//! ```

use serde::Serialize;

use crate::interpolation::ClampLog;
use crate::propellants::FuelProfile;
use crate::units::{LbPerSec, PoundsForce, Psi, Rankine, Seconds};

/// Combustion stage outputs (imperial).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Combustion {
    /// Chamber (flame) temperature
    pub chamber_temperature: Rankine,
    pub specific_impulse: Seconds,
    pub total_flow: LbPerSec,
    pub fuel_flow: LbPerSec,
    pub oxidizer_flow: LbPerSec,
}

/// Run the combustion stage.
///
/// Requires `mixture_ratio > -1`; the request is validated before this runs.
pub fn calculate(
    profile: &FuelProfile,
    thrust: PoundsForce,
    chamber_pressure: Psi,
    mixture_ratio: f64,
    log: &mut ClampLog,
) -> Combustion {
    let chamber_temperature = Rankine(log.note(profile.flame_temperature.lookup(mixture_ratio)));
    let specific_impulse = Seconds(log.note(profile.specific_impulse.lookup(chamber_pressure.0)));

    let total_flow = LbPerSec(thrust.0 / specific_impulse.0);
    let fuel_flow = total_flow / (mixture_ratio + 1.0);
    let oxidizer_flow = total_flow - fuel_flow;

    Combustion {
        chamber_temperature,
        specific_impulse,
        total_flow,
        fuel_flow,
        oxidizer_flow,
    }
}
