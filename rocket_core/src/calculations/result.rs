//! Design result: the complete SI-dimensioned engine.

use serde::{Deserialize, Serialize};

use crate::units::{
    CubicMeters, KgPerSec, Kelvin, Millimeters, Pascals, Seconds, SqMeters, Watts,
};

/// Number of quantities in every [`DesignResult`]
pub const QUANTITY_COUNT: usize = 30;

/// Fully dimensioned engine design, SI units throughout.
///
/// Every field is always present; [`DesignResult::quantities`] exposes them
/// as a fixed, ordered list of named, unit-tagged values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    // Flows
    pub total_propellant_flow: KgPerSec,
    pub fuel_flow: KgPerSec,
    pub oxidizer_flow: KgPerSec,

    // Gas state
    pub chamber_temperature: Kelvin,
    pub throat_temperature: Kelvin,
    pub throat_pressure: Pascals,

    // Nozzle
    pub throat_area: SqMeters,
    pub throat_diameter: Millimeters,
    pub exit_area: SqMeters,
    pub exit_diameter: Millimeters,

    // Chamber
    pub chamber_volume: CubicMeters,
    pub chamber_diameter: Millimeters,
    pub chamber_area: SqMeters,
    pub chamber_length: Millimeters,
    pub wall_thickness: Millimeters,

    // Cooling jacket
    pub heat_transfer_area: SqMeters,
    pub total_heat_transfer: Watts,
    pub coolant_flow: KgPerSec,
    pub coolant_inner_diameter: Millimeters,
    pub coolant_outer_diameter: Millimeters,
    pub coolant_gap: Millimeters,

    // Injector
    pub fuel_injector_area: SqMeters,
    pub fuel_hole_area: SqMeters,
    pub fuel_hole_diameter: Millimeters,
    pub oxidizer_injector_area: SqMeters,
    pub oxidizer_hole_area: SqMeters,
    pub oxidizer_hole_diameter: Millimeters,

    pub specific_impulse: Seconds,

    // Cone lengths for geometry construction
    pub convergent_length: Millimeters,
    pub divergent_length: Millimeters,
}

/// One named, unit-tagged output value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub name: &'static str,
    pub unit: &'static str,
    pub value: f64,
}

impl Quantity {
    const fn new(name: &'static str, unit: &'static str, value: f64) -> Self {
        Quantity { name, unit, value }
    }

    /// Record key, e.g. `chamber_diameter_mm`
    pub fn key(&self) -> String {
        format!("{}_{}", self.name, self.unit)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key(), self.value)
    }
}

impl DesignResult {
    /// All quantities in their fixed output order.
    pub fn quantities(&self) -> [Quantity; QUANTITY_COUNT] {
        [
            Quantity::new("total_propellant_flow_rate", "kg/s", self.total_propellant_flow.0),
            Quantity::new("fuel_flow_rate", "kg/s", self.fuel_flow.0),
            Quantity::new("oxygen_flow_rate", "kg/s", self.oxidizer_flow.0),
            Quantity::new("chamber_temperature", "K", self.chamber_temperature.0),
            Quantity::new("nozzle_throat_temperature", "K", self.throat_temperature.0),
            Quantity::new("nozzle_throat_pressure", "Pa", self.throat_pressure.0),
            Quantity::new("nozzle_throat_area", "m^2", self.throat_area.0),
            Quantity::new("nozzle_throat_diameter", "mm", self.throat_diameter.0),
            Quantity::new("nozzle_exit_area", "m^2", self.exit_area.0),
            Quantity::new("nozzle_exit_diameter", "mm", self.exit_diameter.0),
            Quantity::new("combustion_chamber_volume", "m^3", self.chamber_volume.0),
            Quantity::new("chamber_diameter", "mm", self.chamber_diameter.0),
            Quantity::new("chamber_area", "m^2", self.chamber_area.0),
            Quantity::new("chamber_length", "mm", self.chamber_length.0),
            Quantity::new("chamber_wall_thickness", "mm", self.wall_thickness.0),
            Quantity::new("heat_transfer_area", "m^2", self.heat_transfer_area.0),
            Quantity::new("total_heat_transfer", "W", self.total_heat_transfer.0),
            Quantity::new("coolant_flow_rate", "kg/s", self.coolant_flow.0),
            Quantity::new("inner_coolant_diameter", "mm", self.coolant_inner_diameter.0),
            Quantity::new("outer_coolant_diameter", "mm", self.coolant_outer_diameter.0),
            Quantity::new("coolant_gap", "mm", self.coolant_gap.0),
            Quantity::new("fuel_flow_area", "m^2", self.fuel_injector_area.0),
            Quantity::new("fuel_hole_area", "m^2", self.fuel_hole_area.0),
            Quantity::new("fuel_hole_diameter", "mm", self.fuel_hole_diameter.0),
            Quantity::new("oxygen_flow_area", "m^2", self.oxidizer_injector_area.0),
            Quantity::new("oxygen_hole_area", "m^2", self.oxidizer_hole_area.0),
            Quantity::new("oxygen_hole_diameter", "mm", self.oxidizer_hole_diameter.0),
            Quantity::new("specific_impulse", "s", self.specific_impulse.0),
            Quantity::new("convergent_length", "mm", self.convergent_length.0),
            Quantity::new("divergent_length", "mm", self.divergent_length.0),
        ]
    }

    /// Look up a quantity by its record key (e.g. `chamber_length_mm`).
    pub fn get(&self, key: &str) -> Option<f64> {
        self.quantities()
            .into_iter()
            .find(|q| q.key() == key)
            .map(|q| q.value)
    }
}
