//! # Geometry Contract
//!
//! Dimension sets handed to a solid-modelling collaborator. Nothing here
//! builds solids; it only arranges [`DesignResult`] values into the
//! stations and radii a modeller needs.
//!
//! ```text
//!  x = 0          chamber_end   throat          exit
//!  |--------------|\            /|
//!  |   chamber     | \  conv.  / |  div.
//!  |--------------|/            \|
//! ```
//!
//! All lengths are millimeters, measured from the injector face.

use serde::{Deserialize, Serialize};

use crate::calculations::{DesignRequest, DesignResult};
use crate::errors::{CalcError, CalcResult};
use crate::units::Millimeters;

/// Oxidizer orifice circle, as a fraction of the injector face radius
pub const OXIDIZER_RING_FRACTION: f64 = 0.333;

/// Fuel orifice circle, as a fraction of the injector face radius
pub const FUEL_RING_FRACTION: f64 = 0.666;

/// Radii of one axial station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Distance from the injector face
    pub axial: Millimeters,
    /// Gas-side radius
    pub inner_radius: Millimeters,
    /// Inner radius plus wall thickness
    pub outer_radius: Millimeters,
}

/// Axisymmetric chamber and conical nozzle outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChamberNozzleProfile {
    pub wall_thickness: Millimeters,
    /// Start of the cylindrical chamber (the injector face)
    pub injector_face: Station,
    /// End of the cylindrical chamber, start of the convergent cone
    pub chamber_end: Station,
    pub throat: Station,
    pub exit: Station,
}

impl ChamberNozzleProfile {
    pub fn from_result(result: &DesignResult) -> Self {
        let wall = result.wall_thickness;
        let station = |axial: Millimeters, diameter: Millimeters| {
            let inner_radius = diameter / 2.0;
            Station {
                axial,
                inner_radius,
                outer_radius: inner_radius + wall,
            }
        };

        let chamber_end = result.chamber_length;
        let throat = chamber_end + result.convergent_length;
        let exit = throat + result.divergent_length;

        ChamberNozzleProfile {
            wall_thickness: wall,
            injector_face: station(Millimeters(0.0), result.chamber_diameter),
            chamber_end: station(chamber_end, result.chamber_diameter),
            throat: station(throat, result.throat_diameter),
            exit: station(exit, result.exit_diameter),
        }
    }

    /// Stations from injector face to exit, for revolving into a solid.
    pub fn stations(&self) -> [Station; 4] {
        [self.injector_face, self.chamber_end, self.throat, self.exit]
    }

    /// Overall length, injector face to nozzle exit
    pub fn overall_length(&self) -> Millimeters {
        self.exit.axial
    }
}

/// Injector face drilling pattern inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InjectorLayout {
    /// Face diameter (equal to the chamber bore)
    pub chamber_diameter: Millimeters,
    pub wall_thickness: Millimeters,
    pub fuel_holes: u32,
    pub fuel_hole_diameter: Millimeters,
    pub oxidizer_holes: u32,
    pub oxidizer_hole_diameter: Millimeters,
}

impl InjectorLayout {
    pub fn from_design(request: &DesignRequest, result: &DesignResult) -> Self {
        InjectorLayout {
            chamber_diameter: result.chamber_diameter,
            wall_thickness: result.wall_thickness,
            fuel_holes: request.fuel_holes,
            fuel_hole_diameter: result.fuel_hole_diameter,
            oxidizer_holes: request.oxidizer_holes,
            oxidizer_hole_diameter: result.oxidizer_hole_diameter,
        }
    }

    /// Outside diameter of the injector plate, covering the chamber wall
    pub fn face_outer_diameter(&self) -> Millimeters {
        self.chamber_diameter + self.wall_thickness * 2.0
    }

    pub fn face_radius(&self) -> Millimeters {
        self.face_outer_diameter() / 2.0
    }

    /// Radius of the circle the oxidizer orifices sit on
    pub fn oxidizer_ring_radius(&self) -> Millimeters {
        self.face_radius() * OXIDIZER_RING_FRACTION
    }

    /// Radius of the circle the fuel orifices sit on
    pub fn fuel_ring_radius(&self) -> Millimeters {
        self.face_radius() * FUEL_RING_FRACTION
    }
}

/// Bolted flange joining the chamber to the injector.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bolt_count": 8,
///   "bolt_diameter": 6.35,
///   "groove_width": 4.75,
///   "groove_depth": 2.72,
///   "flange_width": 15.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlangeSpec {
    pub bolt_count: u32,
    /// 1/4 in bolts by default
    pub bolt_diameter: Millimeters,
    /// O-ring groove, radially outside the chamber wall
    pub groove_width: Millimeters,
    pub groove_depth: Millimeters,
    /// Bolting land outside the groove
    pub flange_width: Millimeters,
}

impl Default for FlangeSpec {
    fn default() -> Self {
        FlangeSpec {
            bolt_count: 8,
            bolt_diameter: Millimeters(6.35),
            groove_width: Millimeters(4.75),
            groove_depth: Millimeters(2.72),
            flange_width: Millimeters(15.0),
        }
    }
}

impl FlangeSpec {
    pub fn validate(&self) -> CalcResult<()> {
        if self.bolt_count == 0 {
            return Err(CalcError::invalid_input("bolt_count", "0", "Flange needs at least one bolt"));
        }
        let dimensions = [
            ("bolt_diameter", self.bolt_diameter),
            ("groove_width", self.groove_width),
            ("groove_depth", self.groove_depth),
            ("flange_width", self.flange_width),
        ];
        for (field, value) in dimensions {
            if !value.0.is_finite() || value.0 <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.0.to_string(),
                    "Flange dimension must be positive",
                ));
            }
        }
        if self.bolt_diameter.0 >= self.flange_width.0 {
            return Err(CalcError::invalid_input(
                "bolt_diameter",
                self.bolt_diameter.0.to_string(),
                "Bolt must fit within the flange width",
            ));
        }
        Ok(())
    }
}

/// Flange ring dimensions, all radii measured from the chamber axis.
///
/// ```text
///  axis      Dc/2   +t   +groove        +flange
///   |---------|-----|------|--------------|
///             bore  wall   groove  bolts  outer
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlangeLayout {
    pub outer_radius: Millimeters,
    /// Outer edge of the O-ring groove, where the bolting land starts
    pub inner_radius: Millimeters,
    /// Inner edge of the groove (outside of the chamber wall)
    pub groove_radius: Millimeters,
    /// Midway across the bolting land
    pub bolt_circle_radius: Millimeters,
    /// Axial thickness where the groove is cut
    pub depth_with_groove: Millimeters,
    /// Axial thickness of the plain ring
    pub depth_without_groove: Millimeters,
    pub bolt_count: u32,
    pub bolt_diameter: Millimeters,
}

impl FlangeLayout {
    pub fn from_result(result: &DesignResult, spec: &FlangeSpec) -> CalcResult<Self> {
        spec.validate()?;

        let groove_radius = result.chamber_diameter / 2.0 + result.wall_thickness;
        let inner_radius = groove_radius + spec.groove_width;
        let outer_radius = inner_radius + spec.flange_width;

        Ok(FlangeLayout {
            outer_radius,
            inner_radius,
            groove_radius,
            bolt_circle_radius: (outer_radius + inner_radius) / 2.0,
            depth_with_groove: spec.groove_depth + result.wall_thickness,
            depth_without_groove: result.wall_thickness,
            bolt_count: spec.bolt_count,
            bolt_diameter: spec.bolt_diameter,
        })
    }

    /// Angle between neighbouring bolts
    pub fn bolt_spacing_degrees(&self) -> f64 {
        360.0 / self.bolt_count as f64
    }

    /// Bolt hole centres on the bolt circle, first hole on the +x axis.
    pub fn bolt_positions(&self) -> Vec<(Millimeters, Millimeters)> {
        let r = self.bolt_circle_radius.0;
        (0..self.bolt_count)
            .map(|i| {
                let angle = (i as f64 * self.bolt_spacing_degrees()).to_radians();
                (Millimeters(r * angle.cos()), Millimeters(r * angle.sin()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;

    fn design() -> (DesignRequest, DesignResult) {
        let request = DesignRequest {
            fuel_holes: 8,
            oxidizer_holes: 16,
            ..DesignRequest::default()
        };
        let result = calculate(&request).unwrap();
        (request, result)
    }

    #[test]
    fn test_stations_are_cumulative() {
        let (_, r) = design();
        let p = ChamberNozzleProfile::from_result(&r);
        assert_eq!(p.injector_face.axial.0, 0.0);
        assert_eq!(p.chamber_end.axial, r.chamber_length);
        assert_eq!(p.throat.axial, r.chamber_length + r.convergent_length);
        assert_eq!(p.exit.axial, r.chamber_length + r.convergent_length + r.divergent_length);
        assert_eq!(p.overall_length(), p.exit.axial);
    }

    #[test]
    fn test_outer_is_inner_plus_wall() {
        let (_, r) = design();
        let p = ChamberNozzleProfile::from_result(&r);
        for s in p.stations() {
            assert_eq!(s.outer_radius, s.inner_radius + r.wall_thickness);
        }
        assert_eq!(p.throat.inner_radius, r.throat_diameter / 2.0);
    }

    #[test]
    fn test_profile_narrows_to_throat() {
        let (_, r) = design();
        let p = ChamberNozzleProfile::from_result(&r);
        assert!(p.throat.inner_radius.0 < p.chamber_end.inner_radius.0);
        assert!(p.throat.inner_radius.0 < p.exit.inner_radius.0);
        assert!(p.stations().windows(2).all(|w| w[0].axial.0 < w[1].axial.0));
    }

    #[test]
    fn test_injector_layout() {
        let (request, r) = design();
        let layout = InjectorLayout::from_design(&request, &r);
        assert_eq!(layout.fuel_holes, 8);
        assert_eq!(layout.oxidizer_holes, 16);
        assert_eq!(layout.fuel_hole_diameter, r.fuel_hole_diameter);
        assert_eq!(layout.oxidizer_hole_diameter, r.oxidizer_hole_diameter);
        assert_eq!(
            layout.face_outer_diameter(),
            r.chamber_diameter + r.wall_thickness * 2.0
        );
    }

    #[test]
    fn test_injector_rings() {
        let (request, r) = design();
        let layout = InjectorLayout::from_design(&request, &r);
        let face = r.chamber_diameter.0 / 2.0 + r.wall_thickness.0;
        assert!((layout.face_radius().0 - face).abs() < 1e-12);
        assert!((layout.oxidizer_ring_radius().0 - 0.333 * face).abs() < 1e-12);
        assert!((layout.fuel_ring_radius().0 - 0.666 * face).abs() < 1e-12);
        assert!(layout.fuel_ring_radius().0 < r.chamber_diameter.0 / 2.0);
    }

    #[test]
    fn test_flange_radii() {
        let (_, r) = design();
        let flange = FlangeLayout::from_result(&r, &FlangeSpec::default()).unwrap();
        let groove = r.chamber_diameter.0 / 2.0 + r.wall_thickness.0;
        assert!((flange.groove_radius.0 - groove).abs() < 1e-12);
        assert!((flange.inner_radius.0 - (groove + 4.75)).abs() < 1e-12);
        assert!((flange.outer_radius.0 - (groove + 4.75 + 15.0)).abs() < 1e-12);
        assert!((flange.bolt_circle_radius.0 - (groove + 4.75 + 7.5)).abs() < 1e-12);
        assert!((flange.depth_with_groove.0 - (2.72 + r.wall_thickness.0)).abs() < 1e-12);
        assert_eq!(flange.depth_without_groove, r.wall_thickness);
        assert_eq!(flange.bolt_diameter, Millimeters(6.35));
    }

    #[test]
    fn test_flange_bolt_pattern() {
        let (_, r) = design();
        let flange = FlangeLayout::from_result(&r, &FlangeSpec::default()).unwrap();
        assert_eq!(flange.bolt_spacing_degrees(), 45.0);

        let bolts = flange.bolt_positions();
        assert_eq!(bolts.len(), 8);
        assert!((bolts[0].0 .0 - flange.bolt_circle_radius.0).abs() < 1e-12);
        assert!(bolts[0].1 .0.abs() < 1e-12);
        assert!((bolts[2].1 .0 - flange.bolt_circle_radius.0).abs() < 1e-9);
        for (x, y) in bolts {
            assert!((x.0.hypot(y.0) - flange.bolt_circle_radius.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_flange_spec_validation() {
        let (_, r) = design();
        let no_bolts = FlangeSpec {
            bolt_count: 0,
            ..FlangeSpec::default()
        };
        assert!(FlangeLayout::from_result(&r, &no_bolts).is_err());

        let oversized = FlangeSpec {
            bolt_diameter: Millimeters(20.0),
            ..FlangeSpec::default()
        };
        let err = oversized.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "bolt_diameter"));
    }

    #[test]
    fn test_flange_spec_json_defaults() {
        let spec: FlangeSpec = serde_json::from_str(r#"{"bolt_count": 6}"#).unwrap();
        assert_eq!(spec.bolt_count, 6);
        assert_eq!(spec.flange_width, Millimeters(15.0));
    }
}
