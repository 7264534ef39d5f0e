//! # Unit Types
//!
//! Type-safe wrappers for the two unit systems the pipeline touches. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The sizing formulas are written in one consistent imperial system
//! - Every output is converted exactly once, with a fixed set of factors
//! - JSON serialization stays clean (just numbers)
//!
//! ## US Customary Units (Internal)
//!
//! - Length: feet (ft), inches (in)
//! - Area: ft², in²; Volume: ft³
//! - Pressure: psi, psf
//! - Temperature: degrees Rankine (°R)
//! - Mass flow: lb/s; Heat rate: BTU/s
//!
//! ## SI Units (Output)
//!
//! mm, m², m³, Pa, K, kg/s, W.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::units::{Feet, Inches, Millimeters};
//!
//! let chamber = Feet(0.5);
//! let chamber_in: Inches = chamber.into();
//! assert_eq!(chamber_in.0, 6.0);
//!
//! let chamber_mm: Millimeters = Inches(1.0).into();
//! assert!((chamber_mm.0 - 25.4).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Conversion Factors
// ============================================================================

/// Pounds mass to kilograms
pub const LB_TO_KG: f64 = 0.453592;
/// Pounds per square inch to pascals
pub const PSI_TO_PA: f64 = 6894.76;
/// Square feet to square meters
pub const FT2_TO_M2: f64 = 0.092903;
/// Cubic feet to cubic meters
pub const FT3_TO_M3: f64 = 0.0283168;
/// Feet to meters
pub const FT_TO_M: f64 = 0.3048;
/// Inches to meters
pub const IN_TO_M: f64 = 0.0254;
/// BTU per second to watts
pub const BTU_S_TO_W: f64 = 1055.06;
/// Water freezing point on the Rankine scale
pub const RANKINE_AT_FREEZING: f64 = 491.67;
/// Water freezing point on the Kelvin scale
pub const KELVIN_AT_FREEZING: f64 = 273.15;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl From<Feet> for Millimeters {
    fn from(ft: Feet) -> Self {
        Millimeters(ft.0 * FT_TO_M * 1000.0)
    }
}

impl From<Millimeters> for Feet {
    fn from(mm: Millimeters) -> Self {
        Feet(mm.0 / 1000.0 / FT_TO_M)
    }
}

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * IN_TO_M * 1000.0)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / 1000.0 / IN_TO_M)
    }
}

// ============================================================================
// Area and Volume Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMeters(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuFt(pub f64);

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<SqFt> for SqIn {
    fn from(sqft: SqFt) -> Self {
        SqIn(sqft.0 * 144.0)
    }
}

impl From<SqIn> for SqFt {
    fn from(sqin: SqIn) -> Self {
        SqFt(sqin.0 / 144.0)
    }
}

impl From<SqFt> for SqMeters {
    fn from(sqft: SqFt) -> Self {
        SqMeters(sqft.0 * FT2_TO_M2)
    }
}

impl From<SqMeters> for SqFt {
    fn from(m2: SqMeters) -> Self {
        SqFt(m2.0 / FT2_TO_M2)
    }
}

impl From<CuFt> for CubicMeters {
    fn from(cuft: CuFt) -> Self {
        CubicMeters(cuft.0 * FT3_TO_M3)
    }
}

impl From<CubicMeters> for CuFt {
    fn from(m3: CubicMeters) -> Self {
        CuFt(m3.0 / FT3_TO_M3)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Pressure in pounds per square foot (psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

impl From<Psi> for Psf {
    fn from(psi: Psi) -> Self {
        Psf(psi.0 * 144.0)
    }
}

impl From<Psf> for Psi {
    fn from(psf: Psf) -> Self {
        Psi(psf.0 / 144.0)
    }
}

impl From<Psi> for Pascals {
    fn from(psi: Psi) -> Self {
        Pascals(psi.0 * PSI_TO_PA)
    }
}

impl From<Pascals> for Psi {
    fn from(pa: Pascals) -> Self {
        Psi(pa.0 / PSI_TO_PA)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Absolute temperature in degrees Rankine
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rankine(pub f64);

/// Absolute temperature in kelvin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(pub f64);

impl From<Rankine> for Kelvin {
    fn from(r: Rankine) -> Self {
        Kelvin((r.0 - RANKINE_AT_FREEZING) * 5.0 / 9.0 + KELVIN_AT_FREEZING)
    }
}

impl From<Kelvin> for Rankine {
    fn from(k: Kelvin) -> Self {
        Rankine((k.0 - KELVIN_AT_FREEZING) * 9.0 / 5.0 + RANKINE_AT_FREEZING)
    }
}

// ============================================================================
// Force, Flow and Power Units
// ============================================================================

/// Force in pounds-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoundsForce(pub f64);

/// Mass flow in pounds per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LbPerSec(pub f64);

/// Mass flow in kilograms per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerSec(pub f64);

/// Heat rate in BTU per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BtuPerSec(pub f64);

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Specific impulse in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl From<LbPerSec> for KgPerSec {
    fn from(lbs: LbPerSec) -> Self {
        KgPerSec(lbs.0 * LB_TO_KG)
    }
}

impl From<KgPerSec> for LbPerSec {
    fn from(kgs: KgPerSec) -> Self {
        LbPerSec(kgs.0 / LB_TO_KG)
    }
}

impl From<BtuPerSec> for Watts {
    fn from(btus: BtuPerSec) -> Self {
        Watts(btus.0 * BTU_S_TO_W)
    }
}

impl From<Watts> for BtuPerSec {
    fn from(w: Watts) -> Self {
        BtuPerSec(w.0 / BTU_S_TO_W)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Millimeters);
impl_arithmetic!(SqFt);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqMeters);
impl_arithmetic!(CuFt);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Psi);
impl_arithmetic!(Psf);
impl_arithmetic!(Pascals);
impl_arithmetic!(Rankine);
impl_arithmetic!(Kelvin);
impl_arithmetic!(PoundsForce);
impl_arithmetic!(LbPerSec);
impl_arithmetic!(KgPerSec);
impl_arithmetic!(BtuPerSec);
impl_arithmetic!(Watts);
impl_arithmetic!(Seconds);

/// Diameter of a circle with the given area (any consistent unit).
pub fn circle_diameter(area: f64) -> f64 {
    (4.0 * area / std::f64::consts::PI).sqrt()
}

/// Area of a circle with the given diameter (any consistent unit).
pub fn circle_area(diameter: f64) -> f64 {
    std::f64::consts::PI * diameter * diameter / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(10.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 120.0);
    }

    #[test]
    fn test_inch_millimeter_round_trip() {
        let mm: Millimeters = Inches(1.0).into();
        assert!(close(mm.0, 25.4));
        let back: Inches = mm.into();
        assert!(close(back.0, 1.0));
    }

    #[test]
    fn test_si_round_trips() {
        let p: Psi = Pascals::from(Psi(282.0)).into();
        assert!(close(p.0, 282.0));

        let t: Rankine = Kelvin::from(Rankine(6202.0)).into();
        assert!(close(t.0, 6202.0));

        let w: LbPerSec = KgPerSec::from(LbPerSec(0.7168)).into();
        assert!(close(w.0, 0.7168));

        let a: SqFt = SqMeters::from(SqFt(0.0017)).into();
        assert!(close(a.0, 0.0017));

        let v: CuFt = CubicMeters::from(CuFt(0.0086)).into();
        assert!(close(v.0, 0.0086));

        let q: BtuPerSec = Watts::from(BtuPerSec(125.7)).into();
        assert!(close(q.0, 125.7));

        let l: Feet = Millimeters::from(Feet(0.505)).into();
        assert!(close(l.0, 0.505));
    }

    #[test]
    fn test_rankine_to_kelvin() {
        // Freezing point maps exactly
        let k: Kelvin = Rankine(491.67).into();
        assert!(close(k.0, 273.15));
        // 6202 R = 3445.56 K
        let k: Kelvin = Rankine(6202.0).into();
        assert!((k.0 - 3445.5556).abs() < 1e-3);
    }

    #[test]
    fn test_psi_to_psf() {
        let psf: Psf = Psi(282.0).into();
        assert_eq!(psf.0, 40608.0);
    }

    #[test]
    fn test_circle_helpers() {
        let d = circle_diameter(circle_area(3.0));
        assert!(close(d, 3.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(42.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "42.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
