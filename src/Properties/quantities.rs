//! Dimensioned quantities used by the thermochemistry layer. Every quantity wraps an
//! `f64` in one canonical unit: Kelvin, bar, m^3/kmol, J/kmol and J/kmol/K. There is
//! no unit conversion machinery; callers supply values already expressed in these
//! units. Constructors validate the physical range of the value, except for
//! [`MolarEnergy`] whose values (formation enthalpies, reaction changes) are
//! routinely negative.
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use thiserror::Error;

/// error types for quantity validation
#[derive(Debug, Error, PartialEq)]
pub enum QuantityError {
    #[error("cannot create a temperature of {0} K; the value is below absolute zero")]
    BelowAbsoluteZero(f64),
    #[error("cannot create a pressure of {0} bar; expected a non-negative value")]
    NegativePressure(f64),
    #[error("cannot create a molar volume of {0} m^3/kmol; expected a non-negative value")]
    NegativeVolume(f64),
    #[error("cannot create an entropy of {0} J/kmol/K; expected a non-negative value")]
    NegativeEntropy(f64),
}

/// Absolute temperature in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    pub fn new(value: f64) -> Result<Self, QuantityError> {
        // the comparison also rejects NaN
        if !(value >= 0.0) {
            return Err(QuantityError::BelowAbsoluteZero(value));
        }
        Ok(Temperature(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} K", self.0)
    }
}

/// Pressure in bar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Pressure(f64);

impl Pressure {
    pub fn new(value: f64) -> Result<Self, QuantityError> {
        if !(value >= 0.0) {
            return Err(QuantityError::NegativePressure(value));
        }
        Ok(Pressure(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bar", self.0)
    }
}

/// Molar volume in m^3/kmol.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MolarVolume(f64);

impl MolarVolume {
    pub fn new(value: f64) -> Result<Self, QuantityError> {
        if !(value >= 0.0) {
            return Err(QuantityError::NegativeVolume(value));
        }
        Ok(MolarVolume(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for MolarVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m^3/kmol", self.0)
    }
}

/// Molar energy in J/kmol. Never validated: formation enthalpies and Gibbs
/// energies of most compounds are negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MolarEnergy(f64);

impl MolarEnergy {
    pub const ZERO: MolarEnergy = MolarEnergy(0.0);

    pub fn new(value: f64) -> Self {
        MolarEnergy(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for MolarEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} J/kmol", self.0)
    }
}

impl Add for MolarEnergy {
    type Output = MolarEnergy;

    fn add(self, rhs: MolarEnergy) -> Self::Output {
        MolarEnergy(self.0 + rhs.0)
    }
}

impl Sub for MolarEnergy {
    type Output = MolarEnergy;

    fn sub(self, rhs: MolarEnergy) -> Self::Output {
        MolarEnergy(self.0 - rhs.0)
    }
}

impl Mul<i32> for MolarEnergy {
    type Output = MolarEnergy;

    fn mul(self, rhs: i32) -> Self::Output {
        MolarEnergy(self.0 * rhs as f64)
    }
}

impl Mul<MolarEnergy> for i32 {
    type Output = MolarEnergy;

    fn mul(self, rhs: MolarEnergy) -> Self::Output {
        MolarEnergy(rhs.0 * self as f64)
    }
}

/// Entropy in J/kmol/K. Constructed values are absolute entropies and must be
/// non-negative; arithmetic results may drop below zero since reaction entropy
/// changes are differences of absolute entropies.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Entropy(f64);

impl Entropy {
    pub const ZERO: Entropy = Entropy(0.0);

    pub fn new(value: f64) -> Result<Self, QuantityError> {
        if !(value >= 0.0) {
            return Err(QuantityError::NegativeEntropy(value));
        }
        Ok(Entropy(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} J/kmol/K", self.0)
    }
}

impl Add for Entropy {
    type Output = Entropy;

    fn add(self, rhs: Entropy) -> Self::Output {
        Entropy(self.0 + rhs.0)
    }
}

impl Sub for Entropy {
    type Output = Entropy;

    fn sub(self, rhs: Entropy) -> Self::Output {
        Entropy(self.0 - rhs.0)
    }
}

impl Mul<i32> for Entropy {
    type Output = Entropy;

    fn mul(self, rhs: i32) -> Self::Output {
        Entropy(self.0 * rhs as f64)
    }
}

impl Mul<Entropy> for i32 {
    type Output = Entropy;

    fn mul(self, rhs: Entropy) -> Self::Output {
        Entropy(rhs.0 * self as f64)
    }
}

/// Properties at the critical point of a chemical substance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalProperties {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub volume: MolarVolume,
}

/// Standard (25 Celsius, 1 bar) formation properties of a chemical substance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormationProperties {
    pub enthalpy: MolarEnergy,
    pub gibbs_energy: MolarEnergy,
}

/////////////////////////TESTS///////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_validation() {
        assert!(Temperature::new(298.15).is_ok());
        assert!(Temperature::new(0.0).is_ok());
        assert_eq!(
            Temperature::new(-1.0),
            Err(QuantityError::BelowAbsoluteZero(-1.0))
        );
        assert!(Temperature::new(f64::NAN).is_err());
    }

    #[test]
    fn test_pressure_validation() {
        assert!(Pressure::new(1.0).is_ok());
        assert_eq!(
            Pressure::new(-0.5),
            Err(QuantityError::NegativePressure(-0.5))
        );
        assert!(Pressure::new(f64::NAN).is_err());
    }

    #[test]
    fn test_molar_volume_validation() {
        assert!(MolarVolume::new(0.0559).is_ok());
        assert_eq!(
            MolarVolume::new(-2.0),
            Err(QuantityError::NegativeVolume(-2.0))
        );
    }

    #[test]
    fn test_entropy_validation() {
        assert!(Entropy::new(1.8884e5).is_ok());
        assert_eq!(
            Entropy::new(-10.0),
            Err(QuantityError::NegativeEntropy(-10.0))
        );
        assert!(Entropy::new(f64::NAN).is_err());
    }

    #[test]
    fn test_molar_energy_accepts_negative_values() {
        let enthalpy = MolarEnergy::new(-2.41826e8);
        assert_eq!(enthalpy.value(), -2.41826e8);
    }

    #[test]
    fn test_molar_energy_arithmetic() {
        let a = MolarEnergy::new(100.0);
        let b = MolarEnergy::new(40.0);
        assert_eq!((a + b).value(), 140.0);
        assert_eq!((a - b).value(), 60.0);
        assert_eq!((a * 3).value(), 300.0);
        assert_eq!((3 * a).value(), 300.0);
        assert_eq!(MolarEnergy::ZERO.value(), 0.0);
    }

    #[test]
    fn test_entropy_arithmetic_may_go_negative() {
        let small = Entropy::new(5.0).unwrap();
        let big = Entropy::new(12.0).unwrap();
        assert_eq!((small - big).value(), -7.0);
        assert_eq!((2 * big).value(), 24.0);
        assert_eq!((big * 2).value(), 24.0);
    }

    #[test]
    fn test_quantity_ordering() {
        assert!(Temperature::new(300.0).unwrap() > Temperature::new(200.0).unwrap());
        assert!(MolarEnergy::new(-5.0) < MolarEnergy::ZERO);
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(Temperature::new(647.096).unwrap().to_string(), "647.096 K");
        assert_eq!(Pressure::new(220.64).unwrap().to_string(), "220.64 bar");
        assert_eq!(
            MolarVolume::new(0.0559).unwrap().to_string(),
            "0.0559 m^3/kmol"
        );
        assert_eq!(MolarEnergy::new(100.0).to_string(), "100 J/kmol");
        assert_eq!(Entropy::new(105.0).unwrap().to_string(), "105 J/kmol/K");
    }

    #[test]
    fn test_quantity_serialization_is_transparent() {
        let pressure = Pressure::new(220.64).unwrap();
        assert_eq!(serde_json::to_string(&pressure).unwrap(), "220.64");
        let formation = FormationProperties {
            enthalpy: MolarEnergy::new(-2.41826e8),
            gibbs_energy: MolarEnergy::new(-2.2857e8),
        };
        let json = serde_json::to_string(&formation).unwrap();
        assert!(json.contains("\"enthalpy\":-241826000.0"));
    }
}
