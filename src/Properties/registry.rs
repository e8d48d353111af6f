//! # Substance Properties Registry Module
//!
//! ## Aim
//! This module stores thermodynamic data per chemical substance: critical point
//! properties, standard formation properties and standard absolute entropies. The
//! registry is an explicit context object; an application creates one, populates it
//! and passes it by reference wherever reaction changes are derived. There is no
//! global registry.
//!
//! ## Main Data Structures and Logic
//! - `PropertiesRegistry`: three independent maps keyed by [`Substance`] value
//!   equality, so an independently constructed compound with the same components
//!   resolves the same entry
//! - setters overwrite existing entries and return the registered record
//! - getters return `None` for substances without data
//!
//! ## Key Methods
//! - `set_critical_properties()` / `get_critical_properties()`
//! - `set_formation_properties()` / `get_formation_properties()`
//! - `set_standard_entropy()` / `get_standard_entropy()`
//! - `pretty_print()`: table dump of everything registered
//! - `to_json()`: report keyed by rendered formula
//!
//! The registry is not internally synchronized. The intended use is to populate it
//! during application setup and read it afterwards; embedders that mutate a shared
//! registry concurrently must add their own locking.
use crate::Properties::quantities::{
    CriticalProperties, Entropy, FormationProperties, MolarEnergy, MolarVolume, Pressure,
    Temperature,
};
use crate::Substances::substance::Substance;
use log::debug;
use prettytable::{Table, row};
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct PropertiesRegistry {
    critical: HashMap<Substance, CriticalProperties>,
    formation: HashMap<Substance, FormationProperties>,
    entropy: HashMap<Substance, Entropy>,
}

impl PropertiesRegistry {
    pub fn new() -> Self {
        PropertiesRegistry::default()
    }

    /// Registers the critical point properties of a substance. An existing entry
    /// is overwritten.
    pub fn set_critical_properties(
        &mut self,
        substance: impl Into<Substance>,
        temperature: Temperature,
        pressure: Pressure,
        volume: MolarVolume,
    ) -> CriticalProperties {
        let substance = substance.into();
        let properties = CriticalProperties {
            temperature,
            pressure,
            volume,
        };
        debug!("registering critical properties for {}", substance);
        self.critical.insert(substance, properties);
        properties
    }

    /// Critical point properties of a substance, `None` if never registered.
    pub fn get_critical_properties(
        &self,
        substance: impl Into<Substance>,
    ) -> Option<CriticalProperties> {
        self.critical.get(&substance.into()).copied()
    }

    /// Registers the standard (25 Celsius, 1 bar) formation enthalpy and Gibbs
    /// energy of a substance. An existing entry is overwritten.
    pub fn set_formation_properties(
        &mut self,
        substance: impl Into<Substance>,
        enthalpy: MolarEnergy,
        gibbs_energy: MolarEnergy,
    ) -> FormationProperties {
        let substance = substance.into();
        let properties = FormationProperties {
            enthalpy,
            gibbs_energy,
        };
        debug!("registering formation properties for {}", substance);
        self.formation.insert(substance, properties);
        properties
    }

    /// Standard formation properties of a substance, `None` if never registered.
    pub fn get_formation_properties(
        &self,
        substance: impl Into<Substance>,
    ) -> Option<FormationProperties> {
        self.formation.get(&substance.into()).copied()
    }

    /// Registers the standard (25 Celsius, 1 bar) absolute entropy of a substance.
    /// An existing entry is overwritten.
    pub fn set_standard_entropy(
        &mut self,
        substance: impl Into<Substance>,
        entropy: Entropy,
    ) -> Entropy {
        let substance = substance.into();
        debug!("registering standard entropy for {}", substance);
        self.entropy.insert(substance, entropy);
        entropy
    }

    /// Standard absolute entropy of a substance, `None` if never registered.
    pub fn get_standard_entropy(&self, substance: impl Into<Substance>) -> Option<Entropy> {
        self.entropy.get(&substance.into()).copied()
    }

    /// Every substance with at least one registered record, sorted by rendered
    /// formula for deterministic reports.
    pub fn substances(&self) -> Vec<&Substance> {
        let mut substances: Vec<&Substance> = self
            .critical
            .keys()
            .chain(self.formation.keys())
            .chain(self.entropy.keys())
            .collect();
        substances.sort_by_key(|substance| substance.to_string());
        substances.dedup();
        substances
    }

    /// Prints everything registered as a table, one row per substance, a dash for
    /// records that substance does not have.
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row![
            "Substance",
            "Tc, K",
            "Pc, bar",
            "Vc, m^3/kmol",
            "dHf, J/kmol",
            "dGf, J/kmol",
            "S, J/kmol/K"
        ]);
        for substance in self.substances() {
            let (tc, pc, vc) = match self.critical.get(substance) {
                Some(critical) => (
                    critical.temperature.value().to_string(),
                    critical.pressure.value().to_string(),
                    critical.volume.value().to_string(),
                ),
                None => ("-".to_string(), "-".to_string(), "-".to_string()),
            };
            let (dh, dg) = match self.formation.get(substance) {
                Some(formation) => (
                    formation.enthalpy.value().to_string(),
                    formation.gibbs_energy.value().to_string(),
                ),
                None => ("-".to_string(), "-".to_string()),
            };
            let s = match self.entropy.get(substance) {
                Some(entropy) => entropy.value().to_string(),
                None => "-".to_string(),
            };
            table.add_row(row![substance, tc, pc, vc, dh, dg, s]);
        }
        table.printstd();
    }

    /// JSON report of everything registered, keyed by rendered formula. Quantities
    /// serialize as bare numbers in their canonical units.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut report = Map::new();
        for substance in self.substances() {
            let mut entry = Map::new();
            if let Some(critical) = self.critical.get(substance) {
                entry.insert("critical".to_string(), serde_json::to_value(critical)?);
            }
            if let Some(formation) = self.formation.get(substance) {
                entry.insert("formation".to_string(), serde_json::to_value(formation)?);
            }
            if let Some(entropy) = self.entropy.get(substance) {
                entry.insert(
                    "standard_entropy".to_string(),
                    serde_json::to_value(entropy)?,
                );
            }
            report.insert(substance.to_string(), Value::Object(entry));
        }
        serde_json::to_string_pretty(&Value::Object(report))
    }
}

/////////////////////////TESTS///////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Substances::constants::{CARBON, HYDROGEN, METHANE, OXYGEN2, WATER};
    use crate::compound;

    fn registry_with_methane() -> PropertiesRegistry {
        let mut registry = PropertiesRegistry::new();
        registry.set_critical_properties(
            METHANE.clone(),
            Temperature::new(190.56).unwrap(),
            Pressure::new(45.99).unwrap(),
            MolarVolume::new(0.0986).unwrap(),
        );
        registry.set_formation_properties(
            METHANE.clone(),
            MolarEnergy::new(-7.487e7),
            MolarEnergy::new(-5.08e7),
        );
        registry.set_standard_entropy(METHANE.clone(), Entropy::new(1.8626e5).unwrap());
        registry
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let registry = registry_with_methane();
        let critical = registry.get_critical_properties(METHANE.clone()).unwrap();
        assert_eq!(critical.temperature.value(), 190.56);
        let formation = registry.get_formation_properties(METHANE.clone()).unwrap();
        assert_eq!(formation.enthalpy.value(), -7.487e7);
        let entropy = registry.get_standard_entropy(METHANE.clone()).unwrap();
        assert_eq!(entropy.value(), 1.8626e5);
    }

    #[test]
    fn test_lookup_resolves_by_value_equality() {
        // an independently built compound with the same components is the same key
        let registry = registry_with_methane();
        let methane = compound![CARBON, HYDROGEN * 4];
        assert!(registry.get_formation_properties(methane).is_some());
    }

    #[test]
    fn test_unregistered_substance_returns_none() {
        let registry = registry_with_methane();
        assert!(registry.get_critical_properties(WATER.clone()).is_none());
        assert!(registry.get_formation_properties(OXYGEN2).is_none());
        assert!(registry.get_standard_entropy(CARBON).is_none());
    }

    #[test]
    fn test_set_overwrites_existing_entry() {
        let mut registry = registry_with_methane();
        registry.set_standard_entropy(METHANE.clone(), Entropy::new(2.0e5).unwrap());
        let entropy = registry.get_standard_entropy(METHANE.clone()).unwrap();
        assert_eq!(entropy.value(), 2.0e5);
    }

    #[test]
    fn test_record_kinds_are_independent() {
        let mut registry = PropertiesRegistry::new();
        registry.set_standard_entropy(OXYGEN2, Entropy::new(2.0515e5).unwrap());
        assert!(registry.get_standard_entropy(OXYGEN2).is_some());
        assert!(registry.get_formation_properties(OXYGEN2).is_none());
        assert!(registry.get_critical_properties(OXYGEN2).is_none());
    }

    #[test]
    fn test_substances_are_sorted_and_unique() {
        let mut registry = registry_with_methane();
        registry.set_standard_entropy(WATER.clone(), Entropy::new(1.8884e5).unwrap());
        registry.set_formation_properties(
            WATER.clone(),
            MolarEnergy::new(-2.41826e8),
            MolarEnergy::new(-2.2857e8),
        );
        let substances = registry.substances();
        assert_eq!(substances.len(), 2);
        assert_eq!(substances[0].to_string(), "CH4");
        assert_eq!(substances[1].to_string(), "H2O");
    }

    #[test]
    fn test_json_report() {
        let registry = registry_with_methane();
        let json = registry.to_json().unwrap();
        let report: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(report["CH4"]["critical"]["temperature"], 190.56);
        assert_eq!(report["CH4"]["formation"]["enthalpy"], -7.487e7);
        assert_eq!(report["CH4"]["standard_entropy"], 1.8626e5);
    }

    #[test]
    fn test_pretty_print_runs_with_partial_records() {
        let mut registry = registry_with_methane();
        registry.set_standard_entropy(CARBON, Entropy::new(5.74e3).unwrap());
        registry.pretty_print();
    }
}
