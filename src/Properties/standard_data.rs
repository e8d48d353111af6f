//! Hand-curated standard state (25 Celsius, 1 bar) thermochemical data for the
//! common gas-phase species shipped as compound constants. Literature values from
//! the NIST Chemistry WebBook and the CRC Handbook, converted to the canonical
//! units of this crate: K, bar, m^3/kmol, J/kmol and J/kmol/K.
use crate::Properties::quantities::{
    Entropy, MolarEnergy, MolarVolume, Pressure, QuantityError, Temperature,
};
use crate::Properties::registry::PropertiesRegistry;
use crate::Substances::constants::{
    CARBON, CARBON_DIOXIDE, CARBON_MONOXIDE, HYDROGEN2, METHANE, NITROGEN2, OXYGEN2, WATER,
};
use log::info;

/// Registry populated with critical point data, formation properties and standard
/// entropies for H2O, CO, CO2, CH4, H2, O2, N2 and graphite carbon.
pub fn standard_properties_registry() -> Result<PropertiesRegistry, QuantityError> {
    let mut registry = PropertiesRegistry::new();

    registry.set_critical_properties(
        WATER.clone(),
        Temperature::new(647.096)?,
        Pressure::new(220.64)?,
        MolarVolume::new(0.0559)?,
    );
    registry.set_formation_properties(
        WATER.clone(),
        MolarEnergy::new(-2.41826e8),
        MolarEnergy::new(-2.2857e8),
    );
    registry.set_standard_entropy(WATER.clone(), Entropy::new(1.8884e5)?);

    registry.set_critical_properties(
        CARBON_MONOXIDE.clone(),
        Temperature::new(132.86)?,
        Pressure::new(34.98)?,
        MolarVolume::new(0.0931)?,
    );
    registry.set_formation_properties(
        CARBON_MONOXIDE.clone(),
        MolarEnergy::new(-1.1053e8),
        MolarEnergy::new(-1.3717e8),
    );
    registry.set_standard_entropy(CARBON_MONOXIDE.clone(), Entropy::new(1.9766e5)?);

    registry.set_critical_properties(
        CARBON_DIOXIDE.clone(),
        Temperature::new(304.13)?,
        Pressure::new(73.77)?,
        MolarVolume::new(0.094)?,
    );
    registry.set_formation_properties(
        CARBON_DIOXIDE.clone(),
        MolarEnergy::new(-3.9351e8),
        MolarEnergy::new(-3.9436e8),
    );
    registry.set_standard_entropy(CARBON_DIOXIDE.clone(), Entropy::new(2.1379e5)?);

    registry.set_critical_properties(
        METHANE.clone(),
        Temperature::new(190.56)?,
        Pressure::new(45.99)?,
        MolarVolume::new(0.0986)?,
    );
    registry.set_formation_properties(
        METHANE.clone(),
        MolarEnergy::new(-7.487e7),
        MolarEnergy::new(-5.08e7),
    );
    registry.set_standard_entropy(METHANE.clone(), Entropy::new(1.8626e5)?);

    registry.set_critical_properties(
        HYDROGEN2,
        Temperature::new(33.145)?,
        Pressure::new(12.964)?,
        MolarVolume::new(0.0645)?,
    );
    registry.set_formation_properties(HYDROGEN2, MolarEnergy::ZERO, MolarEnergy::ZERO);
    registry.set_standard_entropy(HYDROGEN2, Entropy::new(1.3068e5)?);

    registry.set_critical_properties(
        OXYGEN2,
        Temperature::new(154.58)?,
        Pressure::new(50.43)?,
        MolarVolume::new(0.0734)?,
    );
    registry.set_formation_properties(OXYGEN2, MolarEnergy::ZERO, MolarEnergy::ZERO);
    registry.set_standard_entropy(OXYGEN2, Entropy::new(2.0515e5)?);

    registry.set_critical_properties(
        NITROGEN2,
        Temperature::new(126.19)?,
        Pressure::new(33.96)?,
        MolarVolume::new(0.0894)?,
    );
    registry.set_formation_properties(NITROGEN2, MolarEnergy::ZERO, MolarEnergy::ZERO);
    registry.set_standard_entropy(NITROGEN2, Entropy::new(1.9158e5)?);

    // graphite, the reference state of carbon; no accessible critical point
    registry.set_formation_properties(CARBON, MolarEnergy::ZERO, MolarEnergy::ZERO);
    registry.set_standard_entropy(CARBON, Entropy::new(5.74e3)?);

    info!(
        "standard thermochemical data registered for {} substances",
        registry.substances().len()
    );
    Ok(registry)
}

/////////////////////////TESTS///////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_covers_all_species() {
        let registry = standard_properties_registry().unwrap();
        assert_eq!(registry.substances().len(), 8);
    }

    #[test]
    fn test_water_formation_enthalpy() {
        let registry = standard_properties_registry().unwrap();
        let formation = registry.get_formation_properties(WATER.clone()).unwrap();
        assert_eq!(formation.enthalpy.value(), -2.41826e8);
        assert_eq!(formation.gibbs_energy.value(), -2.2857e8);
    }

    #[test]
    fn test_nitrogen_critical_point() {
        let registry = standard_properties_registry().unwrap();
        let critical = registry.get_critical_properties(NITROGEN2).unwrap();
        assert_eq!(critical.temperature.value(), 126.19);
        assert_eq!(critical.pressure.value(), 33.96);
        assert_eq!(critical.volume.value(), 0.0894);
    }

    #[test]
    fn test_graphite_has_entropy_but_no_critical_point() {
        let registry = standard_properties_registry().unwrap();
        assert!(registry.get_critical_properties(CARBON).is_none());
        assert_eq!(
            registry.get_standard_entropy(CARBON).unwrap().value(),
            5.74e3
        );
        let formation = registry.get_formation_properties(CARBON).unwrap();
        assert_eq!(formation.enthalpy, MolarEnergy::ZERO);
    }
}
