/// well known named reactions, balance-checked at first use
pub mod constants;
/// reaction construction with atom balance validation and standard thermodynamic changes
/// # Examples
/// ```
/// use StoiThe::Properties::standard_data::standard_properties_registry;
/// use StoiThe::Reactions::reaction::reaction;
/// use StoiThe::Substances::constants::{CARBON_DIOXIDE, CARBON_MONOXIDE, HYDROGEN2, WATER};
/// // CO + H2O -> CO2 + H2, the water gas shift
/// let shift = reaction(
///     CARBON_MONOXIDE.clone() + WATER.clone(),
///     CARBON_DIOXIDE.clone() + HYDROGEN2,
/// )
/// .unwrap();
/// assert_eq!(shift.to_string(), "CO + H2O -> CO2 + H2");
/// // the balance guard rejects a lost oxygen atom
/// assert!(reaction(CARBON_MONOXIDE.clone(), CARBON_DIOXIDE.clone()).is_err());
/// // standard changes are derived from tabulated data
/// let registry = standard_properties_registry().unwrap();
/// let dh = shift.standard_enthalpy_change(&registry).unwrap();
/// assert!(dh.value() < 0.0);
/// ```
pub mod reaction;
