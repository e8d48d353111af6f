/// element constants for 58 elements of the periodic table, common element groups and compounds
pub mod constants;
/// chemical substance algebra: elements, element groups and compounds with molecular weights
/// # Examples
/// ```
/// use StoiThe::Substances::constants::{CARBON, HYDROGEN, OXYGEN};
/// use StoiThe::Substances::substance::ElementalComposition;
/// use StoiThe::compound;
/// let methane = compound![CARBON, HYDROGEN * 4];
/// assert_eq!(methane.to_string(), "CH4");
/// assert!((methane.molecular_weight() - 16.043).abs() < 1e-6);
/// // structural formulas keep their component order
/// let ethanol = compound![CARBON, HYDROGEN * 3, CARBON, HYDROGEN * 2, OXYGEN, HYDROGEN];
/// assert_eq!(ethanol.to_string(), "CH3CH2OH");
/// ```
pub mod substance;
/// tests
pub mod substance_tests;
