//! Periodic table element constants (hydrogen through tantalum), diatomic element
//! groups and common compounds, plus lookups over the element table.
use crate::Substances::substance::{Compound, Element, ElementGroup};
use crate::compound;
use std::sync::LazyLock;

pub const HYDROGEN: Element = Element::new(1, 1.0080, "H");
pub const HELIUM: Element = Element::new(2, 4.00260, "He");
pub const LITHIUM: Element = Element::new(3, 7.0, "Li");
pub const BERYLLIUM: Element = Element::new(4, 9.012183, "Be");
pub const BORON: Element = Element::new(5, 10.81, "B");
pub const CARBON: Element = Element::new(6, 12.011, "C");
pub const NITROGEN: Element = Element::new(7, 14.007, "N");
pub const OXYGEN: Element = Element::new(8, 15.999, "O");
pub const FLUORINE: Element = Element::new(9, 18.99840316, "F");
pub const NEON: Element = Element::new(10, 20.180, "Ne");
pub const SODIUM: Element = Element::new(11, 22.9897693, "Na");
pub const MAGNESIUM: Element = Element::new(12, 24.305, "Mg");
pub const ALUMINUM: Element = Element::new(13, 26.981538, "Al");
pub const SILICON: Element = Element::new(14, 28.085, "Si");
pub const PHOSPHORUS: Element = Element::new(15, 30.97376200, "P");
pub const SULFUR: Element = Element::new(16, 32.07, "S");
pub const CHLORINE: Element = Element::new(17, 35.45, "Cl");
pub const ARGON: Element = Element::new(18, 39.9, "Ar");
pub const POTASSIUM: Element = Element::new(19, 39.0983, "K");
pub const CALCIUM: Element = Element::new(20, 40.08, "Ca");
pub const SCANDIUM: Element = Element::new(21, 44.95591, "Sc");
pub const TITANIUM: Element = Element::new(22, 47.867, "Ti");
pub const VANADIUM: Element = Element::new(23, 50.9415, "V");
pub const CHROMIUM: Element = Element::new(24, 51.996, "Cr");
pub const MANGANESE: Element = Element::new(25, 54.93804, "Mn");
pub const IRON: Element = Element::new(26, 55.84, "Fe");
pub const COBALT: Element = Element::new(27, 58.93319, "Co");
pub const NICKEL: Element = Element::new(28, 58.693, "Ni");
pub const COPPER: Element = Element::new(29, 63.55, "Cu");
pub const ZINC: Element = Element::new(30, 65.4, "Zn");
pub const GALLIUM: Element = Element::new(31, 69.723, "Ga");
pub const GERMANIUM: Element = Element::new(32, 72.63, "Ge");
pub const ARSENIC: Element = Element::new(33, 74.92159, "As");
pub const SELENIUM: Element = Element::new(34, 78.97, "Se");
pub const BROMINE: Element = Element::new(35, 79.90, "Br");
pub const KRYPTON: Element = Element::new(36, 83.80, "Kr");
pub const RUBIDIUM: Element = Element::new(37, 85.468, "Rb");
pub const STRONTIUM: Element = Element::new(38, 87.62, "Sr");
pub const YTTRIUM: Element = Element::new(39, 88.90584, "Y");
pub const ZIRCONIUM: Element = Element::new(40, 91.22, "Zr");
pub const NIOBIUM: Element = Element::new(41, 92.90637, "Nb");
pub const MOLYBDENUM: Element = Element::new(42, 95.95, "Mo");
pub const TECHNETIUM: Element = Element::new(43, 96.90636, "Tc");
pub const RUTHENIUM: Element = Element::new(44, 101.1, "Ru");
pub const RHODIUM: Element = Element::new(45, 102.9055, "Rh");
pub const PALLADIUM: Element = Element::new(46, 106.42, "Pd");
pub const SILVER: Element = Element::new(47, 107.868, "Ag");
pub const CADMIUM: Element = Element::new(48, 112.41, "Cd");
pub const INDIUM: Element = Element::new(49, 114.818, "In");
pub const TIN: Element = Element::new(50, 118.71, "Sn");
pub const ANTIMONY: Element = Element::new(51, 121.760, "Sb");
pub const TELLURIUM: Element = Element::new(52, 127.6, "Te");
pub const IODINE: Element = Element::new(53, 126.9045, "I");
pub const XENON: Element = Element::new(54, 131.29, "Xe");
pub const CESIUM: Element = Element::new(55, 132.9054520, "Cs");
pub const BARIUM: Element = Element::new(56, 137.33, "Ba");
pub const HAFNIUM: Element = Element::new(72, 178.49, "Hf");
pub const TANTALUM: Element = Element::new(73, 180.9479, "Ta");

/// All elements of the table above, in atomic number order.
pub const ELEMENTS: &[Element] = &[
    HYDROGEN, HELIUM, LITHIUM, BERYLLIUM, BORON, CARBON, NITROGEN, OXYGEN, FLUORINE, NEON,
    SODIUM, MAGNESIUM, ALUMINUM, SILICON, PHOSPHORUS, SULFUR, CHLORINE, ARGON, POTASSIUM,
    CALCIUM, SCANDIUM, TITANIUM, VANADIUM, CHROMIUM, MANGANESE, IRON, COBALT, NICKEL, COPPER,
    ZINC, GALLIUM, GERMANIUM, ARSENIC, SELENIUM, BROMINE, KRYPTON, RUBIDIUM, STRONTIUM,
    YTTRIUM, ZIRCONIUM, NIOBIUM, MOLYBDENUM, TECHNETIUM, RUTHENIUM, RHODIUM, PALLADIUM,
    SILVER, CADMIUM, INDIUM, TIN, ANTIMONY, TELLURIUM, IODINE, XENON, CESIUM, BARIUM, HAFNIUM,
    TANTALUM,
];

pub const HYDROGEN2: ElementGroup = ElementGroup::new(HYDROGEN, 2);
pub const OXYGEN2: ElementGroup = ElementGroup::new(OXYGEN, 2);
pub const NITROGEN2: ElementGroup = ElementGroup::new(NITROGEN, 2);

pub static WATER: LazyLock<Compound> = LazyLock::new(|| compound![HYDROGEN * 2, OXYGEN]);
pub static CARBON_MONOXIDE: LazyLock<Compound> = LazyLock::new(|| compound![CARBON, OXYGEN]);
pub static CARBON_DIOXIDE: LazyLock<Compound> = LazyLock::new(|| compound![CARBON, OXYGEN * 2]);
pub static METHANE: LazyLock<Compound> = LazyLock::new(|| compound![CARBON, HYDROGEN * 4]);

/// Looks an element up by its symbol, e.g. "Na".
pub fn element_by_symbol(symbol: &str) -> Option<Element> {
    ELEMENTS
        .iter()
        .find(|element| element.symbol == symbol)
        .copied()
}

/// Looks an element up by its atomic number.
pub fn element_by_atomic_number(atomic_number: u32) -> Option<Element> {
    ELEMENTS
        .iter()
        .find(|element| element.atomic_number == atomic_number)
        .copied()
}
