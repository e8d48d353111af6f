//! # Chemical Substance Algebra Module
//!
//! ## Aim
//! This module provides the value types chemical formulae are composed of: elements of
//! the periodic table, groups of identical atoms and multi-component compounds.
//! Substances are built with ordinary arithmetic: multiplying an element by an integer
//! produces an element group, and the `compound!` macro assembles compounds from
//! elements and element groups in declaration order.
//!
//! ## Main Data Structures and Logic
//! - `Element`: atomic number, atomic mass and symbol of a periodic table element
//! - `ElementGroup`: a multitude of atoms of the same element, e.g. O2
//! - `Compound`: an ordered sequence of elements and element groups, e.g. CH4
//! - `Substance` enum: the closed set of substance kinds, dispatching `ElementalComposition`
//! - `CompoundComponent` enum: the two kinds a compound may contain
//!
//! ## Key Methods
//! - `molecular_weight()`: unitless relative molecular mass of any substance
//! - `elements()`: the atoms of a substance, one entry per atom
//! - `times()`: checked multiplication of elements and element groups
//!
//! ## Usage
//! ```
//! use StoiThe::Substances::constants::{CARBON, HYDROGEN};
//! use StoiThe::Substances::substance::ElementalComposition;
//! use StoiThe::compound;
//! let methane = compound![CARBON, HYDROGEN * 4];
//! assert_eq!(methane.to_string(), "CH4");
//! assert!((methane.molecular_weight() - 16.043).abs() < 1e-9);
//! ```
use enum_dispatch::enum_dispatch;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;
use thiserror::Error;

/// error types for the substance algebra
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubstanceError {
    #[error("cannot multiply {kind} with {value}; expected a positive integer")]
    InvalidMultiplier { kind: &'static str, value: i32 },
    #[error("cannot use {value} as stoichiometric coefficient for {substance}; expected a positive integer")]
    InvalidCoefficient { substance: String, value: i32 },
}

/// Atomic composition shared by every substance kind.
#[enum_dispatch]
pub trait ElementalComposition {
    /// Unitless relative molecular mass of the substance.
    fn molecular_weight(&self) -> f64;
    /// Atoms the substance consists of, one entry per atom.
    fn elements(&self) -> Vec<Element>;
}

/// Element of the periodic table.
#[derive(Debug, Clone, Copy)]
pub struct Element {
    pub atomic_number: u32,
    pub atomic_mass: f64,
    pub symbol: &'static str,
}

impl Element {
    pub const fn new(atomic_number: u32, atomic_mass: f64, symbol: &'static str) -> Self {
        Element {
            atomic_number,
            atomic_mass,
            symbol,
        }
    }

    /// Checked multiplication: `times(n)` produces a group of n atoms of this element.
    /// The multiplier must be a positive integer.
    pub fn times(&self, n: i32) -> Result<ElementGroup, SubstanceError> {
        if n < 1 {
            return Err(SubstanceError::InvalidMultiplier {
                kind: "Element",
                value: n,
            });
        }
        Ok(ElementGroup {
            element: *self,
            size: n,
        })
    }
}

// atomic_mass takes part in equality and hashing bitwise so Eq and Hash stay
// consistent; element constants never hold NaN or negative zero masses
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.atomic_number == other.atomic_number
            && self.atomic_mass.to_bits() == other.atomic_mass.to_bits()
            && self.symbol == other.symbol
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atomic_number.hash(state);
        self.atomic_mass.to_bits().hash(state);
        self.symbol.hash(state);
    }
}

impl ElementalComposition for Element {
    fn molecular_weight(&self) -> f64 {
        self.atomic_mass
    }

    fn elements(&self) -> Vec<Element> {
        vec![*self]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

impl Mul<i32> for Element {
    type Output = ElementGroup;

    /// `OXYGEN * 2` produces the element group O2. Panics when the multiplier is
    /// zero or negative; [`Element::times`] is the checked variant.
    fn mul(self, rhs: i32) -> Self::Output {
        match self.times(rhs) {
            Ok(group) => group,
            Err(e) => panic!("{}", e),
        }
    }
}

/// A multitude of atoms of the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementGroup {
    element: Element,
    size: i32,
}

impl ElementGroup {
    /// Group of `size` atoms of `element`. The size must be a positive integer.
    pub const fn new(element: Element, size: i32) -> Self {
        assert!(size >= 1, "element group size must be a positive integer");
        ElementGroup { element, size }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Checked multiplication: `times(n)` scales the group size n-fold.
    /// The multiplier must be a positive integer.
    pub fn times(&self, n: i32) -> Result<ElementGroup, SubstanceError> {
        if n < 1 {
            return Err(SubstanceError::InvalidMultiplier {
                kind: "ElementGroup",
                value: n,
            });
        }
        Ok(ElementGroup {
            element: self.element,
            size: self.size * n,
        })
    }
}

impl ElementalComposition for ElementGroup {
    fn molecular_weight(&self) -> f64 {
        self.element.atomic_mass * self.size as f64
    }

    fn elements(&self) -> Vec<Element> {
        vec![self.element; self.size as usize]
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.element, self.size)
    }
}

impl Mul<i32> for ElementGroup {
    type Output = ElementGroup;

    /// `(OXYGEN * 2) * 3` produces O6. Panics when the multiplier is zero or
    /// negative; [`ElementGroup::times`] is the checked variant.
    fn mul(self, rhs: i32) -> Self::Output {
        match self.times(rhs) {
            Ok(group) => group,
            Err(e) => panic!("{}", e),
        }
    }
}

/// A chemical compound: elements and element groups in declaration order.
///
/// Components with the same atom are kept as declared, they are not merged:
/// `compound![HYDROGEN, HYDROGEN]` renders "HH" and stays distinct from
/// `compound![HYDROGEN * 2]` although both weigh the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compound {
    components: Vec<CompoundComponent>,
}

impl Compound {
    pub fn new(components: Vec<CompoundComponent>) -> Self {
        Compound { components }
    }

    pub fn components(&self) -> &[CompoundComponent] {
        &self.components
    }
}

impl ElementalComposition for Compound {
    fn molecular_weight(&self) -> f64 {
        self.components
            .iter()
            .map(|component| component.molecular_weight())
            .sum()
    }

    fn elements(&self) -> Vec<Element> {
        self.components
            .iter()
            .flat_map(|component| component.elements())
            .collect()
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

/// Component of a compound: a single element or a group of identical atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[enum_dispatch(ElementalComposition)]
pub enum CompoundComponent {
    Element(Element),
    ElementGroup(ElementGroup),
}

impl fmt::Display for CompoundComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundComponent::Element(element) => write!(f, "{}", element),
            CompoundComponent::ElementGroup(group) => write!(f, "{}", group),
        }
    }
}

/// A chemical substance: the closed set of kinds the algebra operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[enum_dispatch(ElementalComposition)]
pub enum Substance {
    Element(Element),
    ElementGroup(ElementGroup),
    Compound(Compound),
}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substance::Element(element) => write!(f, "{}", element),
            Substance::ElementGroup(group) => write!(f, "{}", group),
            Substance::Compound(compound) => write!(f, "{}", compound),
        }
    }
}

/// Builds a [`Compound`] from elements and element groups in declaration order.
///
/// # Examples
/// ```
/// use StoiThe::Substances::constants::{CARBON, OXYGEN};
/// use StoiThe::compound;
/// let carbon_dioxide = compound![CARBON, OXYGEN * 2];
/// assert_eq!(carbon_dioxide.to_string(), "CO2");
/// ```
#[macro_export]
macro_rules! compound {
    ($($component:expr),+ $(,)?) => {
        $crate::Substances::substance::Compound::new(vec![
            $($crate::Substances::substance::CompoundComponent::from($component)),+
        ])
    };
}
