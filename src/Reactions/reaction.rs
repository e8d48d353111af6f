//! # Chemical Reaction Module
//!
//! ## Aim
//! This module pairs substances into validated chemical reactions. A reaction is
//! built from two operands, the reactants and the products; each operand is a sum
//! of factors, and a factor is a substance scaled by its stoichiometric
//! coefficient. The atom balance is checked once at construction, so every
//! `Reaction` value that exists is balanced. Standard enthalpy, Gibbs energy and
//! entropy changes are derived from a [`PropertiesRegistry`] and cached per
//! instance.
//!
//! ## Main Data Structures and Logic
//! - `ReactionFactor`: substance plus positive stoichiometric coefficient
//! - `ReactionOperand`: ordered sum of factors, one side of a reaction
//! - `Reaction`: balance-validated pair of operands with memoized thermochemistry
//! - bare substances and factors normalize into one-factor operands through `From`
//!   conversions, so `reaction(OXYGEN2, OXYGEN * 2)` just works
//!
//! ## Key Methods
//! - `reaction()` / `Reaction::new()`: validated construction
//! - `standard_enthalpy_change()`, `standard_gibbs_energy_change()`,
//!   `standard_entropy_change()`: registry-driven derivations
//! - `element_composition_matrix()`, `stoichiometric_vector()`: nalgebra views of
//!   the reaction for stoichiometric analysis
//!
//! ## Usage
//! ```
//! use StoiThe::Reactions::reaction::reaction;
//! use StoiThe::Substances::constants::{CARBON_DIOXIDE, CARBON_MONOXIDE, OXYGEN2};
//! let combustion = reaction(
//!     2 * CARBON_MONOXIDE.clone() + OXYGEN2,
//!     2 * CARBON_DIOXIDE.clone(),
//! )
//! .unwrap();
//! assert_eq!(combustion.to_string(), "2CO + O2 -> 2CO2");
//! ```
use crate::Properties::quantities::{Entropy, MolarEnergy};
use crate::Properties::registry::PropertiesRegistry;
use crate::Substances::substance::{
    Compound, Element, ElementGroup, ElementalComposition, Substance, SubstanceError,
};
use log::warn;
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Mul};
use std::sync::OnceLock;
use thiserror::Error;

/// error types for reaction construction
#[derive(Debug, Error, PartialEq)]
pub enum ReactionError {
    #[error("{reaction} is not balanced; the number of atoms of each species on the left side should equal the number of atoms of that species on the right side")]
    Unbalanced { reaction: String },
    #[error(transparent)]
    Substance(#[from] SubstanceError),
}

/// A chemical substance scaled by its stoichiometric coefficient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionFactor {
    substance: Substance,
    stoichiometric_coefficient: i32,
}

impl ReactionFactor {
    /// Wraps a substance with the default coefficient of 1.
    pub fn new(substance: impl Into<Substance>) -> Self {
        ReactionFactor {
            substance: substance.into(),
            stoichiometric_coefficient: 1,
        }
    }

    /// Wraps a substance with the given stoichiometric coefficient. The
    /// coefficient must be a positive integer.
    pub fn with_coefficient(
        substance: impl Into<Substance>,
        coefficient: i32,
    ) -> Result<Self, SubstanceError> {
        let substance = substance.into();
        if coefficient < 1 {
            return Err(SubstanceError::InvalidCoefficient {
                substance: substance.to_string(),
                value: coefficient,
            });
        }
        Ok(ReactionFactor {
            substance,
            stoichiometric_coefficient: coefficient,
        })
    }

    pub fn substance(&self) -> &Substance {
        &self.substance
    }

    pub fn stoichiometric_coefficient(&self) -> i32 {
        self.stoichiometric_coefficient
    }

    /// Atoms this factor contributes to its side of the reaction: the substance
    /// atom sequence repeated coefficient times.
    pub fn stoichiometric_elements(&self) -> Vec<Element> {
        let atoms = self.substance.elements();
        if self.stoichiometric_coefficient == 1 {
            return atoms;
        }
        let mut elements =
            Vec::with_capacity(atoms.len() * self.stoichiometric_coefficient as usize);
        for _ in 0..self.stoichiometric_coefficient {
            elements.extend_from_slice(&atoms);
        }
        elements
    }
}

impl fmt::Display for ReactionFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stoichiometric_coefficient > 1 {
            write!(f, "{}{}", self.stoichiometric_coefficient, self.substance)
        } else {
            write!(f, "{}", self.substance)
        }
    }
}

impl From<Element> for ReactionFactor {
    fn from(element: Element) -> Self {
        ReactionFactor::new(element)
    }
}

impl From<ElementGroup> for ReactionFactor {
    fn from(group: ElementGroup) -> Self {
        ReactionFactor::new(group)
    }
}

impl From<Compound> for ReactionFactor {
    fn from(compound: Compound) -> Self {
        ReactionFactor::new(compound)
    }
}

impl From<Substance> for ReactionFactor {
    fn from(substance: Substance) -> Self {
        ReactionFactor::new(substance)
    }
}

/// `2 * OXYGEN` attaches a stoichiometric coefficient to the element, while
/// `OXYGEN * 2` builds the element group O2. Panics when the coefficient is zero
/// or negative; [`ReactionFactor::with_coefficient`] is the checked variant.
impl Mul<Element> for i32 {
    type Output = ReactionFactor;

    fn mul(self, rhs: Element) -> Self::Output {
        match ReactionFactor::with_coefficient(rhs, self) {
            Ok(factor) => factor,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<ElementGroup> for i32 {
    type Output = ReactionFactor;

    fn mul(self, rhs: ElementGroup) -> Self::Output {
        match ReactionFactor::with_coefficient(rhs, self) {
            Ok(factor) => factor,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<Compound> for i32 {
    type Output = ReactionFactor;

    fn mul(self, rhs: Compound) -> Self::Output {
        match ReactionFactor::with_coefficient(rhs, self) {
            Ok(factor) => factor,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<Substance> for i32 {
    type Output = ReactionFactor;

    fn mul(self, rhs: Substance) -> Self::Output {
        match ReactionFactor::with_coefficient(rhs, self) {
            Ok(factor) => factor,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Sum of reaction factors forming one side of a chemical reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionOperand {
    factors: Vec<ReactionFactor>,
}

impl ReactionOperand {
    pub fn new(factors: Vec<ReactionFactor>) -> Self {
        ReactionOperand { factors }
    }

    pub fn factors(&self) -> &[ReactionFactor] {
        &self.factors
    }
}

impl<'a> IntoIterator for &'a ReactionOperand {
    type Item = &'a ReactionFactor;
    type IntoIter = std::slice::Iter<'a, ReactionFactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}

impl fmt::Display for ReactionOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .factors
            .iter()
            .map(|factor| factor.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        write!(f, "{}", rendered)
    }
}

impl From<ReactionFactor> for ReactionOperand {
    fn from(factor: ReactionFactor) -> Self {
        ReactionOperand::new(vec![factor])
    }
}

impl From<Element> for ReactionOperand {
    fn from(element: Element) -> Self {
        ReactionFactor::new(element).into()
    }
}

impl From<ElementGroup> for ReactionOperand {
    fn from(group: ElementGroup) -> Self {
        ReactionFactor::new(group).into()
    }
}

impl From<Compound> for ReactionOperand {
    fn from(compound: Compound) -> Self {
        ReactionFactor::new(compound).into()
    }
}

impl From<Substance> for ReactionOperand {
    fn from(substance: Substance) -> Self {
        ReactionFactor::new(substance).into()
    }
}

// Addition of substances and factors builds up reaction operands. Anything
// convertible to a factor is accepted on the right hand side; adding two
// operands is not defined.
impl<T: Into<ReactionFactor>> Add<T> for Element {
    type Output = ReactionOperand;

    fn add(self, rhs: T) -> Self::Output {
        ReactionOperand::new(vec![ReactionFactor::new(self), rhs.into()])
    }
}

impl<T: Into<ReactionFactor>> Add<T> for ElementGroup {
    type Output = ReactionOperand;

    fn add(self, rhs: T) -> Self::Output {
        ReactionOperand::new(vec![ReactionFactor::new(self), rhs.into()])
    }
}

impl<T: Into<ReactionFactor>> Add<T> for Compound {
    type Output = ReactionOperand;

    fn add(self, rhs: T) -> Self::Output {
        ReactionOperand::new(vec![ReactionFactor::new(self), rhs.into()])
    }
}

impl<T: Into<ReactionFactor>> Add<T> for Substance {
    type Output = ReactionOperand;

    fn add(self, rhs: T) -> Self::Output {
        ReactionOperand::new(vec![ReactionFactor::new(self), rhs.into()])
    }
}

impl<T: Into<ReactionFactor>> Add<T> for ReactionFactor {
    type Output = ReactionOperand;

    fn add(self, rhs: T) -> Self::Output {
        ReactionOperand::new(vec![self, rhs.into()])
    }
}

impl<T: Into<ReactionFactor>> Add<T> for ReactionOperand {
    type Output = ReactionOperand;

    fn add(self, rhs: T) -> Self::Output {
        let mut factors = self.factors;
        factors.push(rhs.into());
        ReactionOperand::new(factors)
    }
}

/// Creates a balance-validated chemical reaction.
///
/// # Examples
/// ```
/// use StoiThe::Reactions::reaction::reaction;
/// use StoiThe::Substances::constants::{CARBON_DIOXIDE, CARBON_MONOXIDE, OXYGEN2};
/// let combustion = reaction(
///     2 * CARBON_MONOXIDE.clone() + OXYGEN2,
///     2 * CARBON_DIOXIDE.clone(),
/// )
/// .unwrap();
/// assert_eq!(combustion.to_string(), "2CO + O2 -> 2CO2");
/// ```
pub fn reaction(
    reactants: impl Into<ReactionOperand>,
    products: impl Into<ReactionOperand>,
) -> Result<Reaction, ReactionError> {
    Reaction::new(reactants, products)
}

/// A chemical reaction: reactants and products with a validated atom balance.
#[derive(Debug, Clone)]
pub struct Reaction {
    reactants: ReactionOperand,
    products: ReactionOperand,
    enthalpy_change: OnceLock<Option<MolarEnergy>>,
    gibbs_energy_change: OnceLock<Option<MolarEnergy>>,
    entropy_change: OnceLock<Option<Entropy>>,
}

impl Reaction {
    /// Pairs reactants with products. Fails with [`ReactionError::Unbalanced`]
    /// when the per-element atom counts of the two sides differ; an unbalanced
    /// `Reaction` value never exists.
    pub fn new(
        reactants: impl Into<ReactionOperand>,
        products: impl Into<ReactionOperand>,
    ) -> Result<Self, ReactionError> {
        let reactants = reactants.into();
        let products = products.into();
        if Self::count_elements(&reactants) != Self::count_elements(&products) {
            return Err(ReactionError::Unbalanced {
                reaction: format!("{} -> {}", reactants, products),
            });
        }
        Ok(Reaction {
            reactants,
            products,
            enthalpy_change: OnceLock::new(),
            gibbs_energy_change: OnceLock::new(),
            entropy_change: OnceLock::new(),
        })
    }

    pub fn reactants(&self) -> &ReactionOperand {
        &self.reactants
    }

    pub fn products(&self) -> &ReactionOperand {
        &self.products
    }

    fn count_elements(operand: &ReactionOperand) -> HashMap<Element, usize> {
        let mut counts = HashMap::new();
        for factor in operand {
            for element in factor.stoichiometric_elements() {
                *counts.entry(element).or_insert(0) += 1;
            }
        }
        counts
    }

    // products count positive, reactants negative
    fn signed_factors(&self) -> impl Iterator<Item = (i32, &ReactionFactor)> {
        self.products
            .factors()
            .iter()
            .map(|factor| (1, factor))
            .chain(self.reactants.factors().iter().map(|factor| (-1, factor)))
    }

    /// Standard enthalpy change of the reaction: coefficient-weighted formation
    /// enthalpies of the products minus those of the reactants.
    ///
    /// Returns `None` when any participating substance has no formation
    /// properties in the registry; partial sums are never exposed. The first
    /// derived value is cached for the lifetime of this instance, so registry
    /// entries for the participating substances are expected to stay unchanged
    /// once populated.
    pub fn standard_enthalpy_change(&self, registry: &PropertiesRegistry) -> Option<MolarEnergy> {
        *self
            .enthalpy_change
            .get_or_init(|| self.derive_enthalpy_change(registry))
    }

    /// Standard Gibbs energy change of the reaction, derived and cached the same
    /// way as [`Reaction::standard_enthalpy_change`].
    pub fn standard_gibbs_energy_change(
        &self,
        registry: &PropertiesRegistry,
    ) -> Option<MolarEnergy> {
        *self
            .gibbs_energy_change
            .get_or_init(|| self.derive_gibbs_energy_change(registry))
    }

    /// Standard entropy change of the reaction, derived from the standard
    /// absolute entropies in the registry and cached the same way as
    /// [`Reaction::standard_enthalpy_change`]. The result may be negative.
    pub fn standard_entropy_change(&self, registry: &PropertiesRegistry) -> Option<Entropy> {
        *self
            .entropy_change
            .get_or_init(|| self.derive_entropy_change(registry))
    }

    fn derive_enthalpy_change(&self, registry: &PropertiesRegistry) -> Option<MolarEnergy> {
        let mut change = MolarEnergy::ZERO;
        for (sign, factor) in self.signed_factors() {
            let Some(properties) = registry.get_formation_properties(factor.substance().clone())
            else {
                warn!(
                    "no standard formation properties registered for {}",
                    factor.substance()
                );
                return None;
            };
            change = change + properties.enthalpy * (sign * factor.stoichiometric_coefficient());
        }
        Some(change)
    }

    fn derive_gibbs_energy_change(&self, registry: &PropertiesRegistry) -> Option<MolarEnergy> {
        let mut change = MolarEnergy::ZERO;
        for (sign, factor) in self.signed_factors() {
            let Some(properties) = registry.get_formation_properties(factor.substance().clone())
            else {
                warn!(
                    "no standard formation properties registered for {}",
                    factor.substance()
                );
                return None;
            };
            change =
                change + properties.gibbs_energy * (sign * factor.stoichiometric_coefficient());
        }
        Some(change)
    }

    fn derive_entropy_change(&self, registry: &PropertiesRegistry) -> Option<Entropy> {
        let mut change = Entropy::ZERO;
        for (sign, factor) in self.signed_factors() {
            let Some(entropy) = registry.get_standard_entropy(factor.substance().clone()) else {
                warn!(
                    "no standard entropy registered for {}",
                    factor.substance()
                );
                return None;
            };
            change = change + entropy * (sign * factor.stoichiometric_coefficient());
        }
        Some(change)
    }

    /// Element composition matrix of the reaction: one row per factor, reactants
    /// first, one column per distinct element in order of first appearance. The
    /// entry is the number of atoms of the element in one formula unit of the
    /// factor substance, unscaled by the stoichiometric coefficient.
    pub fn element_composition_matrix(&self) -> (DMatrix<f64>, Vec<Element>) {
        let factors: Vec<&ReactionFactor> = self
            .reactants
            .factors()
            .iter()
            .chain(self.products.factors().iter())
            .collect();
        let mut columns: Vec<Element> = Vec::new();
        let mut index: HashMap<Element, usize> = HashMap::new();
        for factor in &factors {
            for element in factor.substance().elements() {
                if !index.contains_key(&element) {
                    index.insert(element, columns.len());
                    columns.push(element);
                }
            }
        }
        let mut matrix = DMatrix::zeros(factors.len(), columns.len());
        for (i, factor) in factors.iter().enumerate() {
            for element in factor.substance().elements() {
                if let Some(&j) = index.get(&element) {
                    matrix[(i, j)] += 1.0;
                }
            }
        }
        (matrix, columns)
    }

    /// Signed stoichiometric coefficients in the row order of
    /// [`Reaction::element_composition_matrix`]: reactants negative, products
    /// positive. For every reaction the transposed composition matrix times this
    /// vector is zero, which is the balance invariant in matrix form.
    pub fn stoichiometric_vector(&self) -> DVector<f64> {
        let reactants = self
            .reactants
            .factors()
            .iter()
            .map(|factor| -(factor.stoichiometric_coefficient() as f64));
        let products = self
            .products
            .factors()
            .iter()
            .map(|factor| factor.stoichiometric_coefficient() as f64);
        DVector::from_iterator(
            self.reactants.factors().len() + self.products.factors().len(),
            reactants.chain(products),
        )
    }
}

// derived thermochemistry caches do not take part in reaction identity
impl PartialEq for Reaction {
    fn eq(&self, other: &Self) -> bool {
        self.reactants == other.reactants && self.products == other.products
    }
}

impl Eq for Reaction {}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.reactants, self.products)
    }
}
