/// examples of the substance algebra, reaction building and matrix views
pub mod stoichiometry_examples;
/// examples of standard thermodynamic change calculations
pub mod thermochemistry_examples;
