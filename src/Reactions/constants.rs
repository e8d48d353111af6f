//! Named reactions of the synthesis gas chemistry. Both are balance-checked at
//! first use; the panic branch is unreachable for these fixed definitions.
use crate::Reactions::reaction::{Reaction, reaction};
use crate::Substances::constants::{CARBON_DIOXIDE, CARBON_MONOXIDE, HYDROGEN2, METHANE, WATER};
use std::sync::LazyLock;

/// CH4 + H2O -> CO + 3H2
pub static STEAM_METHANE_REFORMING: LazyLock<Reaction> = LazyLock::new(|| {
    match reaction(
        METHANE.clone() + WATER.clone(),
        CARBON_MONOXIDE.clone() + 3 * HYDROGEN2,
    ) {
        Ok(reaction) => reaction,
        Err(e) => panic!("{}", e),
    }
});

/// CO + H2O -> CO2 + H2
pub static WATER_GAS_SHIFT: LazyLock<Reaction> = LazyLock::new(|| {
    match reaction(
        CARBON_MONOXIDE.clone() + WATER.clone(),
        CARBON_DIOXIDE.clone() + HYDROGEN2,
    ) {
        Ok(reaction) => reaction,
        Err(e) => panic!("{}", e),
    }
});
