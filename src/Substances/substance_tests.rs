///////////////////////TESTS////////////////////////////////////////////
#[cfg(test)]
mod tests {

    use crate::Substances::constants::{
        ALUMINUM, CARBON, CARBON_DIOXIDE, ELEMENTS, HYDROGEN, HYDROGEN2, METHANE, NITROGEN2,
        OXYGEN, OXYGEN2, WATER, element_by_atomic_number, element_by_symbol,
    };
    use crate::Substances::substance::{
        CompoundComponent, Element, ElementalComposition, Substance, SubstanceError,
    };
    use crate::compound;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    #[test]
    fn test_element_accessors_and_display() {
        assert_eq!(OXYGEN.atomic_number, 8);
        assert_eq!(OXYGEN.symbol, "O");
        assert_eq!(OXYGEN.to_string(), "O");
        assert_eq!(OXYGEN.molecular_weight(), 15.999);
        assert_eq!(OXYGEN.elements(), vec![OXYGEN]);
    }

    #[test]
    fn test_element_multiplication_builds_group() {
        let dioxygen = OXYGEN * 2;
        assert_eq!(dioxygen.to_string(), "O2");
        assert_eq!(dioxygen.element(), OXYGEN);
        assert_eq!(dioxygen.size(), 2);
        assert_eq!(dioxygen, OXYGEN2);
        assert_relative_eq!(dioxygen.molecular_weight(), 31.998, epsilon = 1e-9);
    }

    #[test]
    fn test_group_multiplication_scales_size() {
        let hexaoxygen = (OXYGEN * 3) * 2;
        assert_eq!(hexaoxygen.to_string(), "O6");
        assert_eq!(hexaoxygen.size(), 6);
        assert_eq!(OXYGEN2.times(3).unwrap().to_string(), "O6");
    }

    #[test]
    fn test_checked_multiplication_rejects_nonpositive() {
        assert_eq!(
            OXYGEN.times(0),
            Err(SubstanceError::InvalidMultiplier {
                kind: "Element",
                value: 0
            })
        );
        assert_eq!(
            HYDROGEN2.times(-1),
            Err(SubstanceError::InvalidMultiplier {
                kind: "ElementGroup",
                value: -1
            })
        );
        let e = OXYGEN.times(-3).unwrap_err();
        assert_eq!(
            e.to_string(),
            "cannot multiply Element with -3; expected a positive integer"
        );
    }

    #[test]
    #[should_panic(expected = "expected a positive integer")]
    fn test_element_multiplication_by_zero_panics() {
        let _ = OXYGEN * 0;
    }

    #[test]
    #[should_panic(expected = "expected a positive integer")]
    fn test_group_multiplication_by_negative_panics() {
        let _ = OXYGEN2 * -1;
    }

    #[test]
    fn test_compound_rendering_and_weights() {
        assert_eq!(METHANE.to_string(), "CH4");
        assert_relative_eq!(METHANE.molecular_weight(), 16.043, epsilon = 1e-9);
        assert_eq!(WATER.to_string(), "H2O");
        assert_relative_eq!(WATER.molecular_weight(), 18.015, epsilon = 1e-9);
        assert_eq!(CARBON_DIOXIDE.to_string(), "CO2");
        assert_relative_eq!(CARBON_DIOXIDE.molecular_weight(), 44.009, epsilon = 1e-9);
    }

    #[test]
    fn test_compound_components_are_kept_as_declared() {
        let atom_pair = compound![HYDROGEN, HYDROGEN];
        let molecular = compound![HYDROGEN * 2];
        assert_eq!(atom_pair.to_string(), "HH");
        assert_eq!(molecular.to_string(), "H2");
        assert_ne!(atom_pair, molecular);
        assert_relative_eq!(
            atom_pair.molecular_weight(),
            molecular.molecular_weight(),
            epsilon = 1e-9
        );
        assert_eq!(atom_pair.elements(), molecular.elements());
        assert_eq!(atom_pair.components().len(), 2);
        assert_eq!(molecular.components().len(), 1);
    }

    #[test]
    fn test_structural_formula_order() {
        let ethanol = compound![CARBON, HYDROGEN * 3, CARBON, HYDROGEN * 2, OXYGEN, HYDROGEN];
        assert_eq!(ethanol.to_string(), "CH3CH2OH");
        assert_relative_eq!(ethanol.molecular_weight(), 46.069, epsilon = 1e-9);
        assert_eq!(ethanol.elements().len(), 9);
    }

    #[test]
    fn test_elements_expansion_one_entry_per_atom() {
        assert_eq!(HYDROGEN2.elements(), vec![HYDROGEN, HYDROGEN]);
        assert_eq!(
            METHANE.elements(),
            vec![CARBON, HYDROGEN, HYDROGEN, HYDROGEN, HYDROGEN]
        );
        assert_eq!(WATER.elements(), vec![HYDROGEN, HYDROGEN, OXYGEN]);
    }

    #[test]
    fn test_element_value_equality_and_hashing() {
        let oxygen_copy = Element::new(8, 15.999, "O");
        assert_eq!(oxygen_copy, OXYGEN);
        assert_ne!(HYDROGEN, OXYGEN);
        let mut counts: HashMap<Element, usize> = HashMap::new();
        counts.insert(OXYGEN, 2);
        assert_eq!(counts.get(&oxygen_copy), Some(&2));
    }

    #[test]
    fn test_substance_conversions_and_display() {
        assert_eq!(Substance::from(OXYGEN).to_string(), "O");
        assert_eq!(Substance::from(OXYGEN2).to_string(), "O2");
        assert_eq!(Substance::from(WATER.clone()).to_string(), "H2O");
        let component = CompoundComponent::from(NITROGEN2);
        assert_eq!(component.to_string(), "N2");
        assert_relative_eq!(component.molecular_weight(), 28.014, epsilon = 1e-9);
    }

    #[test]
    fn test_substance_dispatches_composition() {
        let substances: Vec<Substance> = vec![CARBON.into(), OXYGEN2.into(), WATER.clone().into()];
        let weights: Vec<f64> = substances.iter().map(|s| s.molecular_weight()).collect();
        assert_relative_eq!(weights[0], 12.011, epsilon = 1e-9);
        assert_relative_eq!(weights[1], 31.998, epsilon = 1e-9);
        assert_relative_eq!(weights[2], 18.015, epsilon = 1e-9);
        assert_eq!(substances[2].elements().len(), 3);
    }

    #[test]
    fn test_element_lookup_helpers() {
        assert_eq!(element_by_symbol("Al"), Some(ALUMINUM));
        assert_eq!(element_by_symbol("Xx"), None);
        assert_eq!(element_by_atomic_number(6), Some(CARBON));
        assert_eq!(element_by_atomic_number(200), None);
        assert_eq!(ELEMENTS.len(), 58);
        assert!(
            ELEMENTS
                .windows(2)
                .all(|pair| pair[0].atomic_number < pair[1].atomic_number)
        );
    }
}
