use crate::Reactions::constants::{STEAM_METHANE_REFORMING, WATER_GAS_SHIFT};
use crate::Reactions::reaction::reaction;
use crate::Substances::constants::{
    CARBON, CARBON_DIOXIDE, CARBON_MONOXIDE, ELEMENTS, HYDROGEN, HYDROGEN2, METHANE, NITROGEN2,
    OXYGEN, OXYGEN2, WATER,
};
use crate::Substances::substance::{ElementalComposition, Substance};
use crate::compound;
use prettytable::{Table, row};

pub fn stoichiometry_examples(task: usize) {
    //
    match task {
        0 => {
            // substance algebra: elements, element groups, compounds
            println!("elements on board: {} \n", ELEMENTS.len());
            let dioxygen = OXYGEN * 2;
            println!(
                "{} has molecular weight {}",
                dioxygen,
                dioxygen.molecular_weight()
            );
            let ethanol =
                compound![CARBON, HYDROGEN * 3, CARBON, HYDROGEN * 2, OXYGEN, HYDROGEN];
            println!(
                "{} has molecular weight {} \n",
                ethanol,
                ethanol.molecular_weight()
            );
            let substances: Vec<Substance> = vec![
                HYDROGEN2.into(),
                OXYGEN2.into(),
                NITROGEN2.into(),
                WATER.clone().into(),
                CARBON_MONOXIDE.clone().into(),
                CARBON_DIOXIDE.clone().into(),
                METHANE.clone().into(),
            ];
            let mut table = Table::new();
            table.add_row(row!["Formula", "Molecular weight", "Atoms"]);
            for substance in &substances {
                table.add_row(row![
                    substance,
                    format!("{:.3}", substance.molecular_weight()),
                    substance.elements().len()
                ]);
            }
            table.printstd();
        }
        1 => {
            // balance validation at construction
            let combustion = reaction(
                METHANE.clone() + 2 * OXYGEN2,
                CARBON_DIOXIDE.clone() + 2 * WATER.clone(),
            )
            .unwrap();
            println!("combustion of methane: {}", combustion);
            println!("named reactions: {}", *STEAM_METHANE_REFORMING);
            println!("                 {}", *WATER_GAS_SHIFT);
            match reaction(CARBON_MONOXIDE.clone(), CARBON_DIOXIDE.clone()) {
                Ok(unexpected) => println!("unexpected: {}", unexpected),
                Err(e) => println!("rejected: {}", e),
            }
        }
        2 => {
            // matrix view of the water gas shift
            let (matrix, columns) = WATER_GAS_SHIFT.element_composition_matrix();
            let vector = WATER_GAS_SHIFT.stoichiometric_vector();
            let symbols: Vec<&str> = columns.iter().map(|element| element.symbol).collect();
            println!("element columns: {:?}", symbols);
            println!("composition matrix: {}", matrix);
            println!("stoichiometric vector: {}", vector);
            let residual = matrix.transpose() * vector;
            assert!(residual.iter().all(|x| x.abs() < 1e-12));
            println!("transposed matrix times vector is zero, the reaction is balanced");
        }
        _ => println!("Invalid task number"),
    }
}
