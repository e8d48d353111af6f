use crate::Properties::standard_data::standard_properties_registry;
use crate::Reactions::constants::{STEAM_METHANE_REFORMING, WATER_GAS_SHIFT};
use crate::Substances::constants::METHANE;
use approx::assert_relative_eq;

pub fn thermochemistry_examples(task: usize) {
    //
    match task {
        0 => {
            // tabulated standard state data as a table and as JSON
            let registry = standard_properties_registry().unwrap();
            registry.pretty_print();
            let report = registry.to_json().unwrap();
            println!("{}", report);
        }
        1 => {
            let registry = standard_properties_registry().unwrap();
            let critical = registry.get_critical_properties(METHANE.clone()).unwrap();
            println!(
                "methane critical point: {}, {}, {}",
                critical.temperature, critical.pressure, critical.volume
            );
            let shift = &*WATER_GAS_SHIFT;
            println!("{}", shift);
            let dh = shift.standard_enthalpy_change(&registry).unwrap();
            let dg = shift.standard_gibbs_energy_change(&registry).unwrap();
            let ds = shift.standard_entropy_change(&registry).unwrap();
            println!("dH = {}", dh);
            println!("dG = {}", dg);
            println!("dS = {}", ds);
            assert_relative_eq!(dh.value(), -4.1154e7, max_relative = 1e-9);
            assert!(dg.value() < 0.0);
        }
        2 => {
            let registry = standard_properties_registry().unwrap();
            let reforming = &*STEAM_METHANE_REFORMING;
            println!("{}", reforming);
            let dh = reforming.standard_enthalpy_change(&registry).unwrap();
            let dg = reforming.standard_gibbs_energy_change(&registry).unwrap();
            let ds = reforming.standard_entropy_change(&registry).unwrap();
            println!("dH = {}", dh);
            println!("dG = {}", dg);
            println!("dS = {}", ds);
            if dg.value() > 0.0 {
                println!("not spontaneous at standard conditions");
            }
            assert!(dh.value() > 0.0);
            assert!(ds.value() > 0.0);
        }
        _ => println!("Invalid task number"),
    }
}
