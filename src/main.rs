#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Properties;
#[allow(non_snake_case)]
pub mod Reactions;
#[allow(non_snake_case)]
pub mod Substances;

use Examples::stoichiometry_examples::stoichiometry_examples;
use Examples::thermochemistry_examples::thermochemistry_examples;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    //
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let task: usize = 1;
    thermochemistry_examples(task);
}
