#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Properties;
#[allow(non_snake_case)]
pub mod Reactions;
#[allow(non_snake_case)]
pub mod Substances;
