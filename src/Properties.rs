/// physical quantity newtypes with unit-aware validation and rendering
pub mod quantities;
/// registry of critical, formation and entropy data keyed by substance
pub mod registry;
/// tabulated standard state data for the synthesis gas substances
pub mod standard_data;
