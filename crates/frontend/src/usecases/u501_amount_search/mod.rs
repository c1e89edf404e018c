//! Budget and target-profit calculators on the home page.

pub mod view;

pub use view::{CalcResultsSection, CalculatorCard};
