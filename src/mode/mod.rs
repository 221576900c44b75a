//! Mode flags that change how the calculator evaluates functions.

mod calculation;

pub use calculation::CalculationMode;
