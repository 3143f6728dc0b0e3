mod coefficients;

pub use coefficients::*;
