// Domain layer: relative-time model and the clock port. No dependencies beyond chrono/serde.

pub mod model;
pub mod ports;
