// Domain layer: calculation model and the source port the engine reads from.

pub mod model;
pub mod ports;
