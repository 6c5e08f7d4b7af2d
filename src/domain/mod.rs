// Domain layer: core models and ports. No AWS types leak in here.

pub mod model;
pub mod ports;
