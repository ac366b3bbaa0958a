// Domain layer: shape descriptions, materialized objects and ports (interfaces).

pub mod model;
pub mod ports;
