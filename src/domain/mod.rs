// Domain layer: the per-run records and the ports the pipelines are written against.

pub mod model;
pub mod ports;
