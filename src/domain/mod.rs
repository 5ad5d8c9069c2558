// Domain layer: value types and the ports the flows talk through.

pub mod model;
pub mod ports;
