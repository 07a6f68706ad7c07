// Domain layer: content model, fallback dataset and the capability traits the hooks depend on.

pub mod fallback;
pub mod model;
pub mod ports;
