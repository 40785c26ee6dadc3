// Domain layer: the mobile record model and the console port.

pub mod model;
pub mod ports;
