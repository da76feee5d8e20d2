// Domain layer: villa and stay models plus the id generation port.

pub mod model;
pub mod ports;
