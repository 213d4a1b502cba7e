// Domain layer: data shapes, user events and the two ports the controller talks through.

pub mod event;
pub mod model;
pub mod ports;
