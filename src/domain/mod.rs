// Domain layer: content models, the shared item contract and ports.

pub mod catalog;
pub mod items;
pub mod model;
pub mod ports;
