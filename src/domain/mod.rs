// Domain layer: storefront models and the provider ports the pages read from.

pub mod model;
pub mod ports;
