//! Review scheduling: projection, validation and the provider port

pub mod ports;
pub mod projection;
pub mod validation;
