pub mod validation;
pub mod cors;
