pub mod countup;
pub mod ease;
pub mod interpolate;
