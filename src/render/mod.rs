pub mod style;
pub mod target;
