pub mod scrub;
pub mod session;
pub mod trigger;
