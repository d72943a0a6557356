pub mod animator;
pub mod config;
pub mod frame;
