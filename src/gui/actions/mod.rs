// src/gui/actions/mod.rs
pub mod copy;
pub mod export;

pub use copy::copy;
pub use export::export;
