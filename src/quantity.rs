#[macro_use]
mod macros;

pub mod power;
pub mod ratios;
