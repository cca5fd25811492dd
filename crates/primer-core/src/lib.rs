//! primer-core - Pure arithmetic and greeting functions
//!
//! This crate contains no I/O, no logging, and no CLI concerns.
//! Everything here is a plain function of its inputs.

#![forbid(unsafe_code)]

mod arithmetic;
mod error;
mod greeting;

pub use arithmetic::{add, checked_add, checked_multiply, evaluate, multiply, Operation};
pub use error::ArithmeticError;
pub use greeting::greet;
