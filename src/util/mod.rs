//! Implementations that are useful accross the whole project
//!
//! Keypad token definitions, the reduction engine, and entry aggregation

pub mod entry;
pub mod evaluate;
pub mod normalize;
pub mod number;
pub mod session;
pub mod summary;
pub mod token;
