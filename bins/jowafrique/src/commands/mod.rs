//! Command implementations

pub mod ai;
pub mod favorites;
pub mod health;
pub mod meals;
pub mod plans;
pub mod shopping;
pub mod stats;
