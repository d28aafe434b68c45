//! Configuration search for chained clock dividers: given a target output
//! frequency for a peripheral clock derived from a fixed bus clock through
//! cascaded multiplexer/divider stages, find the divisor selection for each
//! stage that lands closest to the target.
//!
//! The reference configuration is a 16 MHz bus clock feeding two stages with
//! divisors {1, 2, 4, 8, 16} and {1, 2, 3, 4, 5}; [`configure_frequency`] is
//! the entry point for it. Chains of any depth can be built directly with
//! [`DividerChain`] and [`DividerStage`].

#![cfg_attr(not(test), no_std)]

pub mod divider;
mod error;

pub use divider::{BUS_CLOCK, DividerChain, DividerStage, configure_frequency};
pub use error::{Error, Result};
