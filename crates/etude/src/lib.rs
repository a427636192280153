//! Etude - practice utilities
//!
//! This crate provides:
//! - A generic LIFO stack with strict empty-state errors
//! - Math helpers (max, fizz buzz, average)
//! - Input validators (user input, usernames, passwords)
//! - Pricing helpers (coupons, discounts, products)
//! - Driving-age rules

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod driving;
pub mod error;
pub mod math;
pub mod pricing;
pub mod stack;
pub mod validate;

pub use driving::DrivingRules;
pub use error::{Error, Result};
pub use pricing::{Coupon, Product};
pub use stack::Stack;
