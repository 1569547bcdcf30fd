//! Board-agnostic core logic for the Perimetron firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Series engine state and step arithmetic (Leibniz and Nilkantha)
//! - Button event bitset and command dispatch
//! - 4x20 text screen rendering
//! - Run-policy configuration
//! - Display and button collaborator traits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod render;
pub mod series;
pub mod traits;
