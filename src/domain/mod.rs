//! Core domain types for the donation checkout flow.
//!
//! This module contains the domain types of a checkout session:
//! - Campaigns and the lookup contract
//! - Donation typestate machine

pub mod campaign;
pub mod donation;
