//! Donation aggregate - the wizard's draft, states and transitions.
//!
//! This module contains the core domain logic for a checkout session:
//! - Draft and states (typestate pattern)
//! - Transition guards
//! - State transition methods

pub mod state;
pub mod transitions;
pub mod validation;

pub use state::*;
pub use transitions::Rejected;
