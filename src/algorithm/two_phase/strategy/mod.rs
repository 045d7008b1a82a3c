//! # Strategies
//!
//! Interchangeable pieces of decision logic used within the simplex method.
pub mod pivot_rule;
