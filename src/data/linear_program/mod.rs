//! # Linear program representations
//!
//! A linear program is built in general form, converted into standard equality form and solved
//! there. The solution is reported in the variable space of the general form problem.
pub mod elements;
pub mod general_form;
pub mod solution;
pub mod standard_form;
