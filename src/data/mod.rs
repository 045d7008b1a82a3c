//! # Data structures
//!
//! The matrices linear programs are made of, and the linear program representations themselves.
pub mod linear_algebra;
pub mod linear_program;
