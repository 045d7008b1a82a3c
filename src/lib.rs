//! # A linear program solver
//!
//! Linear programs given in general form are brought into standard equality form and solved with
//! the two phase Simplex method, as described in the book Combinatorial Optimization by Christos
//! H. Papadimitriou and Kenneth Steiglitz. All arithmetic is double precision floating point over
//! dense matrices.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
