//! # Linear algebra
//!
//! A dense matrix back-end and the row reduction machinery built on it.
pub mod matrix;

/// Default zero tolerance.
///
/// Row reduction, pivot selection and feasibility checks compare against a tolerance rather than
/// testing floating point values for exact equality. Operations that need a tolerance take it as
/// an explicit argument; this is the value the solver threads through by default.
pub const EPSILON: f64 = 1e-10;
