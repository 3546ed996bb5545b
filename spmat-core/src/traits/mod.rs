//! Abstract interfaces between the calculator and its surroundings
//!
//! The driver obtains an operation and two operands and hands the result to
//! a sink. Traits are pure interfaces; file and console implementations
//! live in the `spmat` crate.

pub mod pipeline;

pub use pipeline::{MatrixSink, MatrixSource, OperationSelector};
