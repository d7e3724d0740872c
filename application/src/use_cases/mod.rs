//! Use cases (application services)

pub mod complete;
