//! Progress indication while a completion is in flight

pub mod reporter;
