//! Data export
//!
//! CSV is the interchange format (the encode side of the codec); JSON writes
//! the collection in the same shape as the durable blob.

pub mod csv;
pub mod json;
