//! Untyped request input and its conversion into typed payloads.

pub mod crafts;
