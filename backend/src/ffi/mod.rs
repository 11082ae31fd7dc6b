//! Python bindings for the presentation layer
//!
//! The map front end calls into the core through these functions whenever a
//! parameter changes or a zone is clicked. Input errors surface in Python as
//! `ValueError`.

pub mod functions;
pub mod types;
