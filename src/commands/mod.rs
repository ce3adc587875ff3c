//! Command handlers for the photo-paster CLI.

pub mod paste;
