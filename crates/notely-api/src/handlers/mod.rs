//! HTTP request handlers

mod notes;

pub use notes::{read_note, save_note};
