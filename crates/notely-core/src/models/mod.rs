//! Domain models

mod note;

pub use note::Note;
