//! Non-repeating random photo selection with fallback handling.

mod backdrop;
mod selector;


pub use backdrop::Backdrop;
pub use selector::{ImagePicker, PickerSettings, SelectionPolicy};
