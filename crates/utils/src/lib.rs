mod lenient;

pub use lenient::{optional, optional_float, optional_text, patch, patch_float, patch_text};
