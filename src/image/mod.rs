mod error;
mod loader;
mod validation;

pub use error::LoadError;
pub use loader::{decode_words, load_image};
