use super::error::LoadError;
use super::validation::validate_extension;
use crate::constants::{WORD_BYTES, Word};
use log::info;
use std::fs;
use std::path::Path;

/// Reads a raw image of little-endian words from disk.
pub fn load_image(path: &Path) -> Result<Vec<Word>, LoadError> {
    validate_extension(path)?;

    let buffer = fs::read(path)?;
    let words = decode_words(&buffer)?;

    info!("Loaded image {:?}, {} words", path, words.len());
    Ok(words)
}

pub fn decode_words(bytes: &[u8]) -> Result<Vec<Word>, LoadError> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(LoadError::OddLength(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|pair| Word::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
