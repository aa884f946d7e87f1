mod controller;
mod error;
mod memory_trait;

pub use controller::MemoryController;
pub use error::MemoryError;
pub use memory_trait::WordMemory;
