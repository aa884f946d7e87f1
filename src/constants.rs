/// A single addressable storage unit.
pub type Word = u16;
/// Offset into a memory block, counted in words (not bytes).
pub type Address = u32;

/// 64K words, used when no capacity is given on the command line.
pub const DEFAULT_CAPACITY: u32 = 1024 * 64;

/// Returned by reads past the end of memory. Nothing drives the bus there.
pub const OPEN_BUS: Word = 0x0000;

pub const WORD_BYTES: usize = std::mem::size_of::<Word>();

pub const IMAGE_FILE_EXT: &str = "bin";

/// Comment marker for monitor scripts.
pub const COMMENT_PREFIX: char = '#';
