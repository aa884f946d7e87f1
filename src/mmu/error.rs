use std::fmt;

use crate::constants::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// The backing storage could not be reserved.
    Allocation { capacity: u32 },
    OutOfRange { address: Address, capacity: u32 },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::Allocation { capacity } => {
                write!(f, "Failed to allocate {} words of memory", capacity)
            }
            MemoryError::OutOfRange { address, capacity } => write!(
                f,
                "Address {:#06x} out of range for memory of {} words",
                address, capacity
            ),
        }
    }
}

impl std::error::Error for MemoryError {}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_display_allocation() {
        let err = MemoryError::Allocation { capacity: 16 };
        assert_eq!(format!("{}", err), "Failed to allocate 16 words of memory");
    }

    #[test]
    fn test_display_out_of_range() {
        let err = MemoryError::OutOfRange {
            address: 0x10,
            capacity: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Address 0x0010 out of range for memory of 4 words"
        );
    }
}
