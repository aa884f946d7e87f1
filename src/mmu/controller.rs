use log::{debug, trace};

use crate::constants::{Address, OPEN_BUS, Word};
use crate::mmu::{MemoryError, WordMemory};

/// A fixed block of 16-bit words, allocated once at construction.
///
/// Storage lives on the heap and its length always equals `capacity`.
/// Contents start zeroed.
pub struct MemoryController {
    capacity: u32,
    storage: Vec<Word>,
}

impl MemoryController {
    /// Allocates `capacity` words.
    ///
    /// Returns [`MemoryError::Allocation`] instead of aborting when the
    /// allocator refuses the request.
    pub fn new(capacity: u32) -> Result<Self, MemoryError> {
        let len = usize::try_from(capacity).map_err(|_| MemoryError::Allocation { capacity })?;

        // Check the allocator first, then let `vec!` hand out zeroed pages
        // so nothing is touched until it is written.
        Vec::<Word>::new()
            .try_reserve_exact(len)
            .map_err(|_| MemoryError::Allocation { capacity })?;
        let storage: Vec<Word> = vec![0; len];

        debug!("Creating MemoryController, capacity: {} words", capacity);

        Ok(MemoryController { capacity, storage })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    pub fn read(&self, addr: Address) -> Word {
        match self.storage.get(addr as usize) {
            Some(&val) => val,
            None => {
                trace!("Read out of range at {:#06x}, returning open bus", addr);
                OPEN_BUS
            }
        }
    }

    pub fn write(&mut self, addr: Address, val: Word) {
        match self.storage.get_mut(addr as usize) {
            Some(slot) => *slot = val,
            None => trace!("Dropped write of {:#06x} to {:#06x}", val, addr),
        }
    }

    pub fn try_read(&self, addr: Address) -> Result<Word, MemoryError> {
        WordMemory::try_read(self, addr)
    }

    pub fn try_write(&mut self, addr: Address, val: Word) -> Result<(), MemoryError> {
        WordMemory::try_write(self, addr, val)
    }

    /// Copies `words` in at `start`. Words past the end are dropped.
    pub fn load(&mut self, start: Address, words: &[Word]) -> usize {
        let stored = self.write_block(start, words);
        debug!(
            "Loaded {} of {} words at {:#06x}",
            stored,
            words.len(),
            start
        );
        stored
    }

    pub fn dump(&self, start: Address, len: usize) -> Vec<Word> {
        self.read_block(start, len)
    }

    pub fn fill(&mut self, val: Word) {
        self.storage.fill(val);
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.storage
    }

    /// Releases the storage. The controller cannot be used afterwards.
    pub fn destroy(self) {}
}

impl WordMemory for MemoryController {
    fn read(&self, addr: Address) -> Word {
        MemoryController::read(self, addr)
    }

    fn write(&mut self, addr: Address, val: Word) {
        MemoryController::write(self, addr, val)
    }

    fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl Drop for MemoryController {
    fn drop(&mut self) {
        debug!("Releasing MemoryController, capacity: {} words", self.capacity);
        self.capacity = 0;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn controller(capacity: u32) -> MemoryController {
        MemoryController::new(capacity).unwrap()
    }

    #[test]
    fn test_new_is_zeroed() {
        let mem = controller(8);
        assert_eq!(mem.capacity(), 8);
        assert_eq!(mem.as_slice(), &[0u16; 8]);
    }

    #[test]
    fn test_storage_len_matches_capacity() {
        for capacity in [0, 1, 2, 255, 4096] {
            let mem = controller(capacity);
            assert_eq!(mem.as_slice().len(), capacity as usize);
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let mut mem = controller(4);
        mem.write(0, 0xBEEF);
        mem.write(3, 0x0001);

        assert_eq!(mem.read(0), 0xBEEF);
        assert_eq!(mem.read(1), 0x0000);
        assert_eq!(mem.read(3), 0x0001);
    }

    #[test]
    fn test_out_of_range_write_is_dropped() {
        let mut mem = controller(2);
        mem.write(0, 0x1234);
        mem.write(5, 0xFFFF);

        assert_eq!(mem.read(0), 0x1234);
        assert_eq!(mem.read(1), 0x0000);
    }

    #[test]
    fn test_out_of_range_read_is_open_bus() {
        let mut mem = controller(2);
        mem.fill(0xAAAA);
        assert_eq!(mem.read(2), OPEN_BUS);
        assert_eq!(mem.read(u32::MAX), OPEN_BUS);
    }

    #[test]
    fn test_zero_capacity() {
        let mut mem = controller(0);
        assert!(!mem.contains(0));
        mem.write(0, 0xFFFF);
        assert_eq!(mem.read(0), OPEN_BUS);
        assert!(mem.as_slice().is_empty());
    }

    #[test]
    fn test_try_access() {
        let mut mem = controller(4);
        assert_eq!(mem.try_write(3, 0x00FF), Ok(()));
        assert_eq!(mem.try_read(3), Ok(0x00FF));
        assert_eq!(
            mem.try_read(4),
            Err(MemoryError::OutOfRange {
                address: 4,
                capacity: 4
            })
        );
        assert_eq!(
            mem.try_write(9, 1),
            Err(MemoryError::OutOfRange {
                address: 9,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_load_truncates_at_end() {
        let mut mem = controller(4);
        let stored = mem.load(2, &[0x1111, 0x2222, 0x3333]);
        assert_eq!(stored, 2);
        assert_eq!(mem.as_slice(), &[0u16, 0, 0x1111, 0x2222]);
    }

    #[test]
    fn test_dump_stops_at_capacity() {
        let mut mem = controller(3);
        mem.fill(0x5A5A);
        assert_eq!(mem.dump(1, 4), vec![0x5A5A, 0x5A5A]);
        assert!(mem.dump(3, 1).is_empty());
    }

    #[test]
    fn test_dump_huge_len_is_bounded() {
        let mem = controller(1);
        assert_eq!(mem.dump(0, usize::MAX), vec![0]);
        assert!(mem.dump(0xFFFF_0000, usize::MAX).is_empty());
        assert!(mem.dump(u32::MAX, 3).is_empty());
    }

    #[test]
    fn test_huge_capacity_does_not_abort() {
        // 8 GiB of words. Hosts that refuse must say so through Allocation;
        // hosts that accept hand back untouched zeroed pages.
        match MemoryController::new(u32::MAX) {
            Ok(mem) => assert_eq!(mem.as_slice().len(), u32::MAX as usize),
            Err(err) => assert_eq!(err, MemoryError::Allocation { capacity: u32::MAX }),
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(controller(0).is_empty());
        assert!(!controller(1).is_empty());
    }

    #[test]
    fn test_destroy() {
        let mut mem = controller(4);
        mem.write(0, 1);
        mem.destroy();
    }
}
