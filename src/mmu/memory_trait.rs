use crate::constants::{Address, Word};
use crate::mmu::MemoryError;

/// Word-addressed storage as seen by a datapath.
///
/// `read` and `write` never fail: out-of-range reads yield open bus and
/// out-of-range writes are dropped. Use the `try_` variants to observe those
/// accesses.
pub trait WordMemory {
    fn read(&self, addr: Address) -> Word;
    fn write(&mut self, addr: Address, val: Word);
    fn capacity(&self) -> u32;

    fn contains(&self, addr: Address) -> bool {
        addr < self.capacity()
    }

    fn try_read(&self, addr: Address) -> Result<Word, MemoryError> {
        if self.contains(addr) {
            Ok(self.read(addr))
        } else {
            Err(self.out_of_range(addr))
        }
    }

    fn try_write(&mut self, addr: Address, val: Word) -> Result<(), MemoryError> {
        if self.contains(addr) {
            self.write(addr, val);
            Ok(())
        } else {
            Err(self.out_of_range(addr))
        }
    }

    // Reads up to `len` consecutive words, stopping at the end of memory.
    fn read_block(&self, start: Address, len: usize) -> Vec<Word> {
        let available = self.capacity().saturating_sub(start);
        let len = u32::try_from(len).map_or(available, |len| len.min(available));
        (0..len).map(|i| self.read(start + i)).collect()
    }

    /// Writes `words` starting at `start`. Returns how many landed in range.
    fn write_block(&mut self, start: Address, words: &[Word]) -> usize {
        let mut stored = 0;
        for (i, &val) in words.iter().enumerate() {
            let Some(addr) = u32::try_from(i).ok().and_then(|i| start.checked_add(i)) else {
                break;
            };
            if self.contains(addr) {
                self.write(addr, val);
                stored += 1;
            }
        }
        stored
    }

    fn out_of_range(&self, addr: Address) -> MemoryError {
        MemoryError::OutOfRange {
            address: addr,
            capacity: self.capacity(),
        }
    }
}
