use yoda_memory::mmu::MemoryController;

pub fn controller(capacity: u32) -> MemoryController {
    MemoryController::new(capacity).expect("test capacity must allocate")
}

/// Deterministic test pattern for slot `addr`.
#[allow(dead_code)]
pub fn pattern(addr: u32) -> u16 {
    (addr as u16).wrapping_mul(0x9E37) ^ 0x5A5A
}
