/*!
RAM module: the 2 KiB CPU work RAM with mirrored access.

CPU address map for internal RAM:
- $0000-$00FF: zero page
- $0100-$01FF: hardware stack page
- $0200-$07FF: general purpose RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)

Owned by `MemoryMap`; callers pass CPU addresses and this type masks them
down to the physical store.
*/

use super::regions::CPU_RAM_SIZE;

/// CPU internal RAM with mirrored access helpers.
#[derive(Clone)]
pub struct Ram {
    data: [u8; CPU_RAM_SIZE],
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ram").field("len", &self.data.len()).finish()
    }
}

impl Ram {
    /// Create a new RAM instance initialized to 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; CPU_RAM_SIZE],
        }
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte from CPU-visible RAM space ($0000-$1FFF), applying 2 KiB mirroring.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::mirror_index(addr)]
    }

    /// Write a byte to CPU-visible RAM space ($0000-$1FFF), applying 2 KiB mirroring.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::mirror_index(addr)] = value;
    }

    /// Mutable reference to the backing byte of a CPU-visible RAM address.
    #[inline]
    pub fn cell_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[Self::mirror_index(addr)]
    }

    /// Expose the internal slice (read-only). Useful for diagnostics or hashing.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Compute the physical RAM index for a CPU address using 2 KiB mirroring.
    #[inline]
    pub fn mirror_index(addr: u16) -> usize {
        (addr as usize) & (CPU_RAM_SIZE - 1)
    }
}
