//! CPU cache flushing for decompression benchmarks
//!
//! Touches a buffer larger than the last level cache so that the next
//! measured run starts cold. Not used by range data serialization.

use glam::Vec4;

pub const CACHE_FLUSH_BUFFER_BYTES: usize = 20 * 1024 * 1024;

const CACHE_FLUSH_LANES: usize = CACHE_FLUSH_BUFFER_BYTES / size_of::<Vec4>();

/// Scratch buffer used to evict the CPU caches
///
/// Memory is released when the buffer is dropped.
pub struct CacheFlushBuffer {
    lanes: Box<[Vec4]>,
}

impl CacheFlushBuffer {
    pub fn allocate() -> Self {
        Self {
            lanes: vec![Vec4::ZERO; CACHE_FLUSH_LANES].into_boxed_slice(),
        }
    }

    /// Read and write every lane of the buffer
    pub fn flush(&mut self) {
        for lane in self.lanes.iter_mut() {
            *lane += Vec4::ONE;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    #[inline]
    pub fn lanes(&self) -> &[Vec4] {
        &self.lanes
    }
}
