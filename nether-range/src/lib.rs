//! Range reduction data for Nethercore animation compression
//!
//! Before quantization, animated tracks are normalized into [0, 1] with a
//! per-bone (min, extent) pair, once over the whole clip and once per
//! segment. This crate computes the exact size of those range blocks and
//! writes them.
//!
//! # Modules
//!
//! - [`range_data`] - Size calculator, per-track and per-bone writers, block builders
//! - [`clip`] - Clip, segment, bone stream and range model
//! - [`formats`] - Rotation/vector formats, range reduction flags, bit rates
//! - [`layout`] - Precision tiers and sub-record sizes
//! - [`packing`] - Fixed-width vector packing (unorm8/unorm16/f32)
//! - [`cursor`] - Bounded write cursor
//! - [`config`] - Codec profile (precision tier, error checks)
//! - [`memory_cache`] - Cache flushing for benchmarks

pub mod clip;
pub mod config;
pub mod cursor;
pub mod error;
pub mod formats;
pub mod layout;
pub mod memory_cache;
pub mod packing;
pub mod range_data;

pub use clip::{
    BoneRanges, BoneStreams, ClipContext, SegmentContext, TrackStream, TrackStreamRange,
};
pub use config::RangeCodecProfile;
pub use cursor::{CursorOverflow, RangeCursor};
pub use error::{ClipValidationError, ProfileError, RangeDataError, TrackRangeError};
pub use formats::{
    BitRate, RangeFormats, RangeReductionFlags, RotationFormat, TrackFormat, VectorFormat,
};
pub use layout::{PrecisionTier, RangeScope, rotation_range_size, vector_range_size};
pub use memory_cache::{CACHE_FLUSH_BUFFER_BYTES, CacheFlushBuffer};
pub use range_data::{
    build_clip_range_data, build_segment_range_data, clip_range_data_size, range_data_size,
    segment_range_data_size, write_bone_ranges, write_clip_range_data, write_rotation_track_range,
    write_segment_range_data, write_vector_track_range,
};
