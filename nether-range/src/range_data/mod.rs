//! Range reduction data: size calculation and serialization
//!
//! Range data is computed once per clip (full precision) and once per
//! segment (packed at the [`PrecisionTier`](crate::layout::PrecisionTier)).
//! The size calculator and the writers must agree to the byte, so they are
//! always used as a pair:
//!
//! ```
//! use glam::Vec4;
//! use nether_range::{
//!     BitRate, BoneRanges, BoneStreams, ClipContext, RangeCodecProfile, RangeFormats,
//!     RangeReductionFlags, SegmentContext, TrackFormat, TrackStream, TrackStreamRange,
//!     clip_range_data_size, write_clip_range_data,
//! };
//!
//! let formats = RangeFormats::default();
//! let track = |format: TrackFormat| {
//!     TrackStream::from_samples(format, BitRate::HIGHEST, &[Vec4::ZERO, Vec4::ONE])
//! };
//! let bone = BoneStreams::animated(
//!     0,
//!     track(formats.rotation.into()),
//!     track(formats.translation.into()),
//!     track(formats.scale.into()),
//! );
//! let ranges = BoneRanges {
//!     translation: TrackStreamRange::from_min_max(Vec4::ZERO, Vec4::ONE),
//!     ..BoneRanges::default()
//! };
//! let segment = SegmentContext::new(0, vec![bone], vec![ranges]);
//! let clip = ClipContext::new(vec![segment], vec![ranges], false).unwrap();
//!
//! let flags = RangeReductionFlags::TRANSLATIONS;
//! let size = clip_range_data_size(&clip, flags, formats).unwrap();
//! let mut buffer = vec![0u8; size as usize];
//! let profile = RangeCodecProfile::default();
//! write_clip_range_data(&clip, flags, &profile, Some(buffer.as_mut_slice()), size).unwrap();
//! assert_eq!(size, 24);
//! ```

mod size;
mod write;


pub use size::{clip_range_data_size, range_data_size, segment_range_data_size};
pub use write::{
    build_clip_range_data, build_segment_range_data, write_bone_ranges, write_clip_range_data,
    write_rotation_track_range, write_segment_range_data, write_vector_track_range,
};
