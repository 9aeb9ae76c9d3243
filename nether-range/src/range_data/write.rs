//! Range data writers
//!
//! Normalized value is in [0.0, 1.0]:
//! `value = normalized * extent + min`, `normalized = (value - min) / extent`

use crate::clip::{
    BoneRanges, BoneStreams, ClipContext, SegmentContext, TrackStream, TrackStreamRange,
};
use crate::config::RangeCodecProfile;
use crate::cursor::RangeCursor;
use crate::error::{RangeDataError, TrackRangeError};
use crate::formats::{RangeFormats, RangeReductionFlags};
use crate::layout::{PrecisionTier, RangeScope, constant_sample_size};
use crate::packing::{pack_vector3_u24, pack_vector3_u48, pack_vector4_u32, pack_vector4_u64};

use super::size::{clip_range_data_size, segment_range_data_size};

// ============================================================================
// Per-Track Writers
// ============================================================================

/// Write the range of a translation or scale track (3 components)
pub fn write_vector_track_range(
    track: &TrackStream,
    range: &TrackStreamRange,
    scope: RangeScope,
    tier: PrecisionTier,
    cursor: &mut RangeCursor<'_>,
) -> Result<(), TrackRangeError> {
    write_track_range(track, range, 3, scope, tier, cursor)
}

/// Write the range of a rotation track
///
/// Full precision quaternions keep 4 components, every other rotation
/// format drops W and keeps 3.
pub fn write_rotation_track_range(
    track: &TrackStream,
    range: &TrackStreamRange,
    scope: RangeScope,
    tier: PrecisionTier,
    cursor: &mut RangeCursor<'_>,
) -> Result<(), TrackRangeError> {
    let num_components = track.format().num_components();
    write_track_range(track, range, num_components, scope, tier, cursor)
}

fn write_track_range(
    track: &TrackStream,
    range: &TrackStreamRange,
    num_components: usize,
    scope: RangeScope,
    tier: PrecisionTier,
    cursor: &mut RangeCursor<'_>,
) -> Result<(), TrackRangeError> {
    let range_min = range.min();
    let range_extent = range.extent();

    match scope {
        RangeScope::Clip => {
            cursor.write_f32s(&range_min.to_array()[..num_components])?;
            cursor.write_f32s(&range_extent.to_array()[..num_components])?;
        }
        RangeScope::Segment if track.bit_rate().is_constant() => {
            // Constant over the segment: the sample itself replaces min/extent
            let required = constant_sample_size(num_components, tier);
            let sample = track.raw_sample(0).unwrap_or_default();
            let bytes = sample
                .get(..required)
                .ok_or(TrackRangeError::RawSampleTooShort {
                    required,
                    actual: sample.len(),
                })?;
            cursor.write_bytes(bytes)?;
        }
        RangeScope::Segment => match (num_components, tier) {
            (4, PrecisionTier::Bits8) => {
                cursor.write_bytes(&pack_vector4_u32(range_min))?;
                cursor.write_bytes(&pack_vector4_u32(range_extent))?;
            }
            (4, PrecisionTier::Bits16) => {
                cursor.write_bytes(&pack_vector4_u64(range_min))?;
                cursor.write_bytes(&pack_vector4_u64(range_extent))?;
            }
            (_, PrecisionTier::Bits8) => {
                cursor.write_bytes(&pack_vector3_u24(range_min))?;
                cursor.write_bytes(&pack_vector3_u24(range_extent))?;
            }
            (_, PrecisionTier::Bits16) => {
                cursor.write_bytes(&pack_vector3_u48(range_min))?;
                cursor.write_bytes(&pack_vector3_u48(range_extent))?;
            }
        },
    }

    Ok(())
}

// ============================================================================
// Per-Bone Dispatcher
// ============================================================================

/// Write range data for `num_bones` bones into `buffer`
///
/// For each bone, in ascending order: rotation, translation, then scale,
/// each only if selected by `flags` and animated. Scale additionally
/// requires `clip.has_scale()`.
///
/// With `profile.error_checks`, the cursor is checked against `buffer_size`
/// after every bone (overrun) and after the last one (underrun). Without
/// them, the writer trusts the size calculator: an underrun leaves the
/// remaining bytes untouched. Writes past the end of `buffer` itself are
/// always rejected.
///
/// # Errors
///
/// Returns an error if `buffer` is `None` or shorter than `buffer_size`, if
/// the stream or range slices hold fewer than `num_bones` entries, if a
/// constant track's sample is too short, or on a size mismatch.
#[allow(clippy::too_many_arguments)]
pub fn write_bone_ranges(
    clip: &ClipContext,
    bone_streams: &[BoneStreams],
    bone_ranges: &[BoneRanges],
    num_bones: u16,
    flags: RangeReductionFlags,
    scope: RangeScope,
    profile: &RangeCodecProfile,
    buffer: Option<&mut [u8]>,
    buffer_size: u32,
) -> Result<(), RangeDataError> {
    let buffer = buffer.ok_or(RangeDataError::MissingOutputBuffer)?;

    let range_data_end = buffer_size as usize;
    if buffer.len() < range_data_end {
        return Err(RangeDataError::BufferTooSmall {
            required: range_data_end,
            actual: buffer.len(),
        });
    }

    let bone_count = usize::from(num_bones);
    let available = bone_streams.len().min(bone_ranges.len());
    if available < bone_count {
        return Err(RangeDataError::BoneCountMismatch {
            expected: bone_count,
            actual: available,
        });
    }

    let tier = profile.precision_tier;
    let mut cursor = RangeCursor::new(buffer);

    for (bone_index, (bone_stream, bone_range)) in bone_streams
        .iter()
        .zip(bone_ranges)
        .take(bone_count)
        .enumerate()
    {
        let bone_index = bone_index as u16;
        let bone_start = cursor.offset();

        let at_bone = |err: TrackRangeError| err.at_bone(bone_index, range_data_end);

        if flags.contains(RangeReductionFlags::ROTATIONS) && bone_stream.is_rotation_animated() {
            let (track, range) = (&bone_stream.rotations, &bone_range.rotation);
            write_rotation_track_range(track, range, scope, tier, &mut cursor).map_err(at_bone)?;
        }

        if flags.contains(RangeReductionFlags::TRANSLATIONS)
            && bone_stream.is_translation_animated()
        {
            let (track, range) = (&bone_stream.translations, &bone_range.translation);
            write_vector_track_range(track, range, scope, tier, &mut cursor).map_err(at_bone)?;
        }

        if clip.has_scale()
            && flags.contains(RangeReductionFlags::SCALES)
            && bone_stream.is_scale_animated()
        {
            let (track, range) = (&bone_stream.scales, &bone_range.scale);
            write_vector_track_range(track, range, scope, tier, &mut cursor).map_err(at_bone)?;
        }

        tracing::trace!(
            "Bone {} range data: {} bytes at offset {}",
            bone_index,
            cursor.offset() - bone_start,
            bone_start
        );

        if profile.error_checks && cursor.offset() > range_data_end {
            tracing::warn!(
                "Range data overrun at bone {}: {} of {} bytes",
                bone_index,
                cursor.offset(),
                range_data_end
            );
            return Err(RangeDataError::Overrun {
                bone_index,
                offset: cursor.offset(),
                size: range_data_end,
            });
        }
    }

    if profile.error_checks && cursor.offset() != range_data_end {
        tracing::warn!(
            "Range data underrun: {} of {} bytes",
            cursor.offset(),
            range_data_end
        );
        return Err(RangeDataError::Underrun {
            offset: cursor.offset(),
            size: range_data_end,
        });
    }

    Ok(())
}

// ============================================================================
// Block Builders
// ============================================================================

/// Write the clip-wide range block (full precision)
///
/// Uses the bone streams of the first segment and the clip's own ranges.
pub fn write_clip_range_data(
    clip: &ClipContext,
    flags: RangeReductionFlags,
    profile: &RangeCodecProfile,
    buffer: Option<&mut [u8]>,
    range_data_size: u32,
) -> Result<(), RangeDataError> {
    let segment = clip.first_segment().ok_or(RangeDataError::NoSegments)?;

    write_bone_ranges(
        clip,
        segment.bone_streams(),
        clip.ranges(),
        clip.num_bones(),
        flags,
        RangeScope::Clip,
        profile,
        buffer,
        range_data_size,
    )?;

    tracing::debug!(
        "Wrote clip range data: {} bones, {} bytes",
        clip.num_bones(),
        range_data_size
    );
    Ok(())
}

/// Write the range block of one segment (packed at the profile's tier)
///
/// The segment must hold exactly one bone stream per clip bone.
pub fn write_segment_range_data(
    clip: &ClipContext,
    segment: &SegmentContext,
    flags: RangeReductionFlags,
    profile: &RangeCodecProfile,
    buffer: Option<&mut [u8]>,
    range_data_size: u32,
) -> Result<(), RangeDataError> {
    let num_bones = usize::from(clip.num_bones());
    if segment.num_bones() != num_bones {
        return Err(RangeDataError::BoneCountMismatch {
            expected: num_bones,
            actual: segment.num_bones(),
        });
    }

    write_bone_ranges(
        clip,
        segment.bone_streams(),
        segment.ranges(),
        clip.num_bones(),
        flags,
        RangeScope::Segment,
        profile,
        buffer,
        range_data_size,
    )?;

    tracing::debug!(
        "Wrote segment {} range data: {} bones, {} bytes at {:?}",
        segment.segment_index(),
        segment.num_bones(),
        range_data_size,
        profile.precision_tier
    );
    Ok(())
}

/// Compute the clip block size, allocate it and write it
pub fn build_clip_range_data(
    clip: &ClipContext,
    flags: RangeReductionFlags,
    formats: RangeFormats,
    profile: &RangeCodecProfile,
) -> Result<Vec<u8>, RangeDataError> {
    let size = clip_range_data_size(clip, flags, formats)?;
    let mut range_data = vec![0u8; size as usize];
    write_clip_range_data(clip, flags, profile, Some(range_data.as_mut_slice()), size)?;
    Ok(range_data)
}

/// Compute the segment block size, allocate it and write it
pub fn build_segment_range_data(
    clip: &ClipContext,
    segment: &SegmentContext,
    flags: RangeReductionFlags,
    formats: RangeFormats,
    profile: &RangeCodecProfile,
) -> Result<Vec<u8>, RangeDataError> {
    let size = segment_range_data_size(clip, flags, formats, profile.precision_tier)?;
    let mut range_data = vec![0u8; size as usize];
    write_segment_range_data(clip, segment, flags, profile, Some(range_data.as_mut_slice()), size)?;
    Ok(range_data)
}
