//! Range data size calculator

use crate::clip::ClipContext;
use crate::error::RangeDataError;
use crate::formats::{RangeFormats, RangeReductionFlags, RotationFormat, VectorFormat};
use crate::layout::{PrecisionTier, RangeScope, rotation_range_size, vector_range_size};

/// Exact size in bytes of a range data block
///
/// Only the first segment is inspected: animated track flags are identical
/// across all segments of a clip.
///
/// # Errors
///
/// Returns [`RangeDataError::NoSegments`] if the clip has no segment.
pub fn range_data_size(
    clip: &ClipContext,
    flags: RangeReductionFlags,
    rotation_format: RotationFormat,
    translation_format: VectorFormat,
    scale_format: VectorFormat,
    scope: RangeScope,
    tier: PrecisionTier,
) -> Result<u32, RangeDataError> {
    let rotation_size = if flags.contains(RangeReductionFlags::ROTATIONS) {
        rotation_range_size(rotation_format, scope, tier)
    } else {
        0
    };
    let translation_size = if flags.contains(RangeReductionFlags::TRANSLATIONS) {
        vector_range_size(translation_format, scope, tier)
    } else {
        0
    };
    let scale_size = if flags.contains(RangeReductionFlags::SCALES) {
        vector_range_size(scale_format, scope, tier)
    } else {
        0
    };

    let segment = clip.first_segment().ok_or(RangeDataError::NoSegments)?;

    let mut range_data_size = 0;
    for bone_stream in segment.bone_streams() {
        if bone_stream.is_rotation_animated() {
            range_data_size += rotation_size;
        }

        if bone_stream.is_translation_animated() {
            range_data_size += translation_size;
        }

        if clip.has_scale() && bone_stream.is_scale_animated() {
            range_data_size += scale_size;
        }
    }

    Ok(range_data_size)
}

/// Size of the clip-wide range block (full precision)
pub fn clip_range_data_size(
    clip: &ClipContext,
    flags: RangeReductionFlags,
    formats: RangeFormats,
) -> Result<u32, RangeDataError> {
    range_data_size(
        clip,
        flags,
        formats.rotation,
        formats.translation,
        formats.scale,
        RangeScope::Clip,
        // Clip scope ignores the tier
        PrecisionTier::default(),
    )
}

/// Size of one segment range block at `tier`
///
/// All segments of a clip share this size.
pub fn segment_range_data_size(
    clip: &ClipContext,
    flags: RangeReductionFlags,
    formats: RangeFormats,
    tier: PrecisionTier,
) -> Result<u32, RangeDataError> {
    range_data_size(
        clip,
        flags,
        formats.rotation,
        formats.translation,
        formats.scale,
        RangeScope::Segment,
        tier,
    )
}
