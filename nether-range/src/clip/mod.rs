//! Clip, segment and bone stream model
//!
//! A clip is split into segments (contiguous time windows). Every segment
//! holds one `BoneStreams` per bone plus segment-local ranges; the clip holds
//! clip-wide ranges. Which tracks are animated is decided for the whole clip,
//! so every segment shares the same pattern and segment 0 can answer for all.

mod range;
mod track;


pub use range::{BoneRanges, TrackStreamRange};
pub use track::TrackStream;

use crate::error::ClipValidationError;

/// Samples of one bone's three tracks for one segment
#[derive(Debug, Clone, PartialEq)]
pub struct BoneStreams {
    pub bone_index: u16,
    pub rotations: TrackStream,
    pub translations: TrackStream,
    pub scales: TrackStream,

    /// Track holds a single value over the whole clip
    pub is_rotation_constant: bool,
    /// Track holds the bind pose value over the whole clip
    pub is_rotation_default: bool,
    pub is_translation_constant: bool,
    pub is_translation_default: bool,
    pub is_scale_constant: bool,
    pub is_scale_default: bool,
}

impl BoneStreams {
    /// Bone streams with every track animated
    pub fn animated(
        bone_index: u16,
        rotations: TrackStream,
        translations: TrackStream,
        scales: TrackStream,
    ) -> Self {
        Self {
            bone_index,
            rotations,
            translations,
            scales,
            is_rotation_constant: false,
            is_rotation_default: false,
            is_translation_constant: false,
            is_translation_default: false,
            is_scale_constant: false,
            is_scale_default: false,
        }
    }

    #[inline]
    pub fn is_rotation_animated(&self) -> bool {
        !self.is_rotation_constant && !self.is_rotation_default
    }

    #[inline]
    pub fn is_translation_animated(&self) -> bool {
        !self.is_translation_constant && !self.is_translation_default
    }

    #[inline]
    pub fn is_scale_animated(&self) -> bool {
        !self.is_scale_constant && !self.is_scale_default
    }

    fn animated_tracks(&self) -> [bool; 3] {
        [
            self.is_rotation_animated(),
            self.is_translation_animated(),
            self.is_scale_animated(),
        ]
    }
}

/// One time window of a clip
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentContext {
    segment_index: u32,
    bone_streams: Vec<BoneStreams>,
    ranges: Vec<BoneRanges>,
}

impl SegmentContext {
    pub fn new(
        segment_index: u32,
        bone_streams: Vec<BoneStreams>,
        ranges: Vec<BoneRanges>,
    ) -> Self {
        Self {
            segment_index,
            bone_streams,
            ranges,
        }
    }

    #[inline]
    pub fn segment_index(&self) -> u32 {
        self.segment_index
    }

    #[inline]
    pub fn bone_streams(&self) -> &[BoneStreams] {
        &self.bone_streams
    }

    /// Segment-local ranges, one per bone
    #[inline]
    pub fn ranges(&self) -> &[BoneRanges] {
        &self.ranges
    }

    #[inline]
    pub fn num_bones(&self) -> usize {
        self.bone_streams.len()
    }
}

/// Whole animation clip being compressed
#[derive(Debug, Clone, PartialEq)]
pub struct ClipContext {
    segments: Vec<SegmentContext>,
    ranges: Vec<BoneRanges>,
    num_bones: u16,
    has_scale: bool,
}

impl ClipContext {
    /// Build a clip and check that its segments agree with each other
    ///
    /// # Errors
    ///
    /// Returns an error if there are no segments, if any segment or the
    /// clip ranges disagree on the bone count, or if a segment's animated
    /// tracks differ from segment 0.
    pub fn new(
        segments: Vec<SegmentContext>,
        ranges: Vec<BoneRanges>,
        has_scale: bool,
    ) -> Result<Self, ClipValidationError> {
        let num_bones = ranges.len();
        if num_bones > u16::MAX as usize {
            return Err(ClipValidationError::TooManyBones(num_bones));
        }

        let clip = Self {
            segments,
            ranges,
            num_bones: num_bones as u16,
            has_scale,
        };
        if let Err(err) = clip.validate() {
            tracing::warn!("Rejected clip: {}", err);
            return Err(err);
        }
        Ok(clip)
    }

    /// Check the structural invariants the range writers rely on
    pub fn validate(&self) -> Result<(), ClipValidationError> {
        let Some(first) = self.segments.first() else {
            return Err(ClipValidationError::NoSegments);
        };

        let expected = usize::from(self.num_bones);
        if self.ranges.len() != expected {
            return Err(ClipValidationError::ClipRangeCount {
                expected,
                actual: self.ranges.len(),
            });
        }

        for segment in &self.segments {
            if segment.bone_streams.len() != expected {
                return Err(ClipValidationError::BoneStreamCount {
                    segment_index: segment.segment_index,
                    expected,
                    actual: segment.bone_streams.len(),
                });
            }
            if segment.ranges.len() != expected {
                return Err(ClipValidationError::SegmentRangeCount {
                    segment_index: segment.segment_index,
                    expected,
                    actual: segment.ranges.len(),
                });
            }

            let mismatch = segment
                .bone_streams
                .iter()
                .zip(&first.bone_streams)
                .position(|(bone, reference)| {
                    bone.animated_tracks() != reference.animated_tracks()
                });
            if let Some(bone_index) = mismatch {
                return Err(ClipValidationError::AnimatedTracksMismatch {
                    segment_index: segment.segment_index,
                    bone_index: bone_index as u16,
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn segments(&self) -> &[SegmentContext] {
        &self.segments
    }

    /// Segment whose animated flags stand in for the whole clip
    #[inline]
    pub fn first_segment(&self) -> Option<&SegmentContext> {
        self.segments.first()
    }

    /// Clip-wide ranges, one per bone
    #[inline]
    pub fn ranges(&self) -> &[BoneRanges] {
        &self.ranges
    }

    #[inline]
    pub fn num_bones(&self) -> u16 {
        self.num_bones
    }

    /// Whether any bone of the clip animates its scale
    #[inline]
    pub fn has_scale(&self) -> bool {
        self.has_scale
    }
}
