//! Error types for range data sizing, writing and profile loading

use crate::cursor::CursorOverflow;

/// Error returned by the range size calculator and the range data writers
///
/// Precondition violations are caller mistakes (missing buffer, short
/// inputs). Invariant violations (`Overrun`, `Underrun`) mean the size
/// calculator and the writer disagree about a format/flag combination.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeDataError {
    /// No output buffer was supplied to a writer
    #[error("range data output buffer is missing")]
    MissingOutputBuffer,

    /// Output buffer is shorter than the declared range data size
    #[error("range data buffer holds {actual} bytes, {required} declared")]
    BufferTooSmall { required: usize, actual: usize },

    /// Fewer bone streams or bone ranges than bones to write
    #[error("expected {expected} bones worth of streams and ranges, got {actual}")]
    BoneCountMismatch { expected: usize, actual: usize },

    /// Clip has no segment to read animated track flags from
    #[error("clip contains no segments")]
    NoSegments,

    /// Constant track sample is shorter than the passthrough width
    #[error("bone {bone_index}: constant track sample holds {actual} bytes, {required} required")]
    RawSampleTooShort {
        bone_index: u16,
        required: usize,
        actual: usize,
    },

    /// Writer passed the end of the range data block
    #[error("bone {bone_index}: range data overrun ({offset} bytes into a {size} byte block)")]
    Overrun {
        bone_index: u16,
        offset: usize,
        size: usize,
    },

    /// Writer finished all bones short of the end of the range data block
    #[error("wrote too little range data ({offset} of {size} bytes)")]
    Underrun { offset: usize, size: usize },
}

impl RangeDataError {
    /// True for size-mismatch defects, false for precondition violations
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Overrun { .. } | Self::Underrun { .. })
    }
}

/// Error returned while writing the range of a single track
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackRangeError {
    #[error(transparent)]
    Overflow(#[from] CursorOverflow),

    /// Zero bit rate track has no usable raw sample
    #[error("constant track sample holds {actual} bytes, {required} required")]
    RawSampleTooShort { required: usize, actual: usize },
}

impl TrackRangeError {
    /// Attach the bone being written when the error reaches the dispatcher
    pub(crate) fn at_bone(self, bone_index: u16, size: usize) -> RangeDataError {
        match self {
            Self::Overflow(overflow) => RangeDataError::Overrun {
                bone_index,
                offset: overflow.end(),
                size,
            },
            Self::RawSampleTooShort { required, actual } => RangeDataError::RawSampleTooShort {
                bone_index,
                required,
                actual,
            },
        }
    }
}

/// Clip structure validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipValidationError {
    #[error("clip contains no segments")]
    NoSegments,

    #[error("clip has {0} bones, maximum is 65535")]
    TooManyBones(usize),

    #[error("clip ranges cover {actual} bones, expected {expected}")]
    ClipRangeCount { expected: usize, actual: usize },

    #[error("segment {segment_index} has {actual} bone streams, expected {expected}")]
    BoneStreamCount {
        segment_index: u32,
        expected: usize,
        actual: usize,
    },

    #[error("segment {segment_index} has {actual} bone ranges, expected {expected}")]
    SegmentRangeCount {
        segment_index: u32,
        expected: usize,
        actual: usize,
    },

    #[error("segment {segment_index}, bone {bone_index}: animated tracks differ from segment 0")]
    AnimatedTracksMismatch { segment_index: u32, bone_index: u16 },

    #[error("{len} bytes of samples is not a multiple of the {sample_size} byte sample size")]
    MisalignedSamples { sample_size: usize, len: usize },
}

/// Error loading or saving a codec profile
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to access profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),
}
