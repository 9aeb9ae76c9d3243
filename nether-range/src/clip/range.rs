//! Per-track (min, extent) ranges

use glam::Vec4;

/// Range of one track over a clip or a segment
///
/// `extent = max - min` per component. Vector tracks leave `w` at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStreamRange {
    min: Vec4,
    extent: Vec4,
}

impl TrackStreamRange {
    pub const fn from_min_extent(min: Vec4, extent: Vec4) -> Self {
        Self { min, extent }
    }

    pub fn from_min_max(min: Vec4, max: Vec4) -> Self {
        Self {
            min,
            extent: max - min,
        }
    }

    /// Range covering every sample, `None` when there are no samples
    pub fn from_samples<I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec4>,
    {
        let mut samples = samples.into_iter();
        let first = samples.next()?;
        let (min, max) = samples.fold((first, first), |(min, max), sample| {
            (min.min(sample), max.max(sample))
        });
        Some(Self::from_min_max(min, max))
    }

    #[inline]
    pub fn min(&self) -> Vec4 {
        self.min
    }

    #[inline]
    pub fn extent(&self) -> Vec4 {
        self.extent
    }

    /// True when no component varies by more than `threshold`
    pub fn is_constant(&self, threshold: f32) -> bool {
        self.extent.abs().max_element() <= threshold
    }
}

impl Default for TrackStreamRange {
    fn default() -> Self {
        Self::from_min_extent(Vec4::ZERO, Vec4::ZERO)
    }
}

/// Ranges of one bone's rotation, translation and scale tracks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoneRanges {
    pub rotation: TrackStreamRange,
    pub translation: TrackStreamRange,
    pub scale: TrackStreamRange,
}
