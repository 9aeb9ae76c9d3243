//! Track storage formats, range reduction flags and bit rates

use std::fmt;

// ============================================================================
// Rotation / Vector Formats
// ============================================================================

/// Storage format of a rotation track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationFormat {
    /// Full precision quaternion, 4 × f32
    Quat128,
    /// Quaternion with W dropped, 3 × f32
    QuatDropW96,
    /// Quaternion with W dropped, 3 × 16 bits
    QuatDropW48,
    /// Quaternion with W dropped, 11/11/10 bits
    QuatDropW32,
    /// Quaternion with W dropped, per-segment variable bit rate
    QuatDropWVariable,
}

impl RotationFormat {
    pub const ALL: [Self; 5] = [
        Self::Quat128,
        Self::QuatDropW96,
        Self::QuatDropW48,
        Self::QuatDropW32,
        Self::QuatDropWVariable,
    ];

    /// Number of components stored per sample and per range member
    #[inline]
    pub const fn num_components(self) -> usize {
        match self {
            Self::Quat128 => 4,
            _ => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Quat128 => "Quat_128",
            Self::QuatDropW96 => "QuatDropW_96",
            Self::QuatDropW48 => "QuatDropW_48",
            Self::QuatDropW32 => "QuatDropW_32",
            Self::QuatDropWVariable => "QuatDropW_Variable",
        }
    }
}

impl fmt::Display for RotationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage format of a translation or scale track (always 3 components)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorFormat {
    /// 3 × f32
    Vector96,
    /// 3 × 16 bits
    Vector48,
    /// 11/11/10 bits
    Vector32,
    /// Per-segment variable bit rate
    VectorVariable,
}

impl VectorFormat {
    pub const ALL: [Self; 4] = [
        Self::Vector96,
        Self::Vector48,
        Self::Vector32,
        Self::VectorVariable,
    ];

    #[inline]
    pub const fn num_components(self) -> usize {
        3
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vector96 => "Vector3_96",
            Self::Vector48 => "Vector3_48",
            Self::Vector32 => "Vector3_32",
            Self::VectorVariable => "Vector3_Variable",
        }
    }
}

impl fmt::Display for VectorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format of a single track stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackFormat {
    Rotation(RotationFormat),
    Vector(VectorFormat),
}

impl TrackFormat {
    #[inline]
    pub const fn num_components(self) -> usize {
        match self {
            Self::Rotation(format) => format.num_components(),
            Self::Vector(format) => format.num_components(),
        }
    }
}

impl From<RotationFormat> for TrackFormat {
    fn from(format: RotationFormat) -> Self {
        Self::Rotation(format)
    }
}

impl From<VectorFormat> for TrackFormat {
    fn from(format: VectorFormat) -> Self {
        Self::Vector(format)
    }
}

/// Formats a clip was compressed with, one per track kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFormats {
    pub rotation: RotationFormat,
    pub translation: VectorFormat,
    pub scale: VectorFormat,
}

impl RangeFormats {
    pub const fn new(
        rotation: RotationFormat,
        translation: VectorFormat,
        scale: VectorFormat,
    ) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }
}

impl Default for RangeFormats {
    fn default() -> Self {
        Self::new(
            RotationFormat::QuatDropWVariable,
            VectorFormat::VectorVariable,
            VectorFormat::VectorVariable,
        )
    }
}

// ============================================================================
// Range Reduction Flags
// ============================================================================

bitflags::bitflags! {
    /// Track kinds that participate in range reduction
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RangeReductionFlags: u8 {
        const ROTATIONS = 0b0000_0001;
        const TRANSLATIONS = 0b0000_0010;
        const SCALES = 0b0000_0100;
        const ALL_TRACKS =
            Self::ROTATIONS.bits() | Self::TRANSLATIONS.bits() | Self::SCALES.bits();
    }
}

// ============================================================================
// Bit Rates
// ============================================================================

/// Quantization width selector of a variable track
///
/// `BitRate::ZERO` marks a track that is constant over its segment: a single
/// raw sample replaces the (min, extent) pair in segment range data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitRate(u8);

impl BitRate {
    /// Constant track, no bits per sample
    pub const ZERO: Self = Self(0);
    /// Full precision, 32 bits per component
    pub const HIGHEST: Self = Self(18);
    /// Track does not use a variable bit rate
    pub const INVALID: Self = Self(0xFF);

    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_constant(self) -> bool {
        self.0 == Self::ZERO.0
    }
}

impl Default for BitRate {
    fn default() -> Self {
        Self::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_component_counts() {
        assert_eq!(RotationFormat::Quat128.num_components(), 4);
        for format in RotationFormat::ALL.into_iter().skip(1) {
            assert_eq!(format.num_components(), 3, "{format}");
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(RotationFormat::QuatDropWVariable.to_string(), "QuatDropW_Variable");
        assert_eq!(VectorFormat::Vector96.to_string(), "Vector3_96");
        assert_eq!(VectorFormat::VectorVariable.name(), "Vector3_Variable");
    }

    #[test]
    fn test_track_format_components() {
        assert_eq!(TrackFormat::from(RotationFormat::Quat128).num_components(), 4);
        assert_eq!(TrackFormat::from(VectorFormat::Vector48).num_components(), 3);
    }

    #[test]
    fn test_all_tracks_flag() {
        let all = RangeReductionFlags::ALL_TRACKS;
        assert!(all.contains(RangeReductionFlags::ROTATIONS));
        assert!(all.contains(RangeReductionFlags::TRANSLATIONS));
        assert!(all.contains(RangeReductionFlags::SCALES));
        assert_eq!(all.bits(), 0b111);
    }

    #[test]
    fn test_bit_rates() {
        assert!(BitRate::ZERO.is_constant());
        assert!(!BitRate::HIGHEST.is_constant());
        assert_eq!(BitRate::new(7).value(), 7);
        assert!(!BitRate::INVALID.is_constant());
        assert_eq!(BitRate::default(), BitRate::INVALID);
    }
}
