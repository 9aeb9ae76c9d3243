//! Byte layout of range data blocks
//!
//! Range data is stored per bone, in ascending bone order, with up to three
//! sub-records (rotation, translation, scale). Each sub-record is either a
//! (min, extent) pair or, for a constant track in segment scope, one raw
//! sample.
//!
//! ```text
//!                          Clip      Segment Bits8   Segment Bits16
//! Rotation Quat_128        2×4×f32   2×4×u8          2×4×u16
//! Rotation (drop W)        2×3×f32   2×3×u8          2×3×u16
//! Translation / Scale      2×3×f32   2×3×u8          2×3×u16
//! Constant (passthrough)   -         n×u16           n×f32
//! ```
//!
//! All multi-byte values are little-endian. The precision tier is not
//! recorded in the block: readers must use the same [`PrecisionTier`].

use serde::{Deserialize, Serialize};

use crate::formats::{RotationFormat, VectorFormat};

/// Per-component width of segment range data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionTier {
    /// 8 bits per packed component, 16 bits per constant sample component
    Bits8,
    /// 16 bits per packed component, f32 per constant sample component
    #[default]
    Bits16,
}

impl PrecisionTier {
    pub const ALL: [Self; 2] = [Self::Bits8, Self::Bits16];

    #[inline]
    pub const fn bits_per_component(self) -> u8 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
        }
    }

    /// Bytes per component of a packed min or extent
    #[inline]
    pub const fn packed_component_size(self) -> usize {
        match self {
            Self::Bits8 => 1,
            Self::Bits16 => 2,
        }
    }

    /// Bytes per component of a constant track's raw sample
    #[inline]
    pub const fn raw_component_size(self) -> usize {
        match self {
            Self::Bits8 => 2,
            Self::Bits16 => 4,
        }
    }
}

/// Which ranges a block holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeScope {
    /// Whole clip, full precision floats
    Clip,
    /// One segment, packed at the precision tier
    Segment,
}

/// Size of one range member (min or extent)
#[inline]
pub const fn range_member_size(
    num_components: usize,
    scope: RangeScope,
    tier: PrecisionTier,
) -> usize {
    match scope {
        RangeScope::Clip => num_components * size_of::<f32>(),
        RangeScope::Segment => num_components * tier.packed_component_size(),
    }
}

/// Size of the raw sample written in place of a constant track's range
#[inline]
pub const fn constant_sample_size(num_components: usize, tier: PrecisionTier) -> usize {
    num_components * tier.raw_component_size()
}

/// Bytes of range data for one animated rotation track
#[inline]
pub const fn rotation_range_size(
    format: RotationFormat,
    scope: RangeScope,
    tier: PrecisionTier,
) -> u32 {
    (range_member_size(format.num_components(), scope, tier) * 2) as u32
}

/// Bytes of range data for one animated translation or scale track
#[inline]
pub const fn vector_range_size(
    format: VectorFormat,
    scope: RangeScope,
    tier: PrecisionTier,
) -> u32 {
    (range_member_size(format.num_components(), scope, tier) * 2) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_sizes_ignore_tier() {
        for tier in PrecisionTier::ALL {
            assert_eq!(rotation_range_size(RotationFormat::Quat128, RangeScope::Clip, tier), 32);
            let drop_w = RotationFormat::QuatDropWVariable;
            assert_eq!(rotation_range_size(drop_w, RangeScope::Clip, tier), 24);
            assert_eq!(vector_range_size(VectorFormat::Vector96, RangeScope::Clip, tier), 24);
        }
    }

    #[test]
    fn test_segment_sizes() {
        use PrecisionTier::*;
        use RangeScope::Segment;

        assert_eq!(rotation_range_size(RotationFormat::Quat128, Segment, Bits8), 8);
        assert_eq!(rotation_range_size(RotationFormat::Quat128, Segment, Bits16), 16);
        assert_eq!(rotation_range_size(RotationFormat::QuatDropW48, Segment, Bits8), 6);
        assert_eq!(rotation_range_size(RotationFormat::QuatDropW48, Segment, Bits16), 12);
        assert_eq!(vector_range_size(VectorFormat::VectorVariable, Segment, Bits8), 6);
        assert_eq!(vector_range_size(VectorFormat::VectorVariable, Segment, Bits16), 12);
    }

    #[test]
    fn test_constant_sample_matches_range_pair() {
        // The raw sample is twice as wide per component as a packed member,
        // so it occupies exactly the slot of a (min, extent) pair.
        for tier in PrecisionTier::ALL {
            for num_components in [3, 4] {
                assert_eq!(
                    constant_sample_size(num_components, tier),
                    range_member_size(num_components, RangeScope::Segment, tier) * 2
                );
            }
        }
    }

    #[test]
    fn test_tier_serde_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            tier: PrecisionTier,
        }

        let wrapper = Wrapper {
            tier: PrecisionTier::Bits8,
        };
        let text = toml::to_string(&wrapper).unwrap();
        assert!(text.contains("bits8"));
        let parsed: Wrapper = toml::from_str("tier = \"bits16\"").unwrap();
        assert_eq!(parsed.tier, PrecisionTier::Bits16);
    }
}
