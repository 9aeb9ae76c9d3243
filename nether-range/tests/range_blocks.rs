//! End-to-end range blocks for a multi-segment clip

use glam::Vec4;
use nether_range::packing::{unpack_vector3_96, unpack_vector3_u24, unpack_vector3_u48};
use nether_range::{
    BitRate, BoneRanges, BoneStreams, ClipContext, PrecisionTier, RangeCodecProfile, RangeFormats,
    RangeReductionFlags, SegmentContext, TrackStream, TrackStreamRange, build_clip_range_data,
    build_segment_range_data, clip_range_data_size, segment_range_data_size,
};

const NUM_KEYS: usize = 8;
const KEYS_PER_SEGMENT: usize = 4;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Translation keys of one bone, a slow drift that differs per bone
fn translation_keys(bone_index: usize) -> Vec<Vec4> {
    (0..NUM_KEYS)
        .map(|key| {
            let t = key as f32;
            Vec4::new(t * 0.5 + bone_index as f32, -t * 0.25, (t * 0.7).sin() * 2.0, 0.0)
        })
        .collect()
}

fn normalize(value: Vec4, range: &TrackStreamRange) -> Vec4 {
    let extent = range.extent();
    let scaled = (value - range.min()) / extent;
    // Components with no extent normalize to zero
    Vec4::select(extent.cmpeq(Vec4::ZERO), Vec4::ZERO, scaled)
}

struct Fixture {
    clip: ClipContext,
    /// Segment ranges, normalized against the clip ranges
    segment_ranges: Vec<Vec<TrackStreamRange>>,
}

/// Two bones, translations only, split into two segments
fn fixture() -> Fixture {
    let formats = RangeFormats::default();
    let keys: Vec<Vec<Vec4>> = (0..2).map(translation_keys).collect();
    let clip_ranges: Vec<TrackStreamRange> = keys
        .iter()
        .map(|keys| TrackStreamRange::from_samples(keys.iter().copied()).unwrap())
        .collect();

    let mut segments = Vec::new();
    let mut segment_ranges = Vec::new();
    for (segment_index, window) in (0..NUM_KEYS).step_by(KEYS_PER_SEGMENT).enumerate() {
        let mut bones = Vec::new();
        let mut ranges = Vec::new();
        for (bone_index, keys) in keys.iter().enumerate() {
            let normalized: Vec<Vec4> = keys[window..window + KEYS_PER_SEGMENT]
                .iter()
                .map(|&key| normalize(key, &clip_ranges[bone_index]))
                .collect();
            let range = TrackStreamRange::from_samples(normalized.iter().copied()).unwrap();

            let rest = [Vec4::W];
            let mut bone = BoneStreams::animated(
                bone_index as u16,
                TrackStream::from_samples(formats.rotation, BitRate::INVALID, &rest),
                TrackStream::from_samples(formats.translation, BitRate::new(9), &normalized),
                TrackStream::from_samples(formats.scale, BitRate::INVALID, &[Vec4::ONE]),
            );
            bone.is_rotation_default = true;
            bone.is_scale_default = true;
            bones.push(bone);

            ranges.push(BoneRanges {
                translation: range,
                ..BoneRanges::default()
            });
        }
        segment_ranges.push(ranges.iter().map(|ranges| ranges.translation).collect());
        segments.push(SegmentContext::new(segment_index as u32, bones, ranges));
    }

    let ranges = clip_ranges
        .iter()
        .map(|&translation| BoneRanges {
            translation,
            ..BoneRanges::default()
        })
        .collect();
    Fixture {
        clip: ClipContext::new(segments, ranges, false).unwrap(),
        segment_ranges,
    }
}

fn assert_close(actual: Vec4, expected: Vec4, tolerance: f32) {
    assert!(
        actual.truncate().abs_diff_eq(expected.truncate(), tolerance),
        "{actual:?} != {expected:?}"
    );
}

#[test]
fn clip_block_holds_full_precision_ranges() {
    init_tracing();
    let Fixture { clip, .. } = fixture();
    let formats = RangeFormats::default();
    let flags = RangeReductionFlags::ALL_TRACKS;

    let data = build_clip_range_data(&clip, flags, formats, &RangeCodecProfile::default()).unwrap();
    assert_eq!(data.len(), clip_range_data_size(&clip, flags, formats).unwrap() as usize);
    assert_eq!(data.len(), 2 * 24);

    for (bone_index, (bytes, ranges)) in data.chunks_exact(24).zip(clip.ranges()).enumerate() {
        let min = unpack_vector3_96(bytes[0..12].try_into().unwrap());
        let extent = unpack_vector3_96(bytes[12..24].try_into().unwrap());
        assert_eq!(min, ranges.translation.min(), "bone {bone_index}");
        assert_eq!(extent, ranges.translation.extent(), "bone {bone_index}");
    }
}

#[test]
fn segment_blocks_decode_to_segment_ranges() {
    init_tracing();
    let formats = RangeFormats::default();
    let flags = RangeReductionFlags::ALL_TRACKS;

    for tier in PrecisionTier::ALL {
        let Fixture { clip, segment_ranges } = fixture();
        let profile = RangeCodecProfile::with_tier(tier);
        let size = segment_range_data_size(&clip, flags, formats, tier).unwrap() as usize;
        let member = 3 * tier.packed_component_size();
        assert_eq!(size, 2 * 2 * member);

        let tolerance = 1.0 / ((1u32 << tier.bits_per_component()) - 1) as f32;
        for (segment, expected) in clip.segments().iter().zip(&segment_ranges) {
            let data = build_segment_range_data(&clip, segment, flags, formats, &profile).unwrap();
            assert_eq!(data.len(), size);

            for (bytes, range) in data.chunks_exact(2 * member).zip(expected) {
                let (min, extent) = match tier {
                    PrecisionTier::Bits8 => (
                        unpack_vector3_u24(bytes[0..3].try_into().unwrap()),
                        unpack_vector3_u24(bytes[3..6].try_into().unwrap()),
                    ),
                    PrecisionTier::Bits16 => (
                        unpack_vector3_u48(bytes[0..6].try_into().unwrap()),
                        unpack_vector3_u48(bytes[6..12].try_into().unwrap()),
                    ),
                };
                assert_close(min, range.min(), tolerance);
                assert_close(extent, range.extent(), tolerance);
            }
        }
    }
}

#[test]
fn segments_share_one_block_size() {
    init_tracing();
    let Fixture { clip, .. } = fixture();
    let formats = RangeFormats::default();
    let profile = RangeCodecProfile::with_tier(PrecisionTier::Bits8);

    let flags = RangeReductionFlags::TRANSLATIONS;

    let sizes: Vec<usize> = clip
        .segments()
        .iter()
        .map(|segment| {
            build_segment_range_data(&clip, segment, flags, formats, &profile)
                .unwrap()
                .len()
        })
        .collect();
    assert_eq!(sizes, vec![12, 12]);
}

#[test]
fn saved_profile_drives_segment_tier() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles").join("range.toml");

    RangeCodecProfile::with_tier(PrecisionTier::Bits8).save(&path).unwrap();
    let profile = RangeCodecProfile::load(&path).unwrap();
    assert_eq!(profile.precision_tier, PrecisionTier::Bits8);

    let Fixture { clip, .. } = fixture();
    let data = build_segment_range_data(
        &clip,
        &clip.segments()[1],
        RangeReductionFlags::TRANSLATIONS,
        RangeFormats::default(),
        &profile,
    )
    .unwrap();
    assert_eq!(data.len(), 2 * 2 * 3);
}
