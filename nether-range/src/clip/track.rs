//! Raw per-track sample storage

use glam::Vec4;

use crate::error::ClipValidationError;
use crate::formats::{BitRate, TrackFormat};
use crate::layout::PrecisionTier;
use crate::packing::{pack_vector3_96, pack_vector3_u48, pack_vector4_128, pack_vector4_u64};

/// Samples of one track (rotation, translation or scale) for one segment
///
/// Samples are stored contiguously, `sample_size` bytes each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackStream {
    format: TrackFormat,
    bit_rate: BitRate,
    sample_size: usize,
    samples: Vec<u8>,
}

impl TrackStream {
    /// Wrap already packed samples
    pub fn from_raw(
        format: impl Into<TrackFormat>,
        bit_rate: BitRate,
        sample_size: usize,
        samples: Vec<u8>,
    ) -> Result<Self, ClipValidationError> {
        if sample_size == 0 || samples.len() % sample_size != 0 {
            return Err(ClipValidationError::MisalignedSamples {
                sample_size,
                len: samples.len(),
            });
        }
        Ok(Self {
            format: format.into(),
            bit_rate,
            sample_size,
            samples,
        })
    }

    /// Store full precision samples (`num_components` × f32 each)
    pub fn from_samples(
        format: impl Into<TrackFormat>,
        bit_rate: BitRate,
        samples: &[Vec4],
    ) -> Self {
        let format = format.into();
        let four_components = format.num_components() == 4;
        let sample_size = if four_components { 16 } else { 12 };

        let mut raw = Vec::with_capacity(samples.len() * sample_size);
        for &sample in samples {
            if four_components {
                raw.extend_from_slice(&pack_vector4_128(sample));
            } else {
                raw.extend_from_slice(&pack_vector3_96(sample));
            }
        }

        Self {
            format,
            bit_rate,
            sample_size,
            samples: raw,
        }
    }

    /// Single sample track with a zero bit rate
    ///
    /// The sample is stored the way segment range data expects to copy it:
    /// normalized unorm16 components at `Bits8`, f32 components at `Bits16`.
    pub fn constant(format: impl Into<TrackFormat>, tier: PrecisionTier, sample: Vec4) -> Self {
        let format = format.into();
        let samples = match (format.num_components(), tier) {
            (4, PrecisionTier::Bits8) => pack_vector4_u64(sample).to_vec(),
            (4, PrecisionTier::Bits16) => pack_vector4_128(sample).to_vec(),
            (_, PrecisionTier::Bits8) => pack_vector3_u48(sample).to_vec(),
            (_, PrecisionTier::Bits16) => pack_vector3_96(sample).to_vec(),
        };

        Self {
            format,
            bit_rate: BitRate::ZERO,
            sample_size: samples.len(),
            samples,
        }
    }

    #[inline]
    pub fn format(&self) -> TrackFormat {
        self.format
    }

    #[inline]
    pub fn bit_rate(&self) -> BitRate {
        self.bit_rate
    }

    #[inline]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[inline]
    pub fn num_samples(&self) -> usize {
        self.samples.len() / self.sample_size
    }

    /// Bytes of one sample, `None` past the last sample
    pub fn raw_sample(&self, sample_index: usize) -> Option<&[u8]> {
        let start = sample_index.checked_mul(self.sample_size)?;
        let end = start.checked_add(self.sample_size)?;
        self.samples.get(start..end)
    }
}
