//! Fixed-width vector packing
//!
//! Converts range and sample vectors to their stored byte form:
//! - f32 → normalized unsigned N bits (value in [0.0, 1.0])
//! - f32 → f32 little-endian (full precision)
//!
//! The function names carry the total bit width of the packed vector
//! (e.g. `pack_vector3_u48` is 3 × 16 bits).

use glam::Vec4;

// ============================================================================
// Scalar Packing
// ============================================================================

/// Pack a normalized value to an unsigned integer of `num_bits` bits
///
/// Maps f32 range [0.0, 1.0] to [0, 2^num_bits - 1], rounding to nearest.
#[inline]
pub fn pack_scalar_unsigned(value: f32, num_bits: u8) -> u32 {
    debug_assert!(num_bits > 0 && num_bits < 32, "invalid bit count {num_bits}");
    let max_value = (1u32 << num_bits) - 1;
    (value.clamp(0.0, 1.0) * max_value as f32).round() as u32
}

/// Unpack an unsigned integer of `num_bits` bits to a normalized value
#[inline]
pub fn unpack_scalar_unsigned(value: u32, num_bits: u8) -> f32 {
    debug_assert!(num_bits > 0 && num_bits < 32, "invalid bit count {num_bits}");
    let max_value = (1u32 << num_bits) - 1;
    value as f32 / max_value as f32
}

// ============================================================================
// 3 Component Packing
// ============================================================================

/// Pack xyz to 3 × unorm8 (24 bits)
#[inline]
pub fn pack_vector3_u24(v: Vec4) -> [u8; 3] {
    [
        pack_scalar_unsigned(v.x, 8) as u8,
        pack_scalar_unsigned(v.y, 8) as u8,
        pack_scalar_unsigned(v.z, 8) as u8,
    ]
}

#[inline]
pub fn unpack_vector3_u24(bytes: &[u8; 3]) -> Vec4 {
    Vec4::new(
        unpack_scalar_unsigned(bytes[0] as u32, 8),
        unpack_scalar_unsigned(bytes[1] as u32, 8),
        unpack_scalar_unsigned(bytes[2] as u32, 8),
        0.0,
    )
}

/// Pack xyz to 3 × unorm16 (48 bits)
#[inline]
pub fn pack_vector3_u48(v: Vec4) -> [u8; 6] {
    let mut bytes = [0u8; 6];
    for (chunk, value) in bytes.chunks_exact_mut(2).zip([v.x, v.y, v.z]) {
        chunk.copy_from_slice(&(pack_scalar_unsigned(value, 16) as u16).to_le_bytes());
    }
    bytes
}

#[inline]
pub fn unpack_vector3_u48(bytes: &[u8; 6]) -> Vec4 {
    let component = |i: usize| {
        let packed = u16::from_le_bytes([bytes[i * 2], bytes[i * 2 + 1]]);
        unpack_scalar_unsigned(packed as u32, 16)
    };
    Vec4::new(component(0), component(1), component(2), 0.0)
}

/// Store xyz as 3 × f32 (96 bits)
#[inline]
pub fn pack_vector3_96(v: Vec4) -> [u8; 12] {
    let mut bytes = [0u8; 12];
    for (chunk, value) in bytes.chunks_exact_mut(4).zip([v.x, v.y, v.z]) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    bytes
}

#[inline]
pub fn unpack_vector3_96(bytes: &[u8; 12]) -> Vec4 {
    let component = |i: usize| {
        f32::from_le_bytes([bytes[i * 4], bytes[i * 4 + 1], bytes[i * 4 + 2], bytes[i * 4 + 3]])
    };
    Vec4::new(component(0), component(1), component(2), 0.0)
}

// ============================================================================
// 4 Component Packing
// ============================================================================

/// Pack xyzw to 4 × unorm8 (32 bits)
#[inline]
pub fn pack_vector4_u32(v: Vec4) -> [u8; 4] {
    v.to_array().map(|value| pack_scalar_unsigned(value, 8) as u8)
}

#[inline]
pub fn unpack_vector4_u32(bytes: &[u8; 4]) -> Vec4 {
    Vec4::from_array((*bytes).map(|packed| unpack_scalar_unsigned(packed as u32, 8)))
}

/// Pack xyzw to 4 × unorm16 (64 bits)
#[inline]
pub fn pack_vector4_u64(v: Vec4) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    for (chunk, value) in bytes.chunks_exact_mut(2).zip(v.to_array()) {
        chunk.copy_from_slice(&(pack_scalar_unsigned(value, 16) as u16).to_le_bytes());
    }
    bytes
}

#[inline]
pub fn unpack_vector4_u64(bytes: &[u8; 8]) -> Vec4 {
    let component = |i: usize| {
        let packed = u16::from_le_bytes([bytes[i * 2], bytes[i * 2 + 1]]);
        unpack_scalar_unsigned(packed as u32, 16)
    };
    Vec4::new(component(0), component(1), component(2), component(3))
}

/// Store xyzw as 4 × f32 (128 bits)
#[inline]
pub fn pack_vector4_128(v: Vec4) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    for (chunk, value) in bytes.chunks_exact_mut(4).zip(v.to_array()) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    bytes
}

#[inline]
pub fn unpack_vector4_128(bytes: &[u8; 16]) -> Vec4 {
    let component = |i: usize| {
        f32::from_le_bytes([bytes[i * 4], bytes[i * 4 + 1], bytes[i * 4 + 2], bytes[i * 4 + 3]])
    };
    Vec4::new(component(0), component(1), component(2), component(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_extremes() {
        assert_eq!(pack_scalar_unsigned(0.0, 8), 0);
        assert_eq!(pack_scalar_unsigned(1.0, 8), 255);
        assert_eq!(pack_scalar_unsigned(1.0, 16), 65535);
        assert_eq!(pack_scalar_unsigned(0.5, 16), 32768);
    }

    #[test]
    fn test_scalar_clamps_out_of_range() {
        assert_eq!(pack_scalar_unsigned(-0.25, 8), 0);
        assert_eq!(pack_scalar_unsigned(1.75, 8), 255);
    }

    #[test]
    fn test_vector3_u24_layout() {
        let bytes = pack_vector3_u24(Vec4::new(0.0, 1.0, 0.5, 0.9));
        assert_eq!(bytes, [0, 255, 128]);
    }

    #[test]
    fn test_vector3_u48_little_endian() {
        let bytes = pack_vector3_u48(Vec4::new(1.0, 0.0, 0.5, 0.0));
        assert_eq!(bytes, [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x80]);

        let unpacked = unpack_vector3_u48(&bytes);
        assert_eq!(unpacked.x, 1.0);
        assert_eq!(unpacked.y, 0.0);
        assert!((unpacked.z - 0.5).abs() < 1.0 / 65535.0);
    }

    #[test]
    fn test_vector3_96_is_exact() {
        let v = Vec4::new(-1.25, 3.5, 1.0e-3, 7.0);
        let unpacked = unpack_vector3_96(&pack_vector3_96(v));
        assert_eq!(unpacked, Vec4::new(-1.25, 3.5, 1.0e-3, 0.0));
    }

    #[test]
    fn test_vector4_packing_keeps_w() {
        let v = Vec4::new(0.0, 0.25, 0.75, 1.0);

        let u32_bytes = pack_vector4_u32(v);
        assert_eq!(u32_bytes[3], 255);
        assert!((unpack_vector4_u32(&u32_bytes) - v).abs().max_element() < 1.0 / 255.0);

        let u64_bytes = pack_vector4_u64(v);
        assert_eq!(&u64_bytes[6..8], &[0xFF, 0xFF]);
        assert!((unpack_vector4_u64(&u64_bytes) - v).abs().max_element() < 1.0 / 65535.0);

        assert_eq!(unpack_vector4_128(&pack_vector4_128(v)), v);
    }
}
