//! Raw radial bytes -> color codes, grounded in `NIDSUtil::getRLEColors`/`getColors`/
//! `getGenericColors`.

/// Run-length-encoded nibble colors: each byte packs a repeat count (high nibble) and a color
/// code 0-15 (low nibble). Used for packet code -20705 (x'AF1F').
pub fn rle_colors(src: &[u8]) -> Vec<i32> {
    let mut out = Vec::new();
    for &byte in src {
        let run = (byte >> 4) & 0x0F;
        let color = (byte & 0x0F) as i32;
        for _ in 0..run {
            out.push(color);
        }
    }
    out
}

/// One color code per byte. Used for packet code 16.
pub fn raw_colors(src: &[u8]) -> Vec<i32> {
    src.iter().map(|&b| b as i32).collect()
}

/// Native 16-bit signed color codes, little-endian pair packing (as the source's in-memory
/// union reinterprets two chars as a `short` on a little-endian host). Used for packet code 28,
/// which this codec otherwise rejects before reaching color decode; kept for completeness.
pub fn generic_colors(src: &[u8]) -> Vec<i32> {
    src.chunks_exact(2).map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as i32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rle_expands_run_length() {
        // high nibble 3 (run), low nibble 5 (color) -> three 5s.
        assert_eq!(rle_colors(&[0x35]), vec![5, 5, 5]);
    }

    #[test]
    fn rle_zero_run_produces_nothing() {
        assert_eq!(rle_colors(&[0x05]), Vec::<i32>::new());
    }

    #[test]
    fn raw_colors_is_one_per_byte() {
        assert_eq!(raw_colors(&[1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn generic_colors_pairs_bytes_little_endian() {
        assert_eq!(generic_colors(&[0x01, 0x00, 0xFF, 0xFF]), vec![1, -1]);
    }
}
