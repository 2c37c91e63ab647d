//! Block segmentation.

/// Splits `data` into `block_size` chunks; the final chunk may be shorter.
///
/// A `block_size` of zero yields no blocks.
pub fn divide_into_blocks(data: &[u8], block_size: usize) -> Vec<Vec<u8>> {
    if block_size == 0 {
        return Vec::new();
    }
    data.chunks(block_size).map(<[u8]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_tail() {
        let data: Vec<u8> = (0..40).collect();
        let blocks = divide_into_blocks(&data, 16);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].len(), 16);
        assert_eq!(blocks[2], (32..40).collect::<Vec<u8>>());
        assert_eq!(blocks.concat(), data);
    }

    #[test]
    fn empty_and_degenerate_input() {
        assert!(divide_into_blocks(&[], 16).is_empty());
        assert!(divide_into_blocks(b"abc", 0).is_empty());
        assert_eq!(divide_into_blocks(&[9u8; 32], 16).len(), 2);
    }
}
