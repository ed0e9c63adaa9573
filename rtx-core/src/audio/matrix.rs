//! Path compatibility matrix
//!
//! Row and column are [`AudioPath::index`] values. A `1` means the two paths
//! can be open at the same time on this hardware. The table is measured, not
//! derived, and it is not symmetric.

use super::path::{AudioPath, PATH_COUNT};

/// Compatibility of concurrently open paths, indexed `[open][candidate]`
#[rustfmt::skip]
pub const COMPATIBILITY_MATRIX: [[u8; PATH_COUNT]; PATH_COUNT] = [
    [0, 0, 0, 1, 0, 1, 1, 0, 1],
    [0, 0, 0, 0, 1, 1, 0, 0, 1],
    [0, 0, 0, 1, 1, 0, 1, 1, 0],
    [0, 1, 1, 0, 0, 0, 0, 1, 1],
    [1, 0, 1, 0, 0, 0, 1, 0, 1],
    [1, 1, 0, 0, 0, 0, 1, 1, 0],
    [0, 1, 1, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 1, 0, 1, 0, 0, 0],
    [1, 1, 0, 1, 1, 0, 0, 0, 0],
];

/// Check whether `a` and `b` may be open at the same time
pub fn check_compatibility(a: AudioPath, b: AudioPath) -> bool {
    COMPATIBILITY_MATRIX[a.index()][b.index()] == 1
}

/// Check `candidate` against every path in `open`
pub fn compatible_with_all(candidate: AudioPath, open: &[AudioPath]) -> bool {
    open.iter().all(|&path| check_compatibility(path, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::path::{AudioSink, AudioSource};

    /// Reference table, row by row
    const EXPECTED: [&str; 9] = [
        "000101101",
        "000011001",
        "000110110",
        "011000011",
        "101000101",
        "110000110",
        "011011000",
        "001101000",
        "110110000",
    ];

    #[test]
    fn test_all_81_pairs_match_table() {
        for (row, bits) in EXPECTED.iter().enumerate() {
            for (col, bit) in bits.bytes().enumerate() {
                let a = AudioPath::from_index(row).unwrap();
                let b = AudioPath::from_index(col).unwrap();
                assert_eq!(
                    check_compatibility(a, b),
                    bit == b'1',
                    "row {} col {}",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_path_never_compatible_with_itself() {
        for i in 0..PATH_COUNT {
            let p = AudioPath::from_index(i).unwrap();
            assert!(!check_compatibility(p, p));
        }
    }

    #[test]
    fn test_table_is_not_symmetric() {
        let mic_spk = AudioPath::new(AudioSource::Mic, AudioSink::Spk);
        let rtx_spk = AudioPath::new(AudioSource::Rtx, AudioSink::Spk);
        assert!(check_compatibility(mic_spk, rtx_spk));
        assert!(!check_compatibility(rtx_spk, mic_spk));
    }

    #[test]
    fn test_compatible_with_all() {
        let rtx_spk = AudioPath::new(AudioSource::Rtx, AudioSink::Spk);
        let rtx_mcu = AudioPath::new(AudioSource::Rtx, AudioSink::Mcu);
        let mcu_rtx = AudioPath::new(AudioSource::Mcu, AudioSink::Rtx);
        let mic_rtx = AudioPath::new(AudioSource::Mic, AudioSink::Rtx);

        // Nothing open: anything goes
        assert!(compatible_with_all(rtx_spk, &[]));

        // [3][7] = 1
        assert!(compatible_with_all(mcu_rtx, &[rtx_spk]));
        // [3][7] = 1 but [5][7] = 1 too
        assert!(compatible_with_all(mcu_rtx, &[rtx_spk, rtx_mcu]));
        // [3][1] = 1, [5][1] = 1, [7][1] = 0
        assert!(!compatible_with_all(mic_rtx, &[rtx_spk, rtx_mcu, mcu_rtx]));
    }
}
