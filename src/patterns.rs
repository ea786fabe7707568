/// the sixteen repeated-nibble bytes, ascending
pub const SINGLE_PATTERNS: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

/// the six cyclic 3-byte patterns targeting MFM and RLL(2,7) encodings
pub const TRIPLE_PATTERNS: [[u8; 3]; 6] = [
    [0x92, 0x49, 0x24],
    [0x49, 0x24, 0x92],
    [0x24, 0x92, 0x49],
    [0x6d, 0xb6, 0xdb],
    [0xb6, 0xdb, 0x6d],
    [0xdb, 0x6d, 0xb6],
];

/// a single full-file overwrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// fresh unpredictable bytes for every chunk written
    Random,

    /// a short fixed pattern tiled across the whole file
    Pattern(&'static [u8]),
}

/// total number of passes in a wipe
pub const PASS_COUNT: usize = 35;

/// Peter Gutmann's overwrite sequence, in the order it must be applied
///
/// the random passes at both ends hide the state of the patterned passes
/// from anyone who can only observe the final write.
pub const GUTMANN_PASSES: [Pass; PASS_COUNT] = [
    Pass::Random,
    Pass::Random,
    Pass::Random,
    Pass::Random,
    Pass::Pattern(&[0x55]),
    Pass::Pattern(&[0xaa]),
    Pass::Pattern(&[0x92, 0x49, 0x24]),
    Pass::Pattern(&[0x49, 0x24, 0x92]),
    Pass::Pattern(&[0x24, 0x92, 0x49]),
    Pass::Pattern(&[0x00]),
    Pass::Pattern(&[0x11]),
    Pass::Pattern(&[0x22]),
    Pass::Pattern(&[0x33]),
    Pass::Pattern(&[0x44]),
    Pass::Pattern(&[0x55]),
    Pass::Pattern(&[0x66]),
    Pass::Pattern(&[0x77]),
    Pass::Pattern(&[0x88]),
    Pass::Pattern(&[0x99]),
    Pass::Pattern(&[0xaa]),
    Pass::Pattern(&[0xbb]),
    Pass::Pattern(&[0xcc]),
    Pass::Pattern(&[0xdd]),
    Pass::Pattern(&[0xee]),
    Pass::Pattern(&[0xff]),
    Pass::Pattern(&[0x92, 0x49, 0x24]),
    Pass::Pattern(&[0x49, 0x24, 0x92]),
    Pass::Pattern(&[0x24, 0x92, 0x49]),
    Pass::Pattern(&[0x6d, 0xb6, 0xdb]),
    Pass::Pattern(&[0xb6, 0xdb, 0x6d]),
    Pass::Pattern(&[0xdb, 0x6d, 0xb6]),
    Pass::Random,
    Pass::Random,
    Pass::Random,
    Pass::Random,
];

impl Pass {
    /// short label used when logging progress
    ///
    /// # Examples
    /// ```
    /// use gutshred::patterns::Pass;
    ///
    /// assert_eq!(Pass::Random.describe(), "random");
    /// assert_eq!(Pass::Pattern(&[0x92, 0x49, 0x24]).describe(), "0x92 0x49 0x24");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            Pass::Random => "random".to_string(),
            Pass::Pattern(bytes) => bytes
                .iter()
                .map(|b| format!("{:#04x}", b))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// tiles `pattern` across `buffer` in whole repetitions
///
/// returns the length of the filled prefix, which is `buffer.len()` rounded
/// down to a multiple of the pattern length. writing that prefix back to back
/// keeps the pattern phase aligned across chunk boundaries.
///
/// # Panics
/// panics if `pattern` is empty
///
/// # Examples
/// ```
/// use gutshred::patterns::tile;
///
/// let mut buffer = vec![0; 8];
/// let filled = tile(&[0x92, 0x49, 0x24], &mut buffer);
/// assert_eq!(filled, 6);
/// assert_eq!(&buffer[..filled], &[0x92, 0x49, 0x24, 0x92, 0x49, 0x24]);
/// ```
pub fn tile(pattern: &[u8], buffer: &mut [u8]) -> usize {
    assert!(!pattern.is_empty(), "cannot tile an empty pattern");

    let filled = buffer.len() - buffer.len() % pattern.len();
    for chunk in buffer[..filled].chunks_exact_mut(pattern.len()) {
        chunk.copy_from_slice(pattern);
    }
    filled
}
