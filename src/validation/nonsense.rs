//! Fast pre-filter for improbable letter sequences
//!
//! Flags strings a player is unlikely to mean as a word: long letter repeats,
//! keyboard walks, alphabet runs, vowel-less words and long consonant
//! clusters. It runs before any dictionary lookup and may reject some real
//! words.

/// Keyboard-row walks that never start a real guess
const KEYBOARD_PATTERNS: &[&str] = &[
    "QWERT", "ASDF", "ZXCV", "POIUY", "LKJH", "MNBV", "QWER", "WERT", "ERTY", "RTYU", "TYUI",
    "YUIO", "UIOP", "SDFG", "DFGH", "FGHJ", "GHJK", "HJKL", "XCVB", "CVBN", "VBNM",
];

/// Longest accepted run of one repeated letter
const MAX_REPEAT: usize = 2;

/// Longest accepted consonant cluster
const MAX_CONSONANT_RUN: usize = 3;

/// Check whether `word` looks like keyboard mashing rather than a word
///
/// The comparison is case-insensitive.
///
/// # Examples
/// ```
/// use wordle_arcade::validation::is_nonsense;
///
/// assert!(is_nonsense("AAAB"));
/// assert!(is_nonsense("qwert"));
/// assert!(!is_nonsense("HELLO"));
/// ```
#[must_use]
pub fn is_nonsense(word: &str) -> bool {
    let upper = word.to_ascii_uppercase();
    let bytes = upper.as_bytes();

    has_long_repeat(bytes)
        || KEYBOARD_PATTERNS.iter().any(|p| upper.contains(p))
        || has_alphabet_run(bytes)
        || !bytes.iter().any(|&b| is_vowel_or_y(b))
        || has_consonant_cluster(bytes)
}

fn has_long_repeat(bytes: &[u8]) -> bool {
    bytes
        .chunk_by(|a, b| a == b)
        .any(|run| run.len() > MAX_REPEAT)
}

fn has_alphabet_run(bytes: &[u8]) -> bool {
    bytes.windows(3).any(|w| {
        let (a, b, c) = (i16::from(w[0]), i16::from(w[1]), i16::from(w[2]));
        let step = b - a;
        step.abs() == 1 && c - b == step
    })
}

fn has_consonant_cluster(bytes: &[u8]) -> bool {
    bytes
        .chunk_by(|&a, &b| is_cluster_consonant(a) == is_cluster_consonant(b))
        .any(|run| is_cluster_consonant(run[0]) && run.len() > MAX_CONSONANT_RUN)
}

const fn is_vowel_or_y(b: u8) -> bool {
    matches!(b, b'A' | b'E' | b'I' | b'O' | b'U' | b'Y')
}

/// Consonants counted toward a cluster; H and Y soften clusters and are left out
const fn is_cluster_consonant(b: u8) -> bool {
    matches!(
        b,
        b'B' | b'C'
            | b'D'
            | b'F'
            | b'G'
            | b'J'
            | b'K'
            | b'L'
            | b'M'
            | b'N'
            | b'P'
            | b'Q'
            | b'R'
            | b'S'
            | b'T'
            | b'V'
            | b'W'
            | b'X'
            | b'Z'
    )
}
