//! Chromatic space.
//! The fixed 12-tone alphabet and the circular tables everything else reads:
//! the diatonic step pattern and the degree quality pattern. All indexing
//! here is circular, so callers never need to bounds-check.

use regex;

/// The twelve canonical pitch class names, in chromatic order.
/// Stored lowercase; presentation case belongs to the scale layer.
pub const TONES: [&'static str; 12] = [
    "c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b",
];

/// Whole/half step shape of a major scale, in semitones. Sums to an octave.
pub const STEPS: [i32; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Triad quality of each major scale degree.
pub const QUALITIES: [Quality; 7] = [
    Quality::Major,
    Quality::Minor,
    Quality::Minor,
    Quality::Major,
    Quality::Major,
    Quality::Minor,
    Quality::Diminished,
];

#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

/// A tone name that matches none of the accepted spellings.
/// Carries the offending input so callers can report it.
#[derive(Debug, PartialEq, Clone)]
pub struct UnknownTone(pub String);

/// Wrap any integer into [0, 12). Negative input wraps from the top.
pub fn circular_index(i: i32) -> usize {
    i.rem_euclid(TONES.len() as i32) as usize
}

/// The canonical tone name at a chromatic index, wrapping as needed.
pub fn tone_at(i: i32) -> &'static str {
    TONES[circular_index(i)]
}

/// The element at a circular index into any fixed table.
pub fn circular_at<T: Copy>(values: &[T], i: i32) -> T {
    values[i.rem_euclid(values.len() as i32) as usize]
}

/// Take `len` elements from `values` starting at `start`, wrapping around
/// the end as many times as needed.
pub fn circular_slice<T: Copy>(values: &[T], start: i32, len: usize) -> Vec<T> {
    let mut result = Vec::with_capacity(len);
    for i in 0..len as i32 {
        result.push(circular_at(values, start + i));
    }
    result
}

/// Inverse lookup of a tone name, case-insensitively.
/// Accepts the canonical spelling ("c#"), the "is" accidental alternate
/// ("cis"), and an optional trailing diminished marker ("B0"), so that tone
/// names produced by rendering round-trip back into the alphabet.
pub fn index_of(name: &str) -> Result<usize, UnknownTone> {
    let re = regex::Regex::new(r"^([a-g])(#|is)?0?$").unwrap();

    let lowered = name.to_lowercase();
    if let Some(groups) = re.captures(&lowered) {
        if let Some(letter) = groups.get(1) {
            let mut canonical = letter.as_str().to_string();
            if groups.get(2).is_some() {
                canonical.push('#');
            }

            // "e#" and "b#" pass the shape test but aren't pitch classes.
            if let Some(index) = TONES.iter().position(|tone| *tone == canonical) {
                return Ok(index);
            }
        }
    }

    Err(UnknownTone(name.to_string()))
}
