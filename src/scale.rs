use chromatic;
use chromatic::{Quality, UnknownTone};
use std::ops::RangeInclusive;

/// Major or minor, read off the letter case of the tonic as supplied.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Tonality {
    Major,
    Minor,
}

impl Tonality {
    pub fn name(&self) -> &'static str {
        match self {
            &Tonality::Major => "major",
            &Tonality::Minor => "minor",
        }
    }
}

/// A diatonic scale: a tonic pitch class plus a tonality.
/// Immutable; every query is a pure function of (tonic index, tonality,
/// degree), so instances can be built, queried and thrown away freely.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Scale {
    // Chromatic index of the tonic.
    offset: usize,

    tonality: Tonality,
}

/// Normalise any degree into 1..=7. Degree 8 is degree 1 again, degree 0 is
/// degree 7 of the octave below.
pub fn bound_pos(pos: i32) -> i32 {
    ((pos - 1).rem_euclid(7)) + 1
}

/// Lowercased tone name with any diminished marker stripped.
/// The common ground for case-insensitive tone comparison.
pub fn base_name(tone: &str) -> String {
    tone.trim_end_matches('0').to_lowercase()
}

impl Scale {
    /// Parse a tone name into a scale, driven by the alphabet table.
    /// A name equal to its own uppercasing gives major, anything else minor.
    pub fn for_name(tonic: &str) -> Result<Scale, UnknownTone> {
        let offset = chromatic::index_of(tonic)?;

        let tonality = if tonic == tonic.to_uppercase() {
            Tonality::Major
        } else {
            Tonality::Minor
        };

        Ok(Scale { offset, tonality })
    }

    /// One scale per tone of the chromatic run starting at `basis`, in
    /// circular order, all taking the basis scale's tonality.
    pub fn all(basis: &str) -> Result<Vec<Scale>, UnknownTone> {
        let basis_scale = Scale::for_name(basis)?;
        let start = chromatic::index_of(basis)? as i32;

        let run = chromatic::circular_slice(&chromatic::TONES, start, chromatic::TONES.len());

        let mut result = Vec::with_capacity(run.len());
        for name in run.iter() {
            let cased = match basis_scale.tonality() {
                Tonality::Major => name.to_uppercase(),
                Tonality::Minor => name.to_lowercase(),
            };
            result.push(Scale::for_name(&cased)?);
        }

        Ok(result)
    }

    /// One scale per diatonic tone of the basis scale.
    /// A derived tone whose spelling falls outside the alphabet is dropped
    /// rather than failing the whole expansion; only the basis itself is
    /// allowed to fail.
    pub fn expand(basis: &str) -> Result<Vec<Scale>, UnknownTone> {
        let basis_scale = Scale::for_name(basis)?;

        Ok(basis_scale
            .tones()
            .iter()
            .filter_map(|tone| Scale::for_name(tone).ok())
            .collect())
    }

    pub fn tonality(&self) -> Tonality {
        self.tonality
    }

    pub fn tonic(&self) -> String {
        self.tone(1)
    }

    pub fn subdominant(&self) -> String {
        self.tone(4)
    }

    pub fn dominant(&self) -> String {
        self.tone(5)
    }

    /// The tone at a scale degree, cased by that degree's triad quality.
    /// Total for every integer degree.
    pub fn tone(&self, pos: i32) -> String {
        let pos = bound_pos(pos);
        let name = chromatic::tone_at(self.offset as i32 + self.step_sum_for_pos(pos));
        self.with_case(name, pos)
    }

    /// The seven diatonic tones, degree 1 through 7.
    pub fn tones(&self) -> Vec<String> {
        self.tones_in(1..=7)
    }

    /// Tones over an arbitrary degree range, e.g. 1..=8 to include the
    /// octave. Each position is normalised individually.
    pub fn tones_in(&self, range: RangeInclusive<i32>) -> Vec<String> {
        range.map(|pos| self.tone(pos)).collect()
    }

    /// 1-based degree of a tone within this scale, or None when the scale
    /// doesn't contain it. Case-insensitive search also ignores the
    /// diminished marker on either side.
    pub fn position(&self, tone: &str, case_insensitive: bool) -> Option<i32> {
        let tones = self.tones();

        let found = if case_insensitive {
            let wanted = base_name(tone);
            tones.iter().position(|candidate| base_name(candidate) == wanted)
        } else {
            tones.iter().position(|candidate| candidate == tone)
        };

        found.map(|index| index as i32 + 1)
    }

    /// This scale's own spelling of a pitch, if the pitch belongs to it.
    pub fn tone_like(&self, tone: &str) -> Option<String> {
        self.position(tone, true).map(|pos| self.tone(pos))
    }

    /// Cumulative semitone distance from degree 1 up to `pos`.
    /// Minor reads the major step table from its sixth degree, which is the
    /// natural minor pattern.
    fn step_sum_for_pos(&self, pos: i32) -> i32 {
        let pos = bound_pos(pos);

        let mut sum = 0;
        for i in 2..=pos {
            sum += match self.tonality {
                Tonality::Major => chromatic::circular_at(&chromatic::STEPS, i - 2),
                Tonality::Minor => chromatic::circular_at(&chromatic::STEPS, i + 3),
            };
        }

        sum
    }

    /// Apply quality casing: major degrees print uppercase, diminished
    /// uppercase with a trailing marker, minor lowercase.
    fn with_case(&self, name: &str, pos: i32) -> String {
        let look_pos = match self.tonality {
            Tonality::Major => pos - 1,
            Tonality::Minor => pos + 4,
        };

        match chromatic::circular_at(&chromatic::QUALITIES, look_pos) {
            Quality::Major => name.to_uppercase(),
            Quality::Diminished => name.to_uppercase() + "0",
            Quality::Minor => name.to_lowercase(),
        }
    }
}
