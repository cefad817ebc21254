//! Typeset
//! Render scales as aligned, optionally coloured text grids.
//! Pure string building throughout; writing to a sink is the caller's job.

use chromatic;
use chromatic::UnknownTone;
use scale;
use scale::Scale;
use std::ops::RangeInclusive;

/// Width of one tone cell, excluding the gap.
pub const CELL_WIDTH: usize = 4;

/// Gap between cells.
pub const CELL_GAP: &'static str = "  ";

// Indent step for scales whose tonic isn't a degree of the basis.
const DRIFT_INDENT: usize = 3;

/// Green, for tones shared with the basis scale.
pub fn green(text: &str) -> String {
    format!("\x1b[0;32m{}\x1b[0m", text)
}

/// Bright green, for the tonic itself.
pub fn bright_green(text: &str) -> String {
    format!("\x1b[1;32m{}\x1b[0m", text)
}

/// A title over a rule of '=' the same length.
pub fn underlined(title: &str) -> String {
    format!("{}\n{}", title, "=".repeat(title.chars().count()))
}

/// Left-justify `text` to `width` columns.
/// Colouring happens after padding, so escape codes never count against the
/// width.
pub fn ljust(text: &str, width: usize) -> String {
    let mut result = String::from(text);
    while result.chars().count() < width {
        result.push(' ');
    }
    result
}

/// One scale as a row of padded cells.
/// Tones listed in `colored` (exactly as the basis scale spells them) are
/// highlighted.
pub fn render_scale(
    scale: &Scale,
    range: RangeInclusive<i32>,
    colored: Option<&[String]>,
) -> String {
    let cells: Vec<String> = scale
        .tones_in(range)
        .iter()
        .map(|tone| {
            let cell = ljust(tone, CELL_WIDTH);
            match colored {
                Some(set) if set.iter().any(|member| member == tone) => green(&cell),
                _ => cell,
            }
        })
        .collect();

    cells.join(CELL_GAP)
}

/// The scale listing layout: the first scale is the basis. A scale whose
/// tonic is a degree of the basis lines up under that degree's column and is
/// coloured against the basis tone set; anything else drifts right by a
/// fixed step and renders plain.
pub fn render_with_indentation(scales: &[Scale], colorize: bool) -> String {
    let basis = match scales.first() {
        Some(basis) => basis,
        None => return String::new(),
    };
    let basis_tones = basis.tones();

    let mut indent = 0;
    let mut lines = Vec::with_capacity(scales.len());
    for scale in scales.iter() {
        match basis.position(&scale.tonic(), true) {
            Some(pos) => {
                indent = (pos as usize - 1) * (CELL_WIDTH + CELL_GAP.len());

                let colored = if colorize {
                    Some(basis_tones.as_slice())
                } else {
                    None
                };
                lines.push(format!(
                    "{}{}",
                    " ".repeat(indent),
                    render_scale(scale, 1..=7, colored)
                ));
            }
            None => {
                indent += DRIFT_INDENT;
                lines.push(format!(
                    "{}{}",
                    " ".repeat(indent),
                    render_scale(scale, 1..=7, None)
                ));
            }
        }
    }

    lines.join("\n")
}

/// A fixed-width piano-roll row: two laps of the chromatic run starting at
/// `basis`, with this scale's own tones spelled out and every other pitch a
/// dash. Without colour the row stays blank until the scale's tonic first
/// appears; with colour output starts at once, the tonic bright and tones
/// shared with `highlight` green.
pub fn chromatic_matrix(
    scale: &Scale,
    basis: &str,
    highlight: &[String],
    colorize: bool,
) -> Result<String, UnknownTone> {
    let start = chromatic::index_of(basis)? as i32;
    let tonic = scale.tonic();

    let mut started = colorize;
    let mut cells = Vec::with_capacity(2 * chromatic::TONES.len());
    for i in 0..(2 * chromatic::TONES.len() as i32) {
        let name = chromatic::tone_at(start + i);

        let cell = match scale.tone_like(name) {
            Some(spelling) => {
                if spelling == tonic {
                    started = true;
                }

                if !started {
                    ljust("", CELL_WIDTH)
                } else {
                    let padded = ljust(&spelling, CELL_WIDTH);
                    if colorize && spelling == tonic {
                        bright_green(&padded)
                    } else if colorize && in_tone_set(highlight, &spelling) {
                        green(&padded)
                    } else {
                        padded
                    }
                }
            }
            None => {
                if started {
                    ljust("-", CELL_WIDTH)
                } else {
                    ljust("", CELL_WIDTH)
                }
            }
        };
        cells.push(cell);
    }

    Ok(cells.join(CELL_GAP))
}

/// Does the set contain this tone, regardless of case and marker?
fn in_tone_set(set: &[String], tone: &str) -> bool {
    let wanted = scale::base_name(tone);
    set.iter().any(|member| scale::base_name(member) == wanted)
}
