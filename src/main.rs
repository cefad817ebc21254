use std::env;
use std::process;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

mod chromatic;
#[cfg(test)]
mod end_to_end_test;
mod representations;
mod scale;
mod typeset;

use chromatic::UnknownTone;
use scale::{Scale, Tonality};

/// Tonic supplied on the command line, falling back to the TONIC
/// environment variable, then to C.
fn resolve_tonic(arg: Option<String>) -> String {
    match arg {
        Some(tonic) => tonic,
        None => match env::var("TONIC") {
            Ok(tonic) => tonic,
            Err(_) => "C".to_string(),
        },
    }
}

/// Colour unless NO_COLOR is set.
fn colorize() -> bool {
    env::var("NO_COLOR").is_err()
}

/// Report a bad tonic and quit. The tonic is the only user input that can
/// be invalid.
fn exit_unknown(name: &str) -> ! {
    eprintln!("Unknown tonic: {}", name);
    process::exit(1);
}

/// The expanded scale of a tonic: one scale per degree, indented so each
/// starts under its own degree's column.
fn main_expand(tonic: &str) {
    let scales = match Scale::expand(tonic) {
        Ok(scales) => scales,
        Err(UnknownTone(name)) => exit_unknown(&name),
    };

    println!(
        "{}",
        typeset::underlined(&format!("Expanded {} scale:", tonic))
    );
    println!("{}", typeset::render_with_indentation(&scales, colorize()));
}

/// All twelve scales of the tonic's tonality, in chromatic order.
fn main_all(tonic: &str) {
    let basis = match Scale::for_name(tonic) {
        Ok(basis) => basis,
        Err(UnknownTone(name)) => exit_unknown(&name),
    };
    let scales = match Scale::all(tonic) {
        Ok(scales) => scales,
        Err(UnknownTone(name)) => exit_unknown(&name),
    };

    let title = match basis.tonality() {
        Tonality::Major => "Major scales:",
        Tonality::Minor => "Minor scales:",
    };
    println!("{}", typeset::underlined(title));
    println!("{}", typeset::render_with_indentation(&scales, colorize()));
}

/// Both listings: the expansion, then the whole family.
fn main_show(tonic: &str) {
    main_expand(tonic);
    println!();
    main_all(tonic);
}

/// One chromatic-matrix row per scale of the family, stacked so their
/// relative alignment is visible.
fn main_matrix(tonic: &str) {
    let basis = match Scale::for_name(tonic) {
        Ok(basis) => basis,
        Err(UnknownTone(name)) => exit_unknown(&name),
    };
    let highlight = basis.tones();

    let scales = match Scale::all(tonic) {
        Ok(scales) => scales,
        Err(UnknownTone(name)) => exit_unknown(&name),
    };

    for scale in scales.iter() {
        match typeset::chromatic_matrix(scale, tonic, &highlight, colorize()) {
            Ok(row) => println!("{}", row),
            Err(UnknownTone(name)) => exit_unknown(&name),
        }
    }
}

/// The expansion and the chromatic family as JSON.
fn main_json(tonic: &str) {
    let expanded = match Scale::expand(tonic) {
        Ok(scales) => scales,
        Err(UnknownTone(name)) => exit_unknown(&name),
    };
    let chromatic = match Scale::all(tonic) {
        Ok(scales) => scales,
        Err(UnknownTone(name)) => exit_unknown(&name),
    };

    println!(
        "{}",
        representations::report_to_json(tonic, &expanded, &chromatic)
    );
}

fn main_usage() {
    eprintln!(
        "Usage: scaletool [command] [tonic]. Try:
 - show (the default)
 - expand
 - all
 - matrix
 - json

The tonic defaults to $TONIC, then C. Uppercase is major, lowercase minor.
Set NO_COLOR to disable highlighting."
    );
}

fn main() {
    let mut args = env::args();

    match args.nth(1) {
        Some(first) => match first.as_ref() {
            "show" => main_show(&resolve_tonic(args.next())),
            "expand" => main_expand(&resolve_tonic(args.next())),
            "all" => main_all(&resolve_tonic(args.next())),
            "matrix" => main_matrix(&resolve_tonic(args.next())),
            "json" => main_json(&resolve_tonic(args.next())),
            "help" | "--help" => main_usage(),
            // A bare tonic works too.
            tonic => main_show(tonic),
        },
        _ => main_show(&resolve_tonic(None)),
    }
}
