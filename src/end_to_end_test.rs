use representations;
use scale::Scale;
use serde_json;
use typeset;

#[test]
fn expanded_c_listing() {
    let scales = Scale::expand("C").unwrap();
    let listing = typeset::render_with_indentation(&scales, false);

    let lines = listing
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<&str>>();

    assert_eq!(
        lines,
        vec![
            "C     d     e     F     G     a     B0",
            "      d     E0    F     g     a     A#    C",
            "            e     F#0   G     a     b     C     D",
            "                  F     g     a     A#    C     d     E0",
            "                        G     a     b     C     D     e     F#0",
            "                              a     B0    C     d     e     F     G",
            "                                    B     c#    d#    E     F#    g#    A#0",
        ],
        "Every derived scale lines up under its degree of the basis."
    );
}

#[test]
fn all_c_listing() {
    let scales = Scale::all("C").unwrap();
    let listing = typeset::render_with_indentation(&scales, false);

    let lines = listing
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<&str>>();

    assert_eq!(lines.len(), 12, "One row per chromatic tone.");
    assert_eq!(lines[0], "C     d     e     F     G     a     B0");
    assert_eq!(
        lines[1],
        "   C#    d#    f     F#    G#    a#    C0",
        "C# isn't a degree of C major, so its row drifts right."
    );
    assert_eq!(
        lines[11],
        "                                    B     c#    d#    E     F#    g#    A#0",
        "B lines up under degree 7 of the basis."
    );
}

#[test]
fn expanded_minor_listing_keeps_minor_tonality() {
    let scales = Scale::expand("a").unwrap();
    assert_eq!(scales.len(), 7);

    let listing = typeset::render_with_indentation(&scales, false);
    assert!(
        listing.lines().next().unwrap().starts_with("a     B0    C"),
        "The basis row is the A minor scale itself."
    );
}

#[test]
fn matrix_rows_for_the_whole_family() {
    let basis = Scale::for_name("C").unwrap();
    let highlight = basis.tones();

    for scale in Scale::all("C").unwrap().iter() {
        let row = typeset::chromatic_matrix(scale, "C", &highlight, false).unwrap();
        assert_eq!(
            row.chars().count(),
            24 * typeset::CELL_WIDTH + 23 * typeset::CELL_GAP.len(),
            "Every row is exactly two fixed-width chromatic laps."
        );
    }
}

#[test]
fn json_report_for_c() {
    let expanded = Scale::expand("C").unwrap();
    let chromatic = Scale::all("C").unwrap();
    let json = representations::report_to_json("C", &expanded, &chromatic);

    let value: serde_json::Value = serde_json::from_str(&json).expect("Can't parse report.");
    assert_eq!(value["tonic"], "C");
    assert_eq!(value["expanded"][0]["tones"][6], "B0");
    assert_eq!(value["chromatic"][11]["tonic"], "B");
}

#[test]
fn unknown_tonic_fails_the_whole_pipeline() {
    assert!(Scale::for_name("H").is_err());
    assert!(Scale::expand("H").is_err());
    assert!(Scale::all("H").is_err());
}
