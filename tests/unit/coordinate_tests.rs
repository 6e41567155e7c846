//! Tokenizer and coordinate parsing through the public API.

use tiles_cli::coordinate::{Coordinate, ResolvedTile, tokenize};
use tiles_cli::core::TilesError;

#[test]
fn tokenize_documented_examples() {
    assert_eq!(tokenize("g:a:1.0"), vec!["g", "a", "1.0"]);
    assert_eq!(tokenize("g:a:${prop:default}"), vec!["g", "a", "${prop:default}"]);
    assert_eq!(tokenize("${a${b}c}:x:y"), vec!["${a${b}c}", "x", "y"]);
    assert_eq!(tokenize("g}:a:v"), vec!["g}", "a", "v"]);
    assert_eq!(tokenize("g:a:"), vec!["g", "a"]);
    assert_eq!(tokenize("::x"), vec!["", "", "x"]);
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_repeated_plain_field() {
    for s in ["g", "io.example", "1.0-SNAPSHOT", "a}b", "$x", "{y}"] {
        let text = format!("{s}:{s}:{s}");
        assert_eq!(tokenize(&text), vec![s, s, s], "input {text}");
    }
}

#[test]
fn parse_reports_field_count() {
    match Coordinate::parse("g:a:") {
        Err(TilesError::MalformedCoordinate {
            text,
            fields,
        }) => {
            assert_eq!(text, "g:a:");
            assert_eq!(fields, 2);
        }
        other => panic!("Expected MalformedCoordinate, got {other:?}"),
    }

    assert!(matches!(
        Coordinate::parse("a:b:c:d"),
        Err(TilesError::MalformedCoordinate { fields: 4, .. })
    ));
}

#[test]
fn parsed_placeholder_version() {
    let coordinate = Coordinate::parse("io.example:base-tile:${tiles.version}").unwrap();
    assert!(coordinate.has_unresolved_version());
    assert_eq!(coordinate.version.as_deref(), Some("${tiles.version}"));

    let concrete = Coordinate::parse("io.example:base-tile:1.0").unwrap();
    assert!(!concrete.has_unresolved_version());
    assert_eq!(concrete.with_version("1.0"), ResolvedTile::new("io.example", "base-tile", "1.0"));
}

#[test]
fn display_name_has_xml_suffix() {
    let tile = ResolvedTile::new("io.example", "base-tile", "1.0");
    assert_eq!(tile.to_string(), "io.example:base-tile:1.0");
    assert_eq!(tile.display_name(), "io.example:base-tile:1.0.xml");
}
