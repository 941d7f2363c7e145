use super::*;

fn parse_err(input: &str) -> (usize, usize, String) {
    match parse_source(input).unwrap_err() {
        BibStatsError::Parse {
            line,
            column,
            message,
        } => (line, column, message),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn parses_single_entry() {
    let db = parse_source("@article{smith2020, title = {A Study}, year = {2020}}").unwrap();
    assert_eq!(db.len(), 1);

    let entry = &db.entries()[0];
    assert_eq!(entry.entry_type(), "article");
    assert_eq!(entry.key(), "smith2020");
    assert_eq!(entry.get("title"), Some("A Study"));
    assert_eq!(entry.year(), Some("2020"));
}

#[test]
fn entry_type_and_field_names_are_lowercased() {
    let db = parse_source("@InProceedings{k, Title = {T}, YEAR = {1999}}").unwrap();
    let entry = &db.entries()[0];
    assert_eq!(entry.entry_type(), "inproceedings");
    assert_eq!(entry.year(), Some("1999"));
}

#[test]
fn preserves_file_order() {
    let src = "@misc{b, year = {2}}\n@misc{a, year = {1}}\n@misc{c, year = {3}}";
    let db = parse_source(src).unwrap();
    let keys: Vec<_> = db.entries().iter().map(Entry::key).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn bare_number_year() {
    let db = parse_source("@article{k, year = 2021}").unwrap();
    assert_eq!(db.entries()[0].year(), Some("2021"));
}

#[test]
fn collapses_whitespace_in_values() {
    let db = parse_source("@misc{k, title = {A\n    long   title}}").unwrap();
    assert_eq!(db.entries()[0].get("title"), Some("A long title"));
}

#[test]
fn strips_byte_order_mark() {
    let db = parse_source("\u{feff}@misc{k, year = {2001}}").unwrap();
    assert_eq!(db.entries()[0].year(), Some("2001"));
}

#[test]
fn month_abbreviations_are_predefined() {
    let db = parse_source("@article{k, month = jan, year = {2020}}").unwrap();
    assert_eq!(db.entries()[0].year(), Some("2020"));
    assert!(db.entries()[0].get("month").is_some());
}

#[test]
fn string_definitions_expand_and_concatenate() {
    let src = "@string{conf = \"Proc. of the \"}\n\
               @inproceedings{k, booktitle = conf # \"Workshop\", year = {2018}}";
    let db = parse_source(src).unwrap();
    assert_eq!(db.len(), 1);
    assert_eq!(db.entries()[0].get("booktitle"), Some("Proc. of the Workshop"));
}

#[test]
fn comments_are_not_entries() {
    let src = "Free text before.\n@comment{ignored}\n@misc{k, year = {2000}}";
    let db = parse_source(src).unwrap();
    assert_eq!(db.len(), 1);
}

#[test]
fn empty_input_yields_empty_database() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse_source("  \n\n").unwrap().is_empty());
}

#[test]
fn undefined_abbreviation_is_an_error() {
    let err = parse_source("@article{a, year = undefinedmacro}\n@article{b, year = {2020}}")
        .unwrap_err();
    assert!(matches!(err, BibStatsError::Parse { .. }));
}

#[test]
fn unterminated_entry_is_an_error() {
    let (line, column, message) = parse_err("@misc{ok, year = {1}}\n@misc{k, year = {2020}");
    assert!(line >= 1);
    assert!(column >= 1);
    assert!(!message.is_empty());
}

#[test]
fn unterminated_brace_value_is_an_error() {
    parse_err("@article{broken, title = {never closed");
}

mod position_tests {
    use super::super::line_column;

    #[test]
    fn first_character() {
        assert_eq!(line_column("abc", 0), (1, 1));
    }

    #[test]
    fn after_newlines() {
        assert_eq!(line_column("ab\ncd\nef", 7), (3, 2));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(line_column("ü x", 3), (1, 3));
    }

    #[test]
    fn offset_past_end_is_clamped() {
        assert_eq!(line_column("ab\n", 99), (2, 1));
    }
}
