use crate::{parse, LoadError};

#[test]
fn test_parse_single_byte() {
    assert_eq!(parse("10000010").unwrap(), [0x82]);
}

#[test]
fn test_parse_skips_blank_and_comment_lines() {
    let source = "\n# a whole comment line\n   \n00000001 # HLT\n";
    assert_eq!(parse(source).unwrap(), [0x01]);
}

#[test]
fn test_parse_ignores_characters_after_the_eighth() {
    // Only the first eight characters encode the byte.
    assert_eq!(parse("1000001011111111").unwrap(), [0x82]);
}

#[test]
fn test_parse_empty_source_is_an_empty_image() {
    assert_eq!(parse("").unwrap(), Vec::<u8>::new());
    assert_eq!(parse("# nothing but comments\n").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_parse_rejects_short_lines() {
    assert!(matches!(
        parse("1010"),
        Err(LoadError::MalformedInstruction { line: 1, .. })
    ));
}

#[test]
fn test_parse_rejects_non_binary_digits() {
    assert!(matches!(
        parse("0000002x"),
        Err(LoadError::MalformedInstruction { line: 1, .. })
    ));
    // A sign is not a binary digit either.
    assert!(matches!(
        parse("+1000000"),
        Err(LoadError::MalformedInstruction { line: 1, .. })
    ));
}

#[test]
fn test_parse_reports_the_offending_line_and_text() {
    let source = "00000001\n# fine so far\nnope\n";
    match parse(source) {
        Err(LoadError::MalformedInstruction { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text, "nope");
        }
        other => panic!("expected MalformedInstruction, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_oversize_images() {
    let source = "00000000\n".repeat(257);
    assert!(matches!(
        parse(&source),
        Err(LoadError::ProgramTooLarge { bytes: 257 })
    ));
    assert_eq!(parse(&"00000000\n".repeat(256)).unwrap().len(), 256);
}

#[test]
fn test_load_file_missing_is_a_file_error() {
    assert!(matches!(
        crate::load_file("no/such/file.ls8"),
        Err(LoadError::File(_))
    ));
}

#[test]
fn test_parse_full_program() {
    let source = "\
# print8.ls8: print the number 8
10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";
    assert_eq!(parse(source).unwrap(), [0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
}
