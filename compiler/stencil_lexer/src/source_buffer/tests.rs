use super::*;
use crate::ItemKind;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("empty", "");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.name(), "empty");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn valid_bytes_decode_unchanged() {
    let source = "caf\u{e9} {{ 1 }} \u{1F600}";
    let buf = SourceBuffer::from_bytes("utf8", source.as_bytes());
    assert_eq!(buf.as_str(), source);
    assert!(buf.encoding_issues().is_empty());
}

// === BOM Detection ===

#[test]
fn detects_utf8_bom_and_keeps_it() {
    let buf = SourceBuffer::new("bom", "\u{FEFF}hello");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
    assert!(buf.as_str().starts_with('\u{FEFF}'));
}

#[test]
fn detects_utf16_le_bom() {
    let buf = SourceBuffer::from_bytes("utf16", &[0xFF, 0xFE, b'h', 0]);
    assert_eq!(buf.encoding_issues()[0].kind, EncodingIssueKind::Utf16LeBom);
    // Both BOM bytes are also invalid UTF-8.
    let invalid = buf
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InvalidUtf8)
        .count();
    assert_eq!(invalid, 2);
}

#[test]
fn detects_utf16_be_bom() {
    let buf = SourceBuffer::from_bytes("utf16", &[0xFE, 0xFF]);
    assert_eq!(buf.encoding_issues()[0].kind, EncodingIssueKind::Utf16BeBom);
}

// === Invalid UTF-8 ===

#[test]
fn invalid_byte_is_replaced() {
    let buf = SourceBuffer::from_bytes("bad", b"ab\xFFcd");
    assert_eq!(buf.as_str(), "ab\u{FFFD}cd");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            pos: 2,
            len: 1,
        }]
    );
}

#[test]
fn truncated_sequence_at_end_is_replaced() {
    // First two bytes of a three-byte sequence.
    let buf = SourceBuffer::from_bytes("bad", b"x\xE2\x82");
    assert_eq!(buf.as_str(), "x\u{FFFD}");
    assert_eq!(buf.encoding_issues()[0].len, 2);
}

#[test]
fn issue_positions_refer_to_decoded_text() {
    let buf = SourceBuffer::from_bytes("bad", b"\xFF\xFFz");
    let positions: Vec<u32> = buf.encoding_issues().iter().map(|i| i.pos).collect();
    // Each replacement character is three bytes in the decoded text.
    assert_eq!(positions, vec![0, 3]);
    assert_eq!(buf.as_str(), "\u{FFFD}\u{FFFD}z");
}

#[test]
fn matches_std_lossy_decoding() {
    let inputs: &[&[u8]] = &[b"", b"plain", b"\xC0\x80", b"a\xF0\x9F\x98", b"\xED\xA0\x80x"];
    for bytes in inputs {
        let buf = SourceBuffer::from_bytes("lossy", bytes);
        assert_eq!(buf.as_str(), String::from_utf8_lossy(bytes), "input {bytes:?}");
    }
}

// === Scanner Creation ===

#[test]
fn scanner_borrows_buffer_text_and_name() {
    let buf = SourceBuffer::new("greeting", "hi {{ 3 }}");
    let mut scanner = buf.scanner();
    assert_eq!(scanner.name(), "greeting");
    let first = scanner.next_item();
    assert_eq!(first.kind, ItemKind::Text);
    assert_eq!(first.value, "hi ");
}

#[test]
fn replacement_character_is_text() {
    let buf = SourceBuffer::from_bytes("bad", b"\xFF{{1}}");
    let kinds: Vec<ItemKind> = buf.scanner().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ItemKind::Text,
            ItemKind::LeftDelimiter,
            ItemKind::Number,
            ItemKind::RightDelimiter,
            ItemKind::EndOfInput,
        ]
    );
}
