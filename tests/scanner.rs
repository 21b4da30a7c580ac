use std::io::Cursor;

use birthbook::error::BirthbookError;
use birthbook::scanner::Scanner;
use birthbook::stream::{CharStream, PushBack};

#[test]
fn next_on_empty_input_is_end() {
    let mut stream = PushBack::in_memory("");
    let mut scanner = Scanner::new(&mut stream);
    assert_eq!(scanner.next_significant().unwrap(), None);
}

#[test]
fn next_on_whitespace_only_is_end() {
    let mut stream = PushBack::in_memory("\n\t\n   \u{3000}\u{a0}  \n\t");
    let mut scanner = Scanner::new(&mut stream);
    assert_eq!(scanner.next_significant().unwrap(), None);
    // end of input can be observed again
    assert_eq!(scanner.next_significant().unwrap(), None);
}

#[test]
fn next_skips_surrounding_whitespace() {
    let mut stream = PushBack::in_memory("\n\t\n v \n\t");
    let mut scanner = Scanner::new(&mut stream);
    assert_eq!(scanner.next_significant().unwrap(), Some('v'));
    assert_eq!(scanner.next_significant().unwrap(), None);
}

#[test]
fn peek_does_not_consume() {
    let mut stream = PushBack::in_memory("  x  y");
    let mut scanner = Scanner::new(&mut stream);
    assert_eq!(scanner.peek_significant().unwrap(), Some('x'));
    assert_eq!(scanner.peek_significant().unwrap(), Some('x'));
    assert_eq!(scanner.next_significant().unwrap(), Some('x'));
    assert_eq!(scanner.peek_significant().unwrap(), Some('y'));
    assert_eq!(scanner.next_significant().unwrap(), Some('y'));
    assert_eq!(scanner.peek_significant().unwrap(), None);
}

#[test]
fn peek_discards_skipped_whitespace() {
    let mut stream = PushBack::in_memory("   z");
    Scanner::new(&mut stream).peek_significant().unwrap();
    // only the significant character went back
    assert_eq!(stream.read_char().unwrap(), Some('z'));
    assert_eq!(stream.read_char().unwrap(), None);
}

#[test]
fn push_back_holds_one_character() {
    let mut stream = PushBack::in_memory("ab");
    let a = stream.read_char().unwrap().unwrap();
    stream.unread_char(a).unwrap();
    let err = stream.unread_char('q').unwrap_err();
    assert!(matches!(err, BirthbookError::Invariant(_)));
    assert_eq!(stream.read_char().unwrap(), Some('a'));
    assert_eq!(stream.read_char().unwrap(), Some('b'));
}

#[test]
fn streaming_decodes_multibyte_characters() {
    let text = "é ∑ 𝄞 ü";
    let mut stream = PushBack::streaming(Cursor::new(text.as_bytes()));
    let mut scanner = Scanner::new(&mut stream);
    let mut seen = String::new();
    while let Some(c) = scanner.next_significant().unwrap() {
        seen.push(c);
    }
    assert_eq!(seen, "é∑𝄞ü");
}

#[test]
fn streaming_rejects_invalid_utf8() {
    let bytes: &[u8] = &[b'[', 0xFF, b']'];
    let mut stream = PushBack::streaming(Cursor::new(bytes));
    assert_eq!(stream.read_char().unwrap(), Some('['));
    assert!(matches!(stream.read_char().unwrap_err(), BirthbookError::InvalidUtf8));
}

#[test]
fn streaming_rejects_truncated_sequence() {
    let bytes: &[u8] = &[0xE2, 0x88];
    let mut stream = PushBack::streaming(Cursor::new(bytes));
    assert!(matches!(stream.read_char().unwrap_err(), BirthbookError::InvalidUtf8));
}
