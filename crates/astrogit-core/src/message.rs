//! Paragraph splitting for horoscope messages.
//!
//! A message is broken after every ". " that is immediately followed by an
//! ASCII capital letter. The ". " stays with the paragraph it ends, so
//! concatenating the paragraphs gives back the original message.

use std::iter::FusedIterator;

/// Lazily split a message into paragraphs.
///
/// Always yields at least one item; a message without a boundary yields
/// itself unchanged.
pub fn paragraphs(message: &str) -> Paragraphs<'_> {
    Paragraphs {
        rest: Some(message),
    }
}

/// Iterator returned by [`paragraphs`].
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match find_boundary(rest) {
            Some(at) => {
                self.rest = Some(&rest[at..]);
                Some(&rest[..at])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl FusedIterator for Paragraphs<'_> {}

/// Byte offset of the first paragraph start after position 0.
fn find_boundary(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    // bytes[i] is ASCII at a match, so `i` is always a char boundary
    (2..bytes.len())
        .find(|&i| bytes[i - 2] == b'.' && bytes[i - 1] == b' ' && bytes[i].is_ascii_uppercase())
}
