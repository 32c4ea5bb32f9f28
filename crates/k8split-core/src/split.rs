//! Line-ending detection and document splitting
//!
//! Documents are separated by a line holding only `---`. The separator is
//! matched byte for byte, so it has to use the same line break as the input.

const LF_SEPARATOR: &[u8] = b"\n---\n";
const CRLF_SEPARATOR: &[u8] = b"\r\n---\r\n";

/// Line break used to build the document separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

/// How the line break of the separator is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEndingPolicy {
    /// Use CRLF only on Windows, and only when the input contains CRLF
    #[default]
    Platform,
    /// Use CRLF whenever the input contains CRLF
    Content,
}

impl LineEnding {
    /// Pick the line ending for `input` under `policy`
    pub fn detect(input: &[u8], policy: LineEndingPolicy) -> Self {
        let honor_crlf = match policy {
            LineEndingPolicy::Platform => cfg!(windows),
            LineEndingPolicy::Content => true,
        };

        if honor_crlf && contains(input, b"\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    /// The `<linebreak>---<linebreak>` sequence for this line ending
    pub fn separator(&self) -> &'static [u8] {
        match self {
            LineEnding::Lf => LF_SEPARATOR,
            LineEnding::Crlf => CRLF_SEPARATOR,
        }
    }
}

/// Split `input` into documents on the separator for `line_ending`
///
/// Without any separator the whole input is returned as one chunk. A single
/// empty trailing chunk, left behind by a trailing separator, is dropped.
pub fn split_documents(input: &[u8], line_ending: LineEnding) -> Vec<&[u8]> {
    let separator = line_ending.separator();
    let mut chunks = Vec::new();
    let mut rest = input;

    while let Some(pos) = find(rest, separator) {
        chunks.push(&rest[..pos]);
        rest = &rest[pos + separator.len()..];
    }
    chunks.push(rest);

    if chunks.last().is_some_and(|chunk| chunk.is_empty()) {
        chunks.pop();
    }

    chunks
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}
