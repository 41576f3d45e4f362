//! Text vector to binary word file conversion.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use num_bigint::BigInt;

use crate::config::WordEncoding;
use crate::error::{Error, Result};

use super::word::{decode_word, encode_word, parse_integer, Word, WORD_BYTES};

/// Encode one input line. Blank lines yield `None`.
fn encode_line(line_number: usize, line: &str, encoding: WordEncoding) -> Result<Option<Word>> {
    let text = line.trim();
    if text.is_empty() {
        debug!("Skipping blank line {line_number}");
        return Ok(None);
    }

    let value = parse_integer(text).ok_or_else(|| Error::Parse {
        line: line_number,
        text: text.to_string(),
    })?;

    encode_word(&value, encoding)
        .map(Some)
        .map_err(|source| Error::Overflow {
            line: line_number,
            text: text.to_string(),
            source,
        })
}

/// Encode every integer line of `reader` into `writer`, in order.
///
/// Returns the number of words written.
pub fn encode_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    encoding: WordEncoding,
) -> Result<usize> {
    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        if let Some(word) = encode_line(index + 1, &line?, encoding)? {
            writer.write_all(&word)?;
            count += 1;
        }
    }
    writer.flush()?;
    Ok(count)
}

/// Convert the decimal vector at `input` into a word file at `output`.
///
/// The output is created (or truncated) before the input is opened. A failing
/// line aborts the run and leaves the words written so far in place.
pub fn vector_to_binary(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    encoding: WordEncoding,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let output_access = |source: io::Error| Error::OutputAccess {
        path: output.to_path_buf(),
        source,
    };
    let input_access = |source: io::Error| Error::InputAccess {
        path: input.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(output).map_err(output_access)?);
    let reader = BufReader::new(File::open(input).map_err(input_access)?);

    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(input_access)?;
        if let Some(word) = encode_line(index + 1, &line, encoding)? {
            writer.write_all(&word).map_err(output_access)?;
            count += 1;
        }
    }
    writer.flush().map_err(output_access)?;

    info!(
        "Packed {} words ({} bytes) from {} to {}",
        count,
        count * WORD_BYTES,
        input.display(),
        output.display()
    );
    Ok(count)
}

/// Split a binary vector back into integers.
pub fn decode_words(bytes: &[u8], encoding: WordEncoding) -> Result<Vec<BigInt>> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(Error::TruncatedVector { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|word| decode_word(word, encoding))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn encode_text(text: &str, encoding: WordEncoding) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        encode_lines(text.as_bytes(), &mut out, encoding)?;
        Ok(out)
    }

    #[test]
    fn test_order_and_size() {
        let bytes = encode_text("5\n-3\n0\n", WordEncoding::Signed).unwrap();
        assert_eq!(bytes.len(), 96);
        assert_eq!(
            decode_words(&bytes, WordEncoding::Signed).unwrap(),
            vec![BigInt::from(5), BigInt::from(-3), BigInt::from(0)]
        );
        assert_eq!(
            decode_words(&bytes[32..64], WordEncoding::Signed).unwrap(),
            vec![BigInt::from(-3)]
        );
    }

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let mut out = Vec::new();
        let err = encode_lines("1\n\n   \nx\n".as_bytes(), &mut out, WordEncoding::Signed)
            .unwrap_err();
        match err {
            Error::Parse { line, text } => {
                assert_eq!(line, 4);
                assert_eq!(text, "x");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_crlf_and_padding_tolerated() {
        let bytes = encode_text(" 7 \r\n-8\r\n", WordEncoding::Signed).unwrap();
        assert_eq!(
            decode_words(&bytes, WordEncoding::Signed).unwrap(),
            vec![BigInt::from(7), BigInt::from(-8)]
        );
    }

    #[test]
    fn test_overflow_reports_line() {
        let too_big = (BigInt::from(1) << 255_u32).to_string();
        let text = format!("1\n{too_big}\n");
        let err = encode_text(&text, WordEncoding::Signed).unwrap_err();
        assert!(matches!(err, Error::Overflow { line: 2, .. }));
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        let err = encode_text("-1\n", WordEncoding::Unsigned).unwrap_err();
        assert!(matches!(err, Error::Overflow { line: 1, .. }));
    }

    #[test]
    fn test_misplaced_separator_is_parse_error() {
        let err = encode_text("1_000\n1__0\n", WordEncoding::Signed).unwrap_err();
        match err {
            Error::Parse { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "1__0");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_produces_empty_output() {
        assert!(encode_text("", WordEncoding::Signed).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_partial_word() {
        let err = decode_words(&[0u8; 33], WordEncoding::Signed).unwrap_err();
        assert!(matches!(err, Error::TruncatedVector { len: 33 }));
    }

    #[test]
    fn test_vector_to_binary_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("vector.txt");
        let output = dir.path().join("vector.bin");
        fs::write(&input, "5\n-3\n0\n").unwrap();

        let count = vector_to_binary(&input, &output, WordEncoding::Signed).unwrap();
        assert_eq!(count, 3);

        let bytes = fs::read(&output).unwrap();
        assert_eq!(bytes.len(), 96);
        assert_eq!(bytes[0], 5);
        assert_eq!(bytes[32], 0xFD);
        assert!(bytes[64..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_vector_to_binary_missing_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("vector.bin");
        let err = vector_to_binary(dir.path().join("absent.txt"), &output, WordEncoding::Signed)
            .unwrap_err();
        assert!(matches!(err, Error::InputAccess { .. }));
        // Output is opened first, as a truncating create.
        assert!(output.exists());
    }

    #[test]
    fn test_vector_to_binary_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("vector.txt");
        fs::write(&input, "1\n").unwrap();
        let output = dir.path().join("missing").join("v.bin");
        let err = vector_to_binary(&input, output, WordEncoding::Signed).unwrap_err();
        assert!(matches!(err, Error::OutputAccess { .. }));
    }

    #[test]
    fn test_vector_to_binary_parse_failure() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("vector.txt");
        let output = dir.path().join("vector.bin");
        fs::write(&input, "1\n2\nthree\n").unwrap();

        let err = vector_to_binary(&input, &output, WordEncoding::Signed).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }
}
