//! # Error Types
//!
//! This module defines the error type reported by sentence decoding.

use std::fmt;

/// Represents the ways decoding an NMEA 0183 sentence can fail.
///
/// Malformed *fields* are never an error: the typed accessors on
/// [`Sentence`](crate::Sentence) resolve unparsable numbers to zero and
/// unrecognized tokens to a vocabulary's `Unknown` variant. The variants
/// here cover the conditions that abort a decode as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The checksum in the sentence was present and did not match the
    /// value calculated over the sentence content.
    ///
    /// An *absent* checksum is not an error; checksums are optional.
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the sentence
        found: u8,
    },

    /// No decoder is registered for the sentence's 3-letter mnemonic.
    ///
    /// Carries the mnemonic that was received for bookkeeping and
    /// diagnostics.
    UnrecognizedSentence(String),

    /// The sentence does not start with `$` or `!` followed by a header
    /// token long enough to hold a talker id and a mnemonic.
    MalformedHeader,

    /// The sentence contains non-ASCII bytes.
    ///
    /// NMEA 0183 is an ASCII protocol; the checksum is defined over
    /// ASCII bytes only.
    NonAscii,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ChecksumMismatch { expected, found } => write!(
                f,
                "invalid checksum: computed {expected:02X}, sentence carries {found:02X}"
            ),
            Error::UnrecognizedSentence(mnemonic) => {
                write!(f, "unrecognized sentence \"{mnemonic}\"")
            }
            Error::MalformedHeader => write!(f, "sentence header is missing or too short"),
            Error::NonAscii => write!(f, "sentence contains non-ASCII bytes"),
        }
    }
}

impl std::error::Error for Error {}
