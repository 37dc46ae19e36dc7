//! Transport encodings for binary values.
//!
//! Signatures (and other binary outputs) can travel as lowercase hex or as
//! standard padded Base64. Hex decoding is case-insensitive; a mismatched
//! encoding surfaces as [`Error::Decode`].

use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Supported transport encodings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Encoding {
    /// Base16, lowercase on output, case-insensitive on input.
    Hex,
    /// Standard Base64 alphabet with padding.
    Base64,
}

impl Encoding {
    /// Encode `bytes` into the textual form of this encoding.
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
        }
    }

    /// Decode `input` from the textual form of this encoding.
    pub fn decode(self, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Encoding::Hex => hex::decode(input).map_err(|_| Error::Decode),
            Encoding::Base64 => STANDARD.decode(input).map_err(|_| Error::Decode),
        }
    }
}
