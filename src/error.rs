//! Error type.

use core::fmt::{self, Display};

/// Result type with the `koblitz256` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by this crate.
///
/// Parse-time problems on user-supplied input (`SignatureMalformed`,
/// `Decode`, `PublicKey`, `SecretKey`) are recoverable and simply mean the
/// input was rejected. `Verification` means a well-formed signature did not
/// match the message and key. The remaining variants indicate API misuse or
/// a cryptographic invariant violation and are not expected in normal
/// operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Signature bytes do not match the DER or 65-byte compact shape, or
    /// carry `r`/`s` values outside `[1, n)`.
    SignatureMalformed,

    /// A hex or Base64 transport encoding failed to decode.
    Decode,

    /// SEC1 public key bytes were rejected: wrong length, unknown prefix
    /// byte, or a point that is not on the curve.
    PublicKey,

    /// Secret key bytes were rejected: wrong length or a scalar outside
    /// `[1, n)`.
    SecretKey,

    /// The signature is syntactically valid but does not verify against
    /// the message and key, or key recovery produced no valid point.
    Verification,

    /// A recovery id was absent where one is required, or outside `0..=3`.
    RecoveryId,

    /// The RFC 6979 nonce search exhausted its iteration bound. With a
    /// correctly functioning HMAC this is unreachable in practice.
    NonceExhausted,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::SignatureMalformed => "malformed signature",
            Error::Decode => "transport encoding decode failure",
            Error::PublicKey => "malformed public key",
            Error::SecretKey => "malformed secret key",
            Error::Verification => "signature verification failure",
            Error::RecoveryId => "missing or out of range recovery id",
            Error::NonceExhausted => "deterministic nonce search exhausted",
        })
    }
}

impl std::error::Error for Error {}
