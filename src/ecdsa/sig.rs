//! ECDSA signature type and its wire encodings.
//!
//! Two serializations are supported, both wire-format contracts:
//!
//! - ASN.1 DER (`ECDSA-Sig-Value`):
//!   `0x30 || L || 0x02 || L_r || R || 0x02 || L_s || S`, with `R` and `S`
//!   minimally encoded unsigned integers (a leading `0x00` is prepended
//!   iff the high bit of the first byte is set).
//! - 65-byte compact: `prefix || R(32) || S(32)` where
//!   `prefix = recid + 27 + (4 if compressed-public-key else 0)`; valid
//!   prefixes are 27–30 (uncompressed family) and 31–34 (compressed
//!   family).

use crate::arithmetic::Scalar;
use crate::{Error, Result};
use core::fmt::{self, Display};

/// ASN.1 tag for a SEQUENCE.
const DER_TAG_SEQUENCE: u8 = 0x30;

/// ASN.1 tag for an INTEGER.
const DER_TAG_INTEGER: u8 = 0x02;

/// Identifies which of the up to four candidate public keys produced a
/// given ECDSA signature.
///
/// Bit 0 is the parity of `R`'s y-coordinate; bit 1 records whether `R`'s
/// x-coordinate wrapped modulo n (i.e. `x = r + n`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Maximum supported value (inclusive).
    pub const MAX: u8 = 3;

    /// Creates a recovery id from its component bits.
    pub const fn new(is_y_odd: bool, is_x_reduced: bool) -> Self {
        Self((is_x_reduced as u8) << 1 | (is_y_odd as u8))
    }

    /// Is the y-coordinate of the candidate `R` point odd?
    pub const fn is_y_odd(self) -> bool {
        self.0 & 1 != 0
    }

    /// Did `R`'s x-coordinate wrap modulo n?
    pub const fn is_x_reduced(self) -> bool {
        self.0 & 0b10 != 0
    }

    /// Converts a byte in `0..=3` into a recovery id.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte <= Self::MAX {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Returns the recovery id as a byte.
    pub const fn to_byte(self) -> u8 {
        self.0
    }
}

/// ECDSA/secp256k1 signature: the scalar pair `(r, s)`, optionally
/// accompanied by a recovery id.
///
/// Both components are in `[1, n)`; encodings carrying values outside that
/// range are rejected at parse time. A signature parsed from DER has no
/// recovery id; one parsed from the compact form always does.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
    recovery_id: Option<RecoveryId>,
}

impl Signature {
    /// Builds a signature from its scalar components.
    ///
    /// Returns [`Error::SignatureMalformed`] if either component is zero.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self> {
        if r.is_zero() || s.is_zero() {
            return Err(Error::SignatureMalformed);
        }
        Ok(Self {
            r,
            s,
            recovery_id: None,
        })
    }

    /// Returns the same signature carrying the given recovery id.
    pub fn with_recovery_id(mut self, recovery_id: RecoveryId) -> Self {
        self.recovery_id = Some(recovery_id);
        self
    }

    /// Borrows the `r` component.
    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// Borrows the `s` component.
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Returns the recovery id, if this signature carries one.
    pub fn recovery_id(&self) -> Option<RecoveryId> {
        self.recovery_id
    }

    /// Is the `s` component in the upper half of the scalar field?
    pub fn is_high(&self) -> bool {
        self.s.is_high()
    }

    /// Applies low-S normalization (BIP 62): if `s > n/2`, `s` is replaced
    /// by `n − s` and, when a recovery id is present, its parity bit is
    /// flipped (negating `s` negates `R`'s y-coordinate).
    pub fn normalize_s(&self) -> Self {
        if !self.is_high() {
            return self.clone();
        }
        Self {
            r: self.r.clone(),
            s: self.s.negate(),
            recovery_id: self
                .recovery_id
                .map(|id| RecoveryId::new(!id.is_y_odd(), id.is_x_reduced())),
        }
    }

    /// Parses a signature from either supported wire shape: 65-byte
    /// compact when the length and prefix byte match, ASN.1 DER otherwise.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        match bytes {
            [prefix, rest @ ..] if rest.len() == 64 && (27..=34).contains(prefix) => {
                Self::from_compact(bytes)
            }
            _ => Self::from_der(bytes),
        }
    }

    /// Parses an ASN.1 DER signature. The result carries no recovery id.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        // r and s fit in at most 33 bytes each, so the sequence length is
        // always a single byte.
        if bytes.len() < 8 || bytes[0] != DER_TAG_SEQUENCE {
            return Err(Error::SignatureMalformed);
        }
        if bytes[1] as usize != bytes.len() - 2 {
            return Err(Error::SignatureMalformed);
        }

        let (r, rest) = der_integer(&bytes[2..])?;
        let (s, rest) = der_integer(rest)?;
        if !rest.is_empty() {
            return Err(Error::SignatureMalformed);
        }

        Self::from_scalars(r, s)
    }

    /// Serializes as ASN.1 DER.
    pub fn to_der(&self) -> Vec<u8> {
        let r = der_integer_bytes(&self.r);
        let s = der_integer_bytes(&self.s);

        let mut out = Vec::with_capacity(6 + r.len() + s.len());
        out.push(DER_TAG_SEQUENCE);
        out.push((4 + r.len() + s.len()) as u8);
        out.push(DER_TAG_INTEGER);
        out.push(r.len() as u8);
        out.extend_from_slice(&r);
        out.push(DER_TAG_INTEGER);
        out.push(s.len() as u8);
        out.extend_from_slice(&s);
        out
    }

    /// Parses a 65-byte compact signature. The recovery id is decoded from
    /// the prefix byte as `prefix − 27`, modulo the compressed-family
    /// offset of 4.
    pub fn from_compact(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 65 {
            return Err(Error::SignatureMalformed);
        }
        let prefix = bytes[0];
        if !(27..=34).contains(&prefix) {
            return Err(Error::SignatureMalformed);
        }

        let t = i16::from(prefix) - 27 - 4;
        let recid = if t < 0 { t + 4 } else { t } as u8;
        let recovery_id =
            RecoveryId::from_byte(recid).ok_or(Error::SignatureMalformed)?;

        let r: &[u8; 32] = bytes[1..33].try_into().expect("length checked above");
        let s: &[u8; 32] = bytes[33..65].try_into().expect("length checked above");
        let r = Scalar::from_bytes(r).ok_or(Error::SignatureMalformed)?;
        let s = Scalar::from_bytes(s).ok_or(Error::SignatureMalformed)?;

        Ok(Self::from_scalars(r, s)?.with_recovery_id(recovery_id))
    }

    /// Was this compact prefix byte produced with a compressed public key?
    pub(crate) fn compact_prefix_is_compressed(prefix: u8) -> bool {
        prefix >= 31
    }

    /// Serializes as a 65-byte compact signature.
    ///
    /// Requires a recovery id; returns [`Error::RecoveryId`] if this
    /// signature does not carry one. `compressed` selects the prefix
    /// family.
    pub fn to_compact(&self, compressed: bool) -> Result<[u8; 65]> {
        let recovery_id = self.recovery_id.ok_or(Error::RecoveryId)?;

        let mut out = [0u8; 65];
        out[0] = recovery_id.to_byte() + 27 + if compressed { 4 } else { 0 };
        out[1..33].copy_from_slice(&self.r.to_bytes());
        out[33..65].copy_from_slice(&self.s.to_bytes());
        Ok(out)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_der()))
    }
}

/// Parses one DER INTEGER, returning the scalar and the remaining bytes.
fn der_integer(input: &[u8]) -> Result<(Scalar, &[u8])> {
    if input.len() < 3 || input[0] != DER_TAG_INTEGER {
        return Err(Error::SignatureMalformed);
    }
    let len = input[1] as usize;
    if len == 0 || input.len() < 2 + len {
        return Err(Error::SignatureMalformed);
    }

    let value = &input[2..2 + len];
    let scalar = Scalar::from_uint(num_bigint::BigUint::from_bytes_be(value))
        .ok_or(Error::SignatureMalformed)?;
    Ok((scalar, &input[2 + len..]))
}

/// Minimal unsigned big-endian encoding of a scalar, with a leading zero
/// byte whenever the high bit of the top byte is set.
fn der_integer_bytes(scalar: &Scalar) -> Vec<u8> {
    let raw = scalar.to_bytes();
    let start = raw.iter().position(|&b| b != 0).unwrap_or(31);
    let mut out = Vec::with_capacity(33);
    if raw[start] & 0x80 != 0 {
        out.push(0x00);
    }
    out.extend_from_slice(&raw[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::{RecoveryId, Signature};
    use crate::arithmetic::Scalar;
    use crate::Error;
    use hex_literal::hex;

    // Deterministic SHA-256 signature over b"hello" under the key
    // 5EC0A1AA3526F46E6251D8926922A4EF3D8B2198BFF538EC19C063638A5505B9,
    // low-S normalized.
    const R: [u8; 32] = hex!("2a41a2d679ffcccce389d3b27a80ace8a47635389904ae66701ca2402c3cd564");
    const S: [u8; 32] = hex!("311388a038e938b02804e32f87514fe9e95df9920274d527b7f248bc2c42733c");
    const DER: [u8; 70] = hex!(
        "304402202a41a2d679ffcccce389d3b27a80ace8a47635389904ae66701ca2402c3cd564
         0220311388a038e938b02804e32f87514fe9e95df9920274d527b7f248bc2c42733c"
    );

    fn signature() -> Signature {
        Signature::from_scalars(
            Scalar::from_bytes(&R).unwrap(),
            Scalar::from_bytes(&S).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn recovery_id_bits() {
        assert_eq!(RecoveryId::new(false, false).to_byte(), 0);
        assert_eq!(RecoveryId::new(true, false).to_byte(), 1);
        assert_eq!(RecoveryId::new(false, true).to_byte(), 2);
        assert_eq!(RecoveryId::new(true, true).to_byte(), 3);
        assert!(RecoveryId::from_byte(4).is_none());
    }

    #[test]
    fn der_round_trip() {
        let sig = signature();
        assert_eq!(sig.to_der(), DER);

        let parsed = Signature::from_der(&DER).unwrap();
        assert_eq!(parsed, sig);
        assert!(parsed.recovery_id().is_none());
    }

    #[test]
    fn der_inserts_leading_zero_for_high_bit() {
        // r with the top bit set encodes as 33 bytes, giving a 71-byte
        // signature.
        let der = hex!(
            "3045022100c4565e8f8d27302096ce69ffc796db749863088d6fb2cd92561207342af531e8
             02200ea5ecc947a23a4bbb7956775349847eb7a224fdb1bb25f2bc1d222e7ee84b0c"
        );
        let sig = Signature::from_der(&der).unwrap();
        assert_eq!(
            sig.r().to_bytes(),
            hex!("c4565e8f8d27302096ce69ffc796db749863088d6fb2cd92561207342af531e8")
        );
        assert_eq!(sig.to_der(), der);
    }

    #[test]
    fn der_rejects_malformed_input() {
        assert_eq!(Signature::from_der(&[]), Err(Error::SignatureMalformed));

        let mut bad_tag = DER;
        bad_tag[0] = 0x31;
        assert_eq!(
            Signature::from_der(&bad_tag),
            Err(Error::SignatureMalformed)
        );

        let mut bad_len = DER;
        bad_len[1] ^= 1;
        assert_eq!(
            Signature::from_der(&bad_len),
            Err(Error::SignatureMalformed)
        );

        // truncated
        assert_eq!(
            Signature::from_der(&DER[..DER.len() - 1]),
            Err(Error::SignatureMalformed)
        );
    }

    #[test]
    fn compact_round_trip() {
        let recovery_id = RecoveryId::from_byte(1).unwrap();
        let sig = signature().with_recovery_id(recovery_id);

        let compact = sig.to_compact(true).unwrap();
        assert_eq!(compact[0], 32); // 1 + 27 + 4
        assert_eq!(compact[1..33], R);
        assert_eq!(compact[33..65], S);

        let parsed = Signature::from_compact(&compact).unwrap();
        assert_eq!(parsed.recovery_id(), Some(recovery_id));
        assert_eq!(parsed.r(), sig.r());
        assert_eq!(parsed.s(), sig.s());
    }

    #[test]
    fn compact_uncompressed_family() {
        let sig = signature().with_recovery_id(RecoveryId::from_byte(1).unwrap());
        let compact = sig.to_compact(false).unwrap();
        assert_eq!(compact[0], 28); // 1 + 27
        assert!(!Signature::compact_prefix_is_compressed(compact[0]));

        let parsed = Signature::from_compact(&compact).unwrap();
        assert_eq!(parsed.recovery_id(), Some(RecoveryId::from_byte(1).unwrap()));
    }

    #[test]
    fn compact_requires_recovery_id() {
        assert_eq!(signature().to_compact(true), Err(Error::RecoveryId));
    }

    #[test]
    fn compact_rejects_bad_prefix() {
        let sig = signature().with_recovery_id(RecoveryId::from_byte(0).unwrap());
        let mut compact = sig.to_compact(true).unwrap();
        compact[0] = 35;
        assert_eq!(
            Signature::from_compact(&compact),
            Err(Error::SignatureMalformed)
        );
    }

    #[test]
    fn slice_dispatch() {
        let sig = signature().with_recovery_id(RecoveryId::from_byte(1).unwrap());
        let compact = sig.to_compact(true).unwrap();

        assert!(Signature::from_slice(&compact)
            .unwrap()
            .recovery_id()
            .is_some());
        assert!(Signature::from_slice(&DER).unwrap().recovery_id().is_none());
    }

    #[test]
    fn normalize_flips_high_s_and_recid() {
        let high = Signature::from_scalars(
            Scalar::from_bytes(&R).unwrap(),
            Scalar::from_bytes(&S).unwrap().negate(),
        )
        .unwrap()
        .with_recovery_id(RecoveryId::from_byte(0).unwrap());
        assert!(high.is_high());

        let low = high.normalize_s();
        assert!(!low.is_high());
        assert_eq!(low.s().to_bytes(), S);
        assert_eq!(low.recovery_id(), Some(RecoveryId::from_byte(1).unwrap()));

        // Already-low signatures are untouched.
        assert_eq!(low.normalize_s(), low);
    }
}
