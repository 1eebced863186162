//! SSHFP IANA parameters.
//!
//! This module contains the registry data the validators in [validate] are
//! driven by: the currently assigned SSHFP public key algorithm numbers,
//! the currently assigned fingerprint types, and the fingerprint length
//! each type requires.
//!
//! For the currently registered values see the [IANA registration]. The
//! data in this module is complete as of 2026-08-30.
//!
//! All tables are static and immutable. They never change at runtime.
//!
//! [validate]: crate::validate
//! [IANA registration]: https://www.iana.org/assignments/dns-sshfp-rr-parameters/dns-sshfp-rr-parameters.xhtml
//! [RFC 4255]: https://tools.ietf.org/html/rfc4255
//! [RFC 6594]: https://tools.ietf.org/html/rfc6594
//! [RFC 7479]: https://tools.ietf.org/html/rfc7479

use core::ops::RangeInclusive;

//------------ Public key algorithms -----------------------------------------

/// Reserved. [RFC 4255]
pub const ALGORITHM_RESERVED: u64 = 0;

/// The RSA algorithm. [RFC 4255]
pub const ALGORITHM_RSA: u64 = 1;

/// The DSA algorithm. [RFC 4255]
pub const ALGORITHM_DSA: u64 = 2;

/// The ECDSA algorithm. [RFC 6594]
pub const ALGORITHM_ECDSA: u64 = 3;

/// The Ed25519 algorithm. [RFC 7479]
pub const ALGORITHM_ED25519: u64 = 4;

/// The currently assigned public key algorithm numbers.
///
/// Algorithm number 0 is reserved and therefore not part of this range.
pub const ASSIGNED_ALGORITHMS: RangeInclusive<u64> =
    ALGORITHM_RSA..=ALGORITHM_ED25519;

//------------ Fingerprint types ---------------------------------------------

/// Reserved. [RFC 4255]
pub const FINGERPRINT_TYPE_RESERVED: u64 = 0;

/// The SHA-1 digest algorithm. [RFC 4255]
pub const FINGERPRINT_TYPE_SHA1: u64 = 1;

/// The SHA-256 digest algorithm. [RFC 6594]
pub const FINGERPRINT_TYPE_SHA256: u64 = 2;

/// The currently assigned fingerprint types.
pub const ASSIGNED_FINGERPRINT_TYPES: RangeInclusive<u64> =
    FINGERPRINT_TYPE_SHA1..=FINGERPRINT_TYPE_SHA256;

//------------ Fingerprint lengths -------------------------------------------

/// Required fingerprint length in hex digits by fingerprint type.
///
/// Keyed by the decimal fingerprint type exactly as it appears in the
/// candidate input. SHA-1 produces a 20 octet digest, SHA-256 a 32 octet
/// digest, so the presentation format carries 40 and 64 hex digits,
/// respectively.
const FINGERPRINT_HEX_LEN: &[(&str, usize)] = &[("1", 40), ("2", 64)];

/// Returns the fingerprint length in hex digits required by `fptype`.
///
/// The lookup uses the fingerprint type exactly as presented. Only the
/// literal decimal renditions of the registered types have an entry, so
/// there is none for, say, `"01"` or `"3"`.
pub fn fingerprint_hex_len(fptype: &str) -> Option<usize> {
    FINGERPRINT_HEX_LEN
        .iter()
        .find(|&&(key, _)| key == fptype)
        .map(|&(_, len)| len)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registered_lengths() {
        assert_eq!(fingerprint_hex_len("1"), Some(40));
        assert_eq!(fingerprint_hex_len("2"), Some(64));
    }

    #[test]
    fn unregistered_types_have_no_length() {
        assert_eq!(fingerprint_hex_len("0"), None);
        assert_eq!(fingerprint_hex_len("3"), None);
        assert_eq!(fingerprint_hex_len(""), None);

        // The table is keyed by the raw presentation, so a leading zero
        // misses even though the numeric value is registered.
        assert_eq!(fingerprint_hex_len("01"), None);
    }

    #[test]
    fn assigned_ranges() {
        assert!(ASSIGNED_ALGORITHMS.contains(&ALGORITHM_ECDSA));
        assert!(!ASSIGNED_ALGORITHMS.contains(&ALGORITHM_RESERVED));
        assert!(ASSIGNED_FINGERPRINT_TYPES.contains(&FINGERPRINT_TYPE_SHA256));
        assert!(!ASSIGNED_FINGERPRINT_TYPES
            .contains(&FINGERPRINT_TYPE_RESERVED));
    }
}
