//! Validation of DNS SSHFP resource record fields.
//!
//! The SSHFP record type defined in [RFC 4255] publishes the fingerprint of
//! an SSH host key in the DNS. Its record data consists of three fields: a
//! public key algorithm number, a fingerprint type number selecting the
//! digest algorithm, and the fingerprint itself as a string of hex digits.
//!
//! This crate checks untrusted textual renditions of these three fields –
//! as they arrive from a web form, a configuration file, or a zone editor –
//! and hands back a cleaned value on success. It does not parse zone files
//! or whole resource records, it does not look anything up in the DNS, and
//! it does not compute or compare fingerprints against actual host keys. It
//! only answers the question whether a candidate field value is acceptable.
//!
//! The functionality lives in two modules:
//!
//! * [iana] holds the static registry data the checks are driven by: the
//!   assigned algorithm numbers, the assigned fingerprint types, and the
//!   digest length each fingerprint type requires, and
//! * [validate] contains the three validators themselves together with the
//!   [`Options`] policy structure and the [`Validated`] return type.
//!
//! All items of the [validate] module are re-exported here.
//!
//! Validation follows one of two policies selected through [`Options`]: the
//! default strict policy only accepts values from the currently assigned
//! IANA sets, while the relaxed policy accepts anything syntactically
//! well-formed. See the module documentation of [validate] for the one
//! place where the relaxed policy deliberately does not loosen the rules.
//!
//! [RFC 4255]: https://tools.ietf.org/html/rfc4255

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod iana;
pub mod validate;

pub use self::validate::{
    validate_algorithm, validate_fingerprint, validate_fingerprint_type,
    AlgorithmValidator, FingerprintTypeValidator, FingerprintValidator,
    Options, Validated,
};
