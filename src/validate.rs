//! Validators for the three SSHFP record fields.
//!
//! Each field has its own validator: [`AlgorithmValidator`] for the public
//! key algorithm number, [`FingerprintTypeValidator`] for the fingerprint
//! type number, and [`FingerprintValidator`] for the fingerprint hex string
//! itself. Every validator exists in two equivalent forms: as a free
//! function – [`validate_algorithm`], [`validate_fingerprint_type`],
//! [`validate_fingerprint`] – and as a method on a stateless validator
//! value for call sites that prefer working with an instance. Both forms
//! share one implementation.
//!
//! Validation never fails with an error. A candidate value is either
//! accepted, in which case the validator returns it wrapped in
//! [`Validated`] with its text untouched, or it is not, in which case the
//! validator returns `None`. Rejection is an expected outcome, not an
//! exceptional one, and the individual reason – missing value, stray
//! character, unassigned number, wrong digest length – is not reported.
//!
//! The [`Options`] structure selects between the default strict policy,
//! which only accepts numbers from the currently assigned IANA sets, and a
//! relaxed policy accepting any well-formed decimal number. The relaxed
//! policy does not extend to the fingerprint check, though: the required
//! digest length is taken from the length registry in [iana], which only
//! carries entries for the registered fingerprint types, so a fingerprint
//! for any other type is rejected under either policy. The registry is
//! consulted with the fingerprint type exactly as presented, not with a
//! parsed or normalized rendition of it. This is long-standing behavior
//! that callers rely on and it is kept as is; the tests pin it down.
//!
//! [iana]: crate::iana

use crate::iana;
use core::ops::RangeInclusive;
use core::{fmt, ops};

//------------ Options -------------------------------------------------------

/// Policy options for SSHFP field validation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Options {
    /// Restrict accepted values to the currently assigned IANA sets.
    ///
    /// If this is `false`, any well-formed decimal number is accepted for
    /// the algorithm and fingerprint type fields. This is the right choice
    /// when handling values assigned after this crate's registry data was
    /// last updated.
    #[cfg_attr(feature = "serde", serde(default = "serde_strict_default"))]
    pub strict: bool,
}

impl Options {
    /// Creates options for strict validation. This is the default.
    #[must_use]
    pub fn new() -> Self {
        Options { strict: true }
    }

    /// Creates options for relaxed validation.
    #[must_use]
    pub fn relaxed() -> Self {
        Options { strict: false }
    }
}

//--- Default

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// The `strict` option of a configuration that doesn't mention it.
#[cfg(feature = "serde")]
fn serde_strict_default() -> bool {
    true
}

//------------ Validated -----------------------------------------------------

/// A field value that has passed validation.
///
/// Values of this type are only ever produced by the validators in this
/// module, so holding one is proof that the text it carries was accepted.
/// The text is the candidate input exactly as given: letter case, leading
/// zeros, and any separator characters a fingerprint may contain are all
/// preserved.
///
/// The type derefs to [`str`] and a `&str` with the lifetime of the
/// original input can be recovered via [`as_str`][Self::as_str].
/// Re-validating that text yields the same successful result.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Validated<'a>(&'a str);

impl<'a> Validated<'a> {
    /// Returns the validated text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

//--- Deref and AsRef

impl<'a> ops::Deref for Validated<'a> {
    type Target = str;

    fn deref(&self) -> &str {
        self.0
    }
}

impl<'a> AsRef<str> for Validated<'a> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

//--- Display

impl<'a> fmt::Display for Validated<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

//--- Serialize

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'a> serde::Serialize for Validated<'a> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

//------------ AlgorithmValidator --------------------------------------------

/// A validator for the SSHFP public key algorithm field.
///
/// The type is stateless. It exists for call sites that want to invoke
/// validation on an instance; [`validate_algorithm`] is the equivalent
/// free function.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlgorithmValidator;

impl AlgorithmValidator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        AlgorithmValidator
    }

    /// Validates an SSHFP algorithm number.
    ///
    /// See [`validate_algorithm`] for the rules applied.
    pub fn validate<'a>(
        &self,
        value: Option<&'a str>,
        options: Options,
    ) -> Option<Validated<'a>> {
        validate_algorithm(value, options)
    }
}

/// Validates an SSHFP algorithm number.
///
/// The value is accepted if it consists of decimal digits only and, under
/// the strict policy, denotes one of the
/// [currently assigned algorithm numbers][iana::ASSIGNED_ALGORITHMS].
/// Anything else – an absent value, an empty string, a sign, whitespace, a
/// fraction – is rejected. Leading zeros are fine and are preserved in the
/// returned value.
pub fn validate_algorithm<'a>(
    value: Option<&'a str>,
    options: Options,
) -> Option<Validated<'a>> {
    check_assigned_number(value, iana::ASSIGNED_ALGORITHMS, options)
}

//------------ FingerprintTypeValidator --------------------------------------

/// A validator for the SSHFP fingerprint type field.
///
/// The type is stateless. It exists for call sites that want to invoke
/// validation on an instance; [`validate_fingerprint_type`] is the
/// equivalent free function.
#[derive(Clone, Copy, Debug, Default)]
pub struct FingerprintTypeValidator;

impl FingerprintTypeValidator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        FingerprintTypeValidator
    }

    /// Validates an SSHFP fingerprint type.
    ///
    /// See [`validate_fingerprint_type`] for the rules applied.
    pub fn validate<'a>(
        &self,
        value: Option<&'a str>,
        options: Options,
    ) -> Option<Validated<'a>> {
        validate_fingerprint_type(value, options)
    }
}

/// Validates an SSHFP fingerprint type.
///
/// The same rules as for [`validate_algorithm`] apply, except that the
/// strict policy checks against the
/// [currently assigned fingerprint types][iana::ASSIGNED_FINGERPRINT_TYPES].
pub fn validate_fingerprint_type<'a>(
    value: Option<&'a str>,
    options: Options,
) -> Option<Validated<'a>> {
    check_assigned_number(value, iana::ASSIGNED_FINGERPRINT_TYPES, options)
}

//------------ FingerprintValidator ------------------------------------------

/// A validator for the SSHFP fingerprint field.
///
/// The type is stateless. It exists for call sites that want to invoke
/// validation on an instance; [`validate_fingerprint`] is the equivalent
/// free function.
#[derive(Clone, Copy, Debug, Default)]
pub struct FingerprintValidator;

impl FingerprintValidator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        FingerprintValidator
    }

    /// Validates an SSHFP fingerprint for the fingerprint type `fptype`.
    ///
    /// See [`validate_fingerprint`] for the rules applied.
    pub fn validate<'a>(
        &self,
        fptype: Option<&str>,
        value: Option<&'a str>,
        options: Options,
    ) -> Option<Validated<'a>> {
        validate_fingerprint(fptype, value, options)
    }
}

/// Validates an SSHFP fingerprint for the fingerprint type `fptype`.
///
/// First, `fptype` itself has to pass the rules of
/// [`validate_fingerprint_type`] under the same options. Then the number
/// of hex digits in `value` has to match the length registered for
/// `fptype` exactly: 40 for SHA-1, 64 for SHA-256. Characters that are not
/// hex digits – colons, spaces, and whatever else a fingerprint rendition
/// may be decorated with – are skipped when counting and do not cause
/// rejection. Upper and lower case hex digits are treated alike.
///
/// On success the returned value is the original `value`, decorations and
/// all.
///
/// Note that the length registry only has entries for the registered
/// fingerprint types, keyed by their literal decimal rendition. A `fptype`
/// outside that set never validates a fingerprint, even under the relaxed
/// policy which accepts the type number itself.
pub fn validate_fingerprint<'a>(
    fptype: Option<&str>,
    value: Option<&'a str>,
    options: Options,
) -> Option<Validated<'a>> {
    let value = value?;
    validate_fingerprint_type(fptype, options)?;

    // The length lookup deliberately uses the raw candidate type, not the
    // validated rendition of it.
    let required = iana::fingerprint_hex_len(fptype?)?;
    let present = value.bytes().filter(u8::is_ascii_hexdigit).count();
    if present != required {
        return None;
    }
    Some(Validated(value))
}

//------------ Helper Functions ----------------------------------------------

/// Checks a candidate number against a range of assigned values.
///
/// This is the shared implementation of the algorithm and fingerprint type
/// validators.
fn check_assigned_number<'a>(
    value: Option<&'a str>,
    assigned: RangeInclusive<u64>,
    options: Options,
) -> Option<Validated<'a>> {
    let value = value?;
    if value.is_empty() || !value.bytes().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    if options.strict {
        // Numbers too large for a u64 cannot be assigned either, so a
        // failed conversion simply means rejection.
        let number = value.parse::<u64>().ok()?;
        if !assigned.contains(&number) {
            return None;
        }
    }
    Some(Validated(value))
}

//============ Testing =======================================================
