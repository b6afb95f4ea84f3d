use crate::{
    error::DecodeError,
    serialize::{self, DecodeOptions},
    traits::{Presence, Scalar},
};
use optval_primitives::ScalarKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};

/// Rendering of an optional that holds no value.
pub const UNDEFINED_TEXT: &str = "<undefined>";

///
/// Optional
///
/// Zero or one scalar value with explicit presence.
///
/// - Undefined encodes as the JSON literal `null`; defined encodes as the
///   scalar's own literal, so `Optional::make(0u64)` encodes as `0`.
/// - An undefined optional holds no value at all; `get` supplies the fallback.
/// - Mutation is whole-value only (`set`, `clear`, `take`, `replace`, decode).
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// The undefined state; same as `Default`.
    #[must_use]
    pub const fn undefined() -> Self {
        Self(None)
    }

    /// Construct a defined optional holding `value`.
    #[must_use]
    pub const fn make(value: T) -> Self {
        Self(Some(value))
    }

    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    /// Negation of `is_defined`; fits `#[serde(skip_serializing_if = "...")]`.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the held value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    #[must_use]
    pub const fn as_option(&self) -> &Option<T> {
        &self.0
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Move the value out, leaving the optional undefined.
    pub const fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    /// Store `value` and return whatever was held before.
    pub const fn replace(&mut self, value: T) -> Option<T> {
        self.0.replace(value)
    }
}

impl<T: Clone> Optional<T> {
    /// Return the held value, or `default` when undefined.
    #[must_use]
    pub fn get(&self, default: T) -> T {
        match &self.0 {
            Some(value) => value.clone(),
            None => default,
        }
    }

    #[must_use]
    pub fn get_or_else(&self, default: impl FnOnce() -> T) -> T {
        match &self.0 {
            Some(value) => value.clone(),
            None => default(),
        }
    }
}

impl<T: Clone + Default> Optional<T> {
    /// Return the held value, or the scalar's zero value when undefined.
    #[must_use]
    pub fn get_or_default(&self) -> T {
        self.get_or_else(T::default)
    }
}

impl<T: Scalar> Optional<T> {
    #[must_use]
    pub const fn kind() -> ScalarKind {
        T::KIND
    }

    /// Encode as a single JSON literal: `null` or the scalar literal.
    #[must_use]
    pub fn to_json(&self) -> Vec<u8> {
        self.to_json_string().into_bytes()
    }

    #[must_use]
    pub fn to_json_string(&self) -> String {
        match &self.0 {
            None => "null".to_string(),
            // Every registered scalar has a JSON literal (floats are finite by construction).
            Some(value) => {
                serialize::to_json_string(value).expect("scalar literal encoding is total")
            }
        }
    }

    /// Decode one JSON literal; `null` yields the undefined optional.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_json_with(bytes, &DecodeOptions::default())
    }

    pub fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        Self::from_json(text.as_bytes())
    }

    /// Decode with caller-supplied limits.
    pub fn from_json_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self, DecodeError> {
        serialize::from_json_with(bytes, options)
    }

    /// Decode in place. On failure `self` is left exactly as it was.
    pub fn decode_json(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        *self = Self::from_json(bytes)?;

        Ok(())
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::undefined()
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => Display::fmt(value, f),
            None => f.write_str(UNDEFINED_TEXT),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::make(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.0
    }
}

impl<T: Scalar> Presence for Optional<T> {
    fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    fn kind(&self) -> ScalarKind {
        T::KIND
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::DecodeErrorKind,
        types::{
            Blob, Float32, Float64, OptBlob, OptBool, OptChar, OptFloat32, OptFloat64, OptInt8,
            OptInt64, OptInt128, OptText, OptUint8, OptUint64, OptUint128,
        },
    };
    use proptest::prelude::*;
    use std::fmt::Debug;

    // ---- helpers -----------------------------------------------------------

    fn round_trip<T: Scalar>(value: T) -> Result<(), TestCaseError> {
        let original = Optional::make(value);
        let decoded = Optional::<T>::from_json(&original.to_json())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(decoded, original);
        Ok(())
    }

    fn assert_decode_fails<T: Scalar + Debug>(input: &str, kind: DecodeErrorKind) {
        let err = Optional::<T>::from_json_str(input).expect_err("input should not decode");

        assert_eq!(err.kind(), kind, "{input:?} -> {err}");
        assert_eq!(err.line(), Some(1));
    }

    fn f64_strategy() -> impl Strategy<Value = Float64> {
        any::<f64>().prop_filter_map("finite f64", Float64::try_new)
    }

    fn f32_strategy() -> impl Strategy<Value = Float32> {
        any::<f32>().prop_filter_map("finite f32", Float32::try_new)
    }

    // ---- construction & accessors ----------------------------------------

    #[test]
    fn default_is_undefined() {
        let opt = OptUint64::default();

        assert!(!opt.is_defined());
        assert!(opt.is_undefined());
        assert_eq!(opt, OptUint64::undefined());
        assert_eq!(opt.value(), None);
    }

    #[test]
    fn make_is_defined() {
        let opt = OptUint64::make(0);

        assert!(opt.is_defined());
        assert_eq!(opt.value(), Some(&0));
        assert_ne!(opt, OptUint64::undefined());
    }

    #[test]
    fn get_substitutes_default_only_when_undefined() {
        assert_eq!(OptUint64::make(7).get(42), 7);
        assert_eq!(OptUint64::undefined().get(42), 42);
        assert_eq!(OptText::make("a".into()).get("b".into()), "a");
        assert_eq!(OptText::undefined().get("b".into()), "b");
        assert!(!OptBool::undefined().get_or_default());
        assert_eq!(OptInt8::undefined().get_or_else(|| -1), -1);
    }

    #[test]
    fn mutation_replaces_whole_value() {
        let mut opt = OptInt64::undefined();

        opt.set(5);
        assert_eq!(opt.replace(6), Some(5));
        assert_eq!(opt.take(), Some(6));
        assert!(opt.is_undefined());

        opt.set(1);
        opt.clear();
        assert_eq!(opt, OptInt64::default());
    }

    #[test]
    fn converts_to_and_from_option() {
        assert_eq!(OptUint8::from(Some(3)), OptUint8::make(3));
        assert_eq!(OptUint8::from(None), OptUint8::undefined());
        let plain: Option<u8> = OptUint8::make(4).into();
        assert_eq!(plain, Some(4));
        assert_eq!(OptUint8::from(9).into_option(), Some(9));
        assert_eq!(OptUint8::make(1).as_option(), &Some(1));
    }

    #[test]
    fn copy_for_copy_scalars() {
        let a = OptBool::make(true);
        let b = a;

        assert_eq!(a, b);
    }

    #[test]
    fn kind_follows_scalar() {
        assert_eq!(OptUint64::kind(), ScalarKind::Uint64);
        assert_eq!(OptText::kind(), ScalarKind::Text);
        assert_eq!(Presence::kind(&OptBlob::undefined()), ScalarKind::Blob);
    }

    // ---- rendering ---------------------------------------------------------

    #[test]
    fn renders_undefined_token() {
        assert_eq!(OptUint64::undefined().to_string(), "<undefined>");
        assert_eq!(OptText::undefined().to_text(), UNDEFINED_TEXT);
    }

    #[test]
    fn renders_scalar_display_form() {
        assert_eq!(OptBool::make(true).to_string(), "true");
        assert_eq!(OptUint64::make(42).to_string(), "42");
        assert_eq!(OptInt64::make(-3).to_string(), "-3");
        assert_eq!(OptText::make("hi".into()).to_string(), "hi");
        assert_eq!(OptChar::make('x').to_string(), "x");
        assert_eq!(OptFloat64::make(Float64::from(1)).to_string(), "1");
        assert_eq!(OptBlob::make(Blob::from(b"ab")).to_string(), "[blob (2 bytes)]");
    }

    #[test]
    fn rendering_honours_format_flags() {
        assert_eq!(format!("{:>4}", OptUint8::make(7)), "   7");
    }

    // ---- encoding ------------------------------------------------------------

    #[test]
    fn undefined_encodes_as_null() {
        assert_eq!(OptUint64::undefined().to_json(), b"null");
        assert_eq!(OptText::undefined().to_json_string(), "null");
        assert_eq!(OptBlob::undefined().to_json_string(), "null");
    }

    #[test]
    fn defined_encodes_scalar_literal() {
        assert_eq!(OptBool::make(true).to_json_string(), "true");
        assert_eq!(OptBool::make(false).to_json_string(), "false");
        assert_eq!(OptUint64::make(42).to_json_string(), "42");
        assert_eq!(OptUint64::make(u64::MAX).to_json_string(), "18446744073709551615");
        assert_eq!(OptInt64::make(-42).to_json_string(), "-42");
        assert_eq!(OptText::make("te\"xt".into()).to_json_string(), r#""te\"xt""#);
        assert_eq!(OptChar::make('q').to_json_string(), "\"q\"");
        assert_eq!(OptBlob::make(Blob::from(b"foo")).to_json_string(), "\"Zm9v\"");
        assert_eq!(
            OptFloat64::make(Float64::try_new(0.5).expect("finite")).to_json_string(),
            "0.5"
        );
    }

    #[test]
    fn zero_value_is_not_null() {
        assert_eq!(OptUint64::make(0).to_json_string(), "0");
        assert_eq!(OptText::make(String::new()).to_json_string(), "\"\"");
        assert_eq!(OptBlob::make(Blob::default()).to_json_string(), "\"\"");
        assert_eq!(OptBool::make(false).to_json_string(), "false");
    }

    #[test]
    fn encoded_literal_is_standard_json() {
        let encoded = OptUint64::make(42).to_json();
        let parsed: serde_json::Value = serde_json::from_slice(&encoded).expect("valid JSON");
        assert_eq!(parsed, serde_json::json!(42));

        let parsed: serde_json::Value =
            serde_json::from_slice(&OptText::undefined().to_json()).expect("valid JSON");
        assert!(parsed.is_null());
    }

    // ---- decoding ------------------------------------------------------------

    #[test]
    fn null_decodes_to_undefined() {
        assert_eq!(OptUint64::from_json(b"null"), Ok(OptUint64::undefined()));
        assert_eq!(OptText::from_json(b" null\n"), Ok(OptText::undefined()));
    }

    #[test]
    fn zero_decodes_to_defined() {
        let zero = OptUint64::from_json(b"0").expect("decode 0");

        assert_eq!(zero, OptUint64::make(0));
        assert_ne!(zero, OptUint64::from_json(b"null").expect("decode null"));
    }

    #[test]
    fn end_to_end_bool() {
        assert_eq!(OptBool::make(false).to_json(), b"false");
        assert_eq!(OptBool::from_json(b"false"), Ok(OptBool::make(false)));
        assert_eq!(OptBool::from_json(b"null"), Ok(OptBool::undefined()));
        assert_eq!(OptBool::undefined().to_json(), b"null");
    }

    #[test]
    fn wrong_literal_kind_fails() {
        assert_decode_fails::<u64>("\"abc\"", DecodeErrorKind::Type);
        assert_decode_fails::<String>("true", DecodeErrorKind::Type);
        assert_decode_fails::<bool>("1", DecodeErrorKind::Type);
        assert_decode_fails::<u64>("-1", DecodeErrorKind::Type);
        assert_decode_fails::<u64>("1.5", DecodeErrorKind::Type);
        assert_decode_fails::<u8>("300", DecodeErrorKind::Type);
        assert_decode_fails::<char>("\"ab\"", DecodeErrorKind::Type);
        assert_decode_fails::<Blob>("\"***=\"", DecodeErrorKind::Type);
    }

    #[test]
    fn malformed_tokens_fail() {
        assert_decode_fails::<u64>("abc", DecodeErrorKind::Syntax);
        assert_decode_fails::<u64>("42x", DecodeErrorKind::Syntax);
        assert_decode_fails::<u64>("null null", DecodeErrorKind::Syntax);
        assert_decode_fails::<String>("\"open", DecodeErrorKind::Eof);
        assert_decode_fails::<bool>("", DecodeErrorKind::Eof);
    }

    #[test]
    fn failed_decode_leaves_target_untouched() {
        let mut opt = OptUint64::make(9);

        assert!(opt.decode_json(b"\"nine\"").is_err());
        assert_eq!(opt, OptUint64::make(9));
    }

    #[test]
    fn decode_null_discards_previous_value() {
        let mut opt = OptText::make("kept?".into());

        opt.decode_json(b"null").expect("decode null");
        assert_eq!(opt, OptText::undefined());

        opt.decode_json(b"\"new\"").expect("decode text");
        assert_eq!(opt, OptText::make("new".into()));
    }

    #[test]
    fn size_limit_is_checked_before_parsing() {
        let options = DecodeOptions::new().with_max_bytes(4);

        assert_eq!(
            OptUint64::from_json_with(b"null", &options),
            Ok(OptUint64::undefined())
        );
        assert_eq!(
            OptUint64::from_json_with(b"123456", &options),
            Err(DecodeError::SizeLimitExceeded {
                len: 6,
                max_bytes: 4
            })
        );
    }

    #[test]
    fn wide_integers_round_trip() {
        assert_eq!(
            OptUint128::from_json(OptUint128::make(u128::MAX).to_json().as_slice()),
            Ok(OptUint128::make(u128::MAX))
        );
        assert_eq!(
            OptInt128::from_json(OptInt128::make(i128::MIN).to_json().as_slice()),
            Ok(OptInt128::make(i128::MIN))
        );
    }

    #[test]
    fn float32_samples_round_trip() {
        for raw in [0.0f32, 1.0, -2.5, 0.1, 3.402_823_5e38, 1.0e-45] {
            let opt = OptFloat32::make(Float32::try_new(raw).expect("finite"));

            assert_eq!(OptFloat32::from_json(&opt.to_json()), Ok(opt), "{raw}");
        }
    }

    #[test]
    fn out_of_range_kind_does_not_depend_on_notation() {
        assert_decode_fails::<u8>("300", DecodeErrorKind::Type);
        assert_decode_fails::<u8>("1e400", DecodeErrorKind::Type);
        assert_decode_fails::<Float32>("1e39", DecodeErrorKind::Type);
        assert_decode_fails::<Float64>("1e400", DecodeErrorKind::Type);
    }

    #[test]
    fn codec_calls_are_repeatable() {
        let opt = OptBool::make(true);
        let first = opt.to_json();

        assert_eq!(opt.to_json(), first);
        assert_eq!(opt.to_json_string().as_bytes(), first.as_slice());
        assert_eq!(OptBool::from_json(b"x"), OptBool::from_json(b"x"));
        assert_eq!(OptBool::from_json(&first), Ok(opt));
    }

    #[test]
    fn float_decode_accepts_integer_literals() {
        assert_eq!(
            OptFloat64::from_json(b"3"),
            Ok(OptFloat64::make(Float64::from(3)))
        );
    }

    // ---- serde integration --------------------------------------------------

    #[test]
    fn serde_json_entry_points_agree() {
        let opt = OptInt64::make(-8);

        assert_eq!(serde_json::to_vec(&opt).expect("encode"), opt.to_json());
        assert_eq!(
            serde_json::from_slice::<OptInt64>(b"-8").expect("decode"),
            OptInt64::from_json(b"-8").expect("decode")
        );
    }

    // ---- properties ----------------------------------------------------------

    proptest! {
        #[test]
        fn unsigned_round_trip(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>(), e in any::<u128>(), f in any::<usize>()) {
            round_trip(a)?;
            round_trip(b)?;
            round_trip(c)?;
            round_trip(d)?;
            round_trip(e)?;
            round_trip(f)?;
        }

        #[test]
        fn signed_round_trip(a in any::<i8>(), b in any::<i16>(), c in any::<i32>(), d in any::<i64>(), e in any::<i128>(), f in any::<isize>()) {
            round_trip(a)?;
            round_trip(b)?;
            round_trip(c)?;
            round_trip(d)?;
            round_trip(e)?;
            round_trip(f)?;
        }

        #[test]
        fn textual_round_trip(text in any::<String>(), ch in any::<char>(), bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            round_trip(text)?;
            round_trip(ch)?;
            round_trip(Blob::from(bytes))?;
        }

        #[test]
        fn bool_and_float_round_trip(flag in any::<bool>(), single in f32_strategy(), double in f64_strategy()) {
            round_trip(flag)?;
            round_trip(single)?;
            round_trip(double)?;
        }

        #[test]
        fn get_returns_value_when_defined(value in any::<u64>(), default in any::<u64>()) {
            prop_assert_eq!(OptUint64::make(value).get(default), value);
            prop_assert_eq!(OptUint64::undefined().get(default), default);
            prop_assert!(OptUint64::make(value).is_defined());
        }

        #[test]
        fn rendering_matches_scalar_display(value in any::<i64>()) {
            prop_assert_eq!(OptInt64::make(value).to_string(), value.to_string());
        }
    }
}
