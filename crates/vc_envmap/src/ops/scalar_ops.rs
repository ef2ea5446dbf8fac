use alloc::borrow::Cow;
use alloc::format;
use core::fmt;
use core::num::ParseIntError;

use crate::error::ScalarError;

// -----------------------------------------------------------------------------
// Text coercion

/// Parses an integer with base-0 rules.
///
/// An optional sign is followed by a base prefix: `0x`/`0X` (16), `0o`/`0O`
/// (8), `0b`/`0B` (2), or a bare leading `0` (legacy octal). Anything else is
/// decimal. `_` may separate digits (or follow a base prefix) and is dropped.
///
/// # Examples
///
/// ```
/// use vc_envmap::ops::parse_int;
///
/// assert_eq!(parse_int::<i32>("0x1F").unwrap(), 31);
/// assert_eq!(parse_int::<i32>("-0b101").unwrap(), -5);
/// assert_eq!(parse_int::<u16>("0755").unwrap(), 0o755);
/// assert_eq!(parse_int::<u64>("1_000_000").unwrap(), 1_000_000);
/// assert!(parse_int::<u8>("256").is_err());
/// assert!(parse_int::<u8>("-1").is_err());
/// ```
pub fn parse_int<T: FromRadix>(text: &str) -> Result<T, ParseIntError> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => ("", &text[1..]),
        Some(b'-') => ("-", &text[1..]),
        _ => ("", text),
    };

    let (radix, digits, prefixed) = if let Some(digits) = strip_base(rest, 'x') {
        (16, digits, true)
    } else if let Some(digits) = strip_base(rest, 'o') {
        (8, digits, true)
    } else if let Some(digits) = strip_base(rest, 'b') {
        (2, digits, true)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..], true)
    } else {
        (10, rest, false)
    };

    // The radix parser takes a sign of its own, only one is allowed up front.
    if digits.starts_with(['+', '-']) {
        return T::from_radix("_", radix);
    }

    // Misplaced separators are left in and rejected as invalid digits.
    let digits = if digits.contains('_') && separators_ok(digits, prefixed) {
        Cow::Owned(digits.replace('_', ""))
    } else {
        Cow::Borrowed(digits)
    };

    if sign.is_empty() {
        T::from_radix(&digits, radix)
    } else {
        T::from_radix(&format!("{sign}{digits}"), radix)
    }
}

#[inline]
fn strip_base(text: &str, marker: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

fn separators_ok(digits: &str, prefixed: bool) -> bool {
    let mut after_digit = prefixed;
    let mut after_separator = false;
    for c in digits.chars() {
        if c == '_' {
            if !after_digit {
                return false;
            }
            after_digit = false;
            after_separator = true;
        } else {
            after_digit = true;
            after_separator = false;
        }
    }
    !after_separator
}

/// Parses a boolean, accepting `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
pub fn parse_bool(text: &str) -> Result<bool, ScalarError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ScalarError::Bool),
    }
}

/// Integer types accepted by [`parse_int`].
pub trait FromRadix: Sized {
    fn from_radix(text: &str, radix: u32) -> Result<Self, ParseIntError>;
}

macro_rules! impl_from_radix {
    ($($ty:ty),* $(,)?) => {$(
        impl FromRadix for $ty {
            #[inline]
            fn from_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
                <$ty>::from_str_radix(text, radix)
            }
        }
    )*};
}

impl_from_radix!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// -----------------------------------------------------------------------------
// Width-tagged references

macro_rules! define_number_refs {
    (
        $(#[$ref_meta:meta])* $ref_name:ident,
        $(#[$mut_meta:meta])* $mut_name:ident,
        parse = $parse:path,
        { $($variant:ident => $ty:ty),* $(,)? }
    ) => {
        $(#[$ref_meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum $ref_name<'a> {
            $($variant(&'a $ty),)*
        }

        impl $ref_name<'_> {
            /// Returns the primitive type name, e.g. `"i32"`.
            pub const fn type_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($ty),)*
                }
            }
        }

        impl fmt::Display for $ref_name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(value) => fmt::Display::fmt(value, f),)*
                }
            }
        }

        $(#[$mut_meta])*
        #[derive(Debug, PartialEq)]
        pub enum $mut_name<'a> {
            $($variant(&'a mut $ty),)*
        }

        impl $mut_name<'_> {
            /// Returns the primitive type name, e.g. `"i32"`.
            pub const fn type_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($ty),)*
                }
            }

            /// Coerces `text` and stores the result; the target is untouched on error.
            pub fn assign_text(&mut self, text: &str) -> Result<(), ScalarError> {
                match self {
                    $(Self::$variant(value) => **value = $parse(text)?,)*
                }
                Ok(())
            }

            /// Stores the zero value.
            pub fn set_zero(&mut self) {
                match self {
                    $(Self::$variant(value) => **value = <$ty>::default(),)*
                }
            }
        }
    };
}

define_number_refs!(
    /// A shared reference to a signed integer of any width.
    IntRef,
    /// A mutable reference to a signed integer of any width.
    IntMut,
    parse = parse_int,
    {
        I8 => i8,
        I16 => i16,
        I32 => i32,
        I64 => i64,
        I128 => i128,
        Isize => isize,
    }
);

define_number_refs!(
    /// A shared reference to an unsigned integer of any width.
    UintRef,
    /// A mutable reference to an unsigned integer of any width.
    UintMut,
    parse = parse_int,
    {
        U8 => u8,
        U16 => u16,
        U32 => u32,
        U64 => u64,
        U128 => u128,
        Usize => usize,
    }
);

trait Float: core::str::FromStr<Err = core::num::ParseFloatError> {
    fn is_infinite(&self) -> bool;
}

impl Float for f32 {
    #[inline]
    fn is_infinite(&self) -> bool {
        f32::is_infinite(*self)
    }
}

impl Float for f64 {
    #[inline]
    fn is_infinite(&self) -> bool {
        f64::is_infinite(*self)
    }
}

/// Parses a float, rejecting finite literals that overflow the target width.
fn parse_float<T: Float>(text: &str) -> Result<T, ScalarError> {
    let value = text.parse::<T>()?;
    if value.is_infinite() {
        let magnitude = text.strip_prefix(['+', '-']).unwrap_or(text);
        if !magnitude.eq_ignore_ascii_case("inf") && !magnitude.eq_ignore_ascii_case("infinity") {
            return Err(ScalarError::FloatRange);
        }
    }
    Ok(value)
}

define_number_refs!(
    /// A shared reference to a float of either width.
    FloatRef,
    /// A mutable reference to a float of either width.
    FloatMut,
    parse = parse_float,
    {
        F32 => f32,
        F64 => f64,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::num::IntErrorKind;

    #[test]
    fn decimal_and_sign() {
        assert_eq!(parse_int::<i64>("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(parse_int::<i8>("-128").unwrap(), i8::MIN);
        assert_eq!(parse_int::<i32>("+42").unwrap(), 42);
        assert_eq!(parse_int::<u32>("0").unwrap(), 0);
        assert_eq!(parse_int::<i32>("-0").unwrap(), 0);
    }

    #[test]
    fn base_prefixes() {
        assert_eq!(parse_int::<u32>("0XfF").unwrap(), 255);
        assert_eq!(parse_int::<u32>("0o17").unwrap(), 15);
        assert_eq!(parse_int::<u32>("0O17").unwrap(), 15);
        assert_eq!(parse_int::<u32>("0B11").unwrap(), 3);
        assert_eq!(parse_int::<i32>("-017").unwrap(), -15);
        assert_eq!(parse_int::<i32>("0x_1F").unwrap(), 31);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_int::<i32>("").unwrap_err().kind(),
            &IntErrorKind::Empty
        );
        assert_eq!(
            parse_int::<i32>("0x").unwrap_err().kind(),
            &IntErrorKind::Empty
        );
        assert_eq!(
            parse_int::<i32>("09").unwrap_err().kind(),
            &IntErrorKind::InvalidDigit
        );
        assert_eq!(
            parse_int::<i8>("128").unwrap_err().kind(),
            &IntErrorKind::PosOverflow
        );
        assert_eq!(
            parse_int::<i16>("-40000").unwrap_err().kind(),
            &IntErrorKind::NegOverflow
        );
        assert!(parse_int::<i32>("_1").is_err());
        assert!(parse_int::<i32>("1_").is_err());
        assert!(parse_int::<i32>("1__0").is_err());
        assert!(parse_int::<i32>("1.5").is_err());

        for text in ["0x-5", "+-5", "-+5", "0-7", "0o+7"] {
            assert_eq!(
                parse_int::<i32>(text).unwrap_err().kind(),
                &IntErrorKind::InvalidDigit,
                "{text}"
            );
        }
        assert!(parse_int::<u8>("0b+1").is_err());
    }

    #[test]
    fn bool_literals() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(parse_bool(text).unwrap());
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!parse_bool(text).unwrap());
        }
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("tRUE").is_err());
    }

    #[test]
    fn width_tagged_assignment() {
        let mut small = 0_u8;
        let mut target = UintMut::U8(&mut small);
        assert_eq!(target.type_name(), "u8");
        assert!(target.assign_text("300").is_err());
        target.assign_text("0xff").unwrap();
        assert_eq!(small, 255);

        let mut value = 1.5_f32;
        let mut target = FloatMut::F32(&mut value);
        target.assign_text("3.1415926").unwrap();
        target.set_zero();
        assert_eq!(value, 0.0);

        let value = 2.5_f64;
        assert_eq!(FloatRef::F64(&value).to_string(), "2.5");
        assert_eq!(IntRef::I32(&-7).to_string(), "-7");
    }

    #[test]
    fn float_range() {
        assert!(matches!(parse_float::<f32>("1e40"), Err(ScalarError::FloatRange)));
        assert!(matches!(parse_float::<f32>("-1e40"), Err(ScalarError::FloatRange)));
        assert_eq!(parse_float::<f64>("1e40").unwrap(), 1e40);
        assert_eq!(parse_float::<f32>("inf").unwrap(), f32::INFINITY);
        assert_eq!(parse_float::<f64>("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(parse_float::<f64>("NaN").unwrap().is_nan());

        let mut value = 1.5_f32;
        let mut target = FloatMut::F32(&mut value);
        assert!(target.assign_text("3.5e38").is_err());
        assert_eq!(value, 1.5);
    }
}
