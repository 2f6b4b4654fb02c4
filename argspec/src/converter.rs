//! Converters turn a raw argument string into a typed `Value`.
//!
//! Every converter is a pure function of its input, except `file` and `directory`
//! which look up the filesystem.
use crate::error::ValidationError;
use crate::value::Value;
use std::path::Path;

/// Exposes a method to convert a raw `str` into a `Value`.
pub trait Converter {
    /// Converts the given string slice, or returns the reason it was rejected.
    fn convert(&self, raw: &str) -> Result<Value, ValidationError>;

    /// Name of this converter, the default is `value`.
    fn name(&self) -> &str {
        "value"
    }
}

// This allow to use a closure as a `Converter`
impl<F> Converter for F
where
    F: Fn(&str) -> Result<Value, ValidationError>,
{
    fn convert(&self, raw: &str) -> Result<Value, ValidationError> {
        (self)(raw)
    }
}

/// A `Converter` that keeps the raw string.
#[derive(Debug, Default, Copy, Clone)]
pub struct StringConverter;
impl Converter for StringConverter {
    fn convert(&self, raw: &str) -> Result<Value, ValidationError> {
        Ok(Value::Str(raw.to_owned()))
    }

    fn name(&self) -> &str {
        "string"
    }
}

/// A `Converter` for signed 64-bit integers.
#[derive(Debug, Default, Copy, Clone)]
pub struct IntegerConverter;
impl Converter for IntegerConverter {
    fn convert(&self, raw: &str) -> Result<Value, ValidationError> {
        raw.trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ValidationError::new(format!("expected an integer: '{}'", raw)))
    }

    fn name(&self) -> &str {
        "integer"
    }
}

/// A `Converter` from sizes such as `500KB` or `1.5MB` into a number of bytes.
#[derive(Debug, Default, Copy, Clone)]
pub struct SizeConverter;
impl Converter for SizeConverter {
    fn convert(&self, raw: &str) -> Result<Value, ValidationError> {
        parse_size(raw).map(Value::Int)
    }

    fn name(&self) -> &str {
        "size"
    }
}

/// A `Converter` that accepts paths to existing regular files.
#[derive(Debug, Default, Copy, Clone)]
pub struct FileConverter;
impl Converter for FileConverter {
    fn convert(&self, raw: &str) -> Result<Value, ValidationError> {
        let path = Path::new(raw);

        if !path.exists() {
            return Err(ValidationError::new(format!(
                "Expected file, doesn't exist: '{}'",
                raw
            )));
        }

        if !path.is_file() {
            return Err(ValidationError::new(format!(
                "Expected file, received non-file: '{}'",
                raw
            )));
        }

        Ok(Value::Path(path.to_path_buf()))
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// A `Converter` that accepts paths to existing directories.
#[derive(Debug, Default, Copy, Clone)]
pub struct DirectoryConverter;
impl Converter for DirectoryConverter {
    fn convert(&self, raw: &str) -> Result<Value, ValidationError> {
        let path = Path::new(raw);

        if !path.exists() {
            return Err(ValidationError::new(format!(
                "Expected directory, doesn't exist: '{}'",
                raw
            )));
        }

        if !path.is_dir() {
            return Err(ValidationError::new(format!(
                "Expected directory, received non-directory: '{}'",
                raw
            )));
        }

        Ok(Value::Path(path.to_path_buf()))
    }

    fn name(&self) -> &str {
        "directory"
    }
}

/// Constructs a `Converter` that keeps the raw string.
#[inline]
pub fn string() -> StringConverter {
    StringConverter
}

/// Constructs a `Converter` for integers.
#[inline]
pub fn integer() -> IntegerConverter {
    IntegerConverter
}

/// Constructs a `Converter` for byte sizes.
#[inline]
pub fn size() -> SizeConverter {
    SizeConverter
}

/// Constructs a `Converter` for existing regular files.
#[inline]
pub fn file() -> FileConverter {
    FileConverter
}

/// Constructs a `Converter` for existing directories.
#[inline]
pub fn directory() -> DirectoryConverter {
    DirectoryConverter
}

const SIZE_UNITS: [(&str, u128); 4] = [
    ("B", 1),
    ("KB", 1024),
    ("MB", 1024 * 1024),
    ("GB", 1024 * 1024 * 1024),
];

// 10^18 still fits in a `u128` multiplied by the largest unit.
const MAX_FRACTION_DIGITS: usize = 18;

/// Converts strings such as `5MB` or `1.5GB` into a number of bytes.
///
/// The accepted grammar is `digits [ "." digits ] unit` where `unit` is one of
/// `B`, `KB`, `MB` or `GB` in any letter case, with optional whitespace around
/// the parts. Fractional bytes are truncated.
///
/// # Example
/// ```
/// use argspec::converter::parse_size;
///
/// assert_eq!(parse_size("500KB").unwrap(), 512000);
/// assert_eq!(parse_size("1.5mb").unwrap(), 1572864);
/// assert!(parse_size("5g").is_err());
/// ```
pub fn parse_size(raw: &str) -> Result<i64, ValidationError> {
    let value = raw.trim();
    let split = value
        .find(|c: char| c.is_ascii_alphabetic())
        .ok_or_else(|| ValidationError::new(format!("missing size unit in '{}'", raw)))?;

    let (magnitude, unit) = value.split_at(split);
    let magnitude = magnitude.trim_end();

    let multiplier = SIZE_UNITS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(unit))
        .map(|(_, multiplier)| *multiplier)
        .ok_or_else(|| {
            ValidationError::new(format!(
                "unknown size unit '{}', expected one of B, KB, MB, GB",
                unit
            ))
        })?;

    let invalid_magnitude = || ValidationError::new(format!("invalid size magnitude in '{}'", raw));

    let (whole, fraction) = match magnitude.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (magnitude, ""),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || (magnitude.contains('.') && !is_digits(fraction)) {
        return Err(invalid_magnitude());
    }

    if fraction.len() > MAX_FRACTION_DIGITS {
        return Err(ValidationError::new(format!(
            "too many decimal places in '{}'",
            raw
        )));
    }

    let too_large = || ValidationError::new(format!("size is too large: '{}'", raw));
    let whole = whole.parse::<u128>().map_err(|_| too_large())?;

    let mut bytes = whole.checked_mul(multiplier).ok_or_else(too_large)?;
    if !fraction.is_empty() {
        let scale = 10_u128.pow(fraction.len() as u32);
        let fraction = fraction.parse::<u128>().map_err(|_| invalid_magnitude())?;
        bytes = bytes
            .checked_add(fraction * multiplier / scale)
            .ok_or_else(too_large)?;
    }

    i64::try_from(bytes).map_err(|_| too_large())
}
