/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Text field kind and its presets.
//!
//! The length and digits-only constraints live in pure helpers
//! ([`normalize`], [`check_constraints`]) shared by every text preset:
//! - [`TextKind::new`]: free text, optionally fixed-length or digits-only
//! - [`TextKind::postal_code`]: CEP, 8 digits, `-` and `.` stripped
//! - [`TextKind::tax_id`]: CNPJ, 14 digits, `-`, `.` and `/` stripped

use crate::error::{FieldError, Result};
use crate::kind::FieldKind;
use crate::value::{Value, ValueKind};
use smallvec::SmallVec;

/// Number of digits in a CEP.
pub const POSTAL_CODE_LEN: usize = 8;

/// Number of digits in a CNPJ.
pub const TAX_ID_LEN: usize = 14;

/// Separators stripped from a CEP.
pub const POSTAL_CODE_SEPARATORS: &[char] = &['-', '.'];

/// Separators stripped from a CNPJ.
pub const TAX_ID_SEPARATORS: &[char] = &['-', '.', '/'];

/// Removes every separator character and then trailing whitespace.
///
/// Applying it twice gives the same result as applying it once.
#[must_use]
pub fn normalize(value: &str, separators: &[char]) -> String {
    let mut out: String = value.chars().filter(|c| !separators.contains(c)).collect();
    out.truncate(out.trim_end().len());
    out
}

/// Returns true if `value` is non-empty and made only of ASCII digits.
#[inline]
#[must_use]
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Checks the fixed-length and digits-only constraints of a text value.
///
/// Length is counted in characters. A `length` of zero disables the length
/// check.
///
/// # Errors
/// Returns `FieldError::WrongLength` or `FieldError::NotNumeric`.
pub fn check_constraints(name: &str, value: &str, length: usize, numeric_only: bool) -> Result<()> {
    if length != 0 {
        let actual = value.chars().count();
        if actual != length {
            return Err(FieldError::WrongLength {
                name: name.to_string(),
                expected: length,
                actual,
            });
        }
    }

    if numeric_only && !is_numeric(value) {
        return Err(FieldError::NotNumeric {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Text field configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextKind {
    length: usize,
    numeric_only: bool,
    separators: SmallVec<[char; 4]>,
    strict: bool,
}

impl TextKind {
    /// Creates an unconstrained text kind.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// CEP preset: 8 digits, `-` and `.` stripped, text input only.
    #[must_use]
    pub fn postal_code() -> Self {
        Self::new()
            .with_length(POSTAL_CODE_LEN)
            .numeric_only()
            .with_separators(POSTAL_CODE_SEPARATORS)
            .strict()
    }

    /// CNPJ preset: 14 digits, `-`, `.` and `/` stripped, text input only.
    #[must_use]
    pub fn tax_id() -> Self {
        Self::new()
            .with_length(TAX_ID_LEN)
            .numeric_only()
            .with_separators(TAX_ID_SEPARATORS)
            .strict()
    }

    /// Requires values of exactly `length` characters. Zero disables the check.
    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Requires values made only of digits.
    #[must_use]
    pub const fn numeric_only(mut self) -> Self {
        self.numeric_only = true;
        self
    }

    /// Strips these characters from input before validation.
    #[must_use]
    pub fn with_separators(mut self, separators: &[char]) -> Self {
        self.separators = SmallVec::from_slice(separators);
        self
    }

    /// Accepts only `Value::Text`, rejecting single characters.
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Returns the configured length (zero when unconstrained).
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns true if only digits are accepted.
    #[inline]
    #[must_use]
    pub const fn is_numeric_only(&self) -> bool {
        self.numeric_only
    }

    /// Returns the separators stripped during formatting.
    #[inline]
    #[must_use]
    pub fn separators(&self) -> &[char] {
        &self.separators
    }

    /// Returns true if single characters are rejected.
    #[inline]
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }
}

impl FieldKind for TextKind {
    type Formatted = Option<String>;
    type Output = String;

    fn format(&self, name: &str, value: Value) -> Result<Option<String>> {
        match value {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(normalize(&s, &self.separators))),
            Value::Char(c) if !self.strict => {
                let mut buf = [0u8; 4];
                Ok(Some(normalize(c.encode_utf8(&mut buf), &self.separators)))
            }
            other => Err(FieldError::wrong_type(name, other.kind(), ValueKind::Text)),
        }
    }

    fn validate(&self, name: &str, value: Option<String>) -> Result<Option<String>> {
        if let Some(text) = &value {
            check_constraints(name, text, self.length, self.numeric_only)?;
        }
        Ok(value)
    }

    fn render(value: &String, out: &mut String) {
        out.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_postal_code() {
        assert_eq!(normalize("01310-100", POSTAL_CODE_SEPARATORS), "01310100");
        assert_eq!(normalize("01.310-100  ", POSTAL_CODE_SEPARATORS), "01310100");
    }

    #[test]
    fn test_normalize_tax_id() {
        assert_eq!(
            normalize("12.345.678/0001-95", TAX_ID_SEPARATORS),
            "12345678000195"
        );
    }

    #[test]
    fn test_normalize_keeps_leading_whitespace() {
        assert_eq!(normalize("  Maria \t\n", &[]), "  Maria");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "Maria ",
            "01310-100",
            "12.345.678/0001-95 ",
            " - . / ",
            "",
            "Av. Paulista, 1578 ",
            "São Paulo\u{3000}",
        ];
        for input in inputs {
            for separators in [&[][..], POSTAL_CODE_SEPARATORS, TAX_ID_SEPARATORS] {
                let once = normalize(input, separators);
                assert_eq!(normalize(&once, separators), once, "input {input:?}");
            }
        }
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123456789"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("١٢٣"));
    }

    #[test]
    fn test_check_constraints_length_counts_chars() {
        assert!(check_constraints("cidade", "São", 3, false).is_ok());
        assert_eq!(
            check_constraints("codigo", "abc", 5, false),
            Err(FieldError::WrongLength {
                name: "codigo".to_string(),
                expected: 5,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_check_constraints_length_before_numeric() {
        let err = check_constraints("cep", "abc", 8, true).unwrap_err();
        assert!(matches!(err, FieldError::WrongLength { .. }));

        let err = check_constraints("cep", "0131010a", 8, true).unwrap_err();
        assert_eq!(
            err,
            FieldError::NotNumeric {
                name: "cep".to_string()
            }
        );
    }

    #[test]
    fn test_presets() {
        let cep = TextKind::postal_code();
        assert_eq!(cep.length(), 8);
        assert!(cep.is_numeric_only());
        assert!(cep.is_strict());
        assert_eq!(cep.separators(), &['-', '.']);

        let cnpj = TextKind::tax_id();
        assert_eq!(cnpj.length(), 14);
        assert_eq!(cnpj.separators(), &['-', '.', '/']);
    }

    #[test]
    fn test_format_rejects_non_text() {
        let kind = TextKind::new();
        let err = kind.format("nome", Value::Int(3)).unwrap_err();
        assert_eq!(
            err,
            FieldError::WrongType {
                name: "nome".to_string(),
                actual: ValueKind::Int,
                expected: ValueKind::Text,
            }
        );
    }

    #[test]
    fn test_format_char_only_when_lenient() {
        let lenient = TextKind::new();
        assert_eq!(
            lenient.format("uf", Value::Char('S')).unwrap(),
            Some("S".to_string())
        );

        let strict = TextKind::postal_code();
        let err = strict.format("cep", Value::Char('1')).unwrap_err();
        assert!(matches!(
            err,
            FieldError::WrongType {
                actual: ValueKind::Char,
                ..
            }
        ));
    }

    #[test]
    fn test_format_null_passes_through() {
        assert_eq!(TextKind::tax_id().format("cnpj", Value::Null).unwrap(), None);
        assert_eq!(TextKind::tax_id().validate("cnpj", None).unwrap(), None);
    }
}
