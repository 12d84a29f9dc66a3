//! Unified error interface for workgrid.
//!
//! Every error type across the workgrid crates implements [`ErrorCode`]
//! so that callers embedding the engine can switch on stable
//! machine-readable codes instead of display strings.
//!
//! Permission denial is deliberately NOT an error anywhere in workgrid:
//! the mutation engine reports it as a skip count, and the access engine
//! reports it as `AccessLevel::None`/`Read`. `ErrorCode` covers the
//! genuinely exceptional paths (unknown directory ids, schema violations,
//! malformed imports).

/// Stable machine-readable error codes.
///
/// # Code Format
///
/// - UPPER_SNAKE_CASE, e.g. `"DIRECTORY_UNKNOWN_USER"`
/// - Prefixed with the owning domain (`DIRECTORY_`, `SCHEMA_`, `IMPORT_`)
/// - Stable once defined (API contract)
///
/// # Recoverability
///
/// An error is recoverable when the caller can fix the input and retry
/// (a malformed import cell, a duplicate column name). Unrecoverable
/// errors indicate the request can never succeed as posed.
///
/// # Example
///
/// ```
/// use workgrid_types::ErrorCode;
///
/// #[derive(Debug)]
/// enum ImportFault {
///     BadCell,
/// }
///
/// impl ErrorCode for ImportFault {
///     fn code(&self) -> &'static str {
///         "IMPORT_BAD_CELL"
///     }
///     fn is_recoverable(&self) -> bool {
///         true
///     }
/// }
///
/// assert_eq!(ImportFault::BadCell.code(), "IMPORT_BAD_CELL");
/// assert!(ImportFault::BadCell.is_recoverable());
/// ```
pub trait ErrorCode {
    /// Returns the machine-readable code for this error.
    fn code(&self) -> &'static str;

    /// Returns whether retrying with corrected input can succeed.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows workgrid conventions.
///
/// Checks the code is non-empty UPPER_SNAKE_CASE and carries the
/// expected domain prefix. Intended for tests covering every variant of
/// an error enum.
///
/// # Panics
///
/// Panics with a descriptive message if validation fails.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();
    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }
    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestError {
        Retryable,
        Fatal,
    }

    impl ErrorCode for TestError {
        fn code(&self) -> &'static str {
            match self {
                Self::Retryable => "TEST_RETRYABLE",
                Self::Fatal => "TEST_FATAL",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Retryable)
        }
    }

    #[test]
    fn error_code_trait() {
        assert_eq!(TestError::Retryable.code(), "TEST_RETRYABLE");
        assert!(TestError::Retryable.is_recoverable());
        assert!(!TestError::Fatal.is_recoverable());
    }

    #[test]
    fn assert_error_code_valid() {
        assert_error_code(&TestError::Fatal, "TEST_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn assert_error_code_wrong_prefix() {
        assert_error_code(&TestError::Fatal, "OTHER_");
    }

    #[test]
    fn upper_snake_case_rules() {
        assert!(is_upper_snake_case("SCHEMA_DUPLICATE_FIELD"));
        assert!(!is_upper_snake_case("schema_duplicate"));
        assert!(!is_upper_snake_case("_SCHEMA"));
        assert!(!is_upper_snake_case("SCHEMA__FIELD"));
    }
}
