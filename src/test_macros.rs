//! Test macros for NonZero newtype wrappers

/// Generate standard tests for a NonZero newtype wrapper
///
/// # Arguments
/// * `$type_name` - The newtype struct name (e.g., `PrintDelay`)
/// * `$default_value` - Expected value of the DEFAULT constant
/// * `$test_value` - A valid non-zero value different from the default
///
/// # Example
/// ```ignore
/// test_nonzero_newtype!(PrintDelay, 1, 5);
/// ```
#[macro_export]
macro_rules! test_nonzero_newtype {
    ($type_name:ident, $default_value:expr, $test_value:expr) => {
        #[test]
        fn test_default() {
            assert_eq!($type_name::DEFAULT.get(), $default_value);
            assert_eq!($type_name::default(), $type_name::DEFAULT);
        }

        #[test]
        fn test_new_valid() {
            let value = $type_name::new($test_value).unwrap();
            assert_eq!(value.get(), $test_value);
            assert_eq!(value.to_string(), $test_value.to_string());
        }

        #[test]
        fn test_new_zero_rejected() {
            assert!($type_name::new(0).is_none());
        }

        #[test]
        fn test_equality() {
            let a = $type_name::new($test_value).unwrap();
            let b = $type_name::new($test_value).unwrap();
            assert_eq!(a, b);
            assert_ne!(a, $type_name::DEFAULT);
        }
    };
}

/// Generate FromStr tests for a newtype with FromStr implementation
///
/// # Example
/// ```ignore
/// test_newtype_from_str!(PrintDelay, "10", 10, "soon");
/// ```
#[macro_export]
macro_rules! test_newtype_from_str {
    ($type_name:ident, $valid_str:expr, $expected_value:expr, $invalid_str:expr) => {
        #[test]
        fn test_from_str_valid() {
            let value: $type_name = $valid_str.parse().unwrap();
            assert_eq!(value.get(), $expected_value);
        }

        #[test]
        fn test_from_str_invalid() {
            let result: Result<$type_name, _> = $invalid_str.parse();
            assert!(result.is_err());
        }

        #[test]
        fn test_from_str_zero_rejected() {
            let result: Result<$type_name, _> = "0".parse();
            assert!(result.is_err());
        }
    };
}
