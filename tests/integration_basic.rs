//! End-to-end tests for the `Secret` wrapper.
//!
//! These tests exercise the public contract of `Secret<T>`:
//! - construction and guarded access,
//! - redacted `Display`/`Debug` presentation,
//! - equality, cloning, and transformation over the hidden value.

use shroud::{REDACTED_PLACEHOLDER, Secret};

mod construction {
    use super::*;

    #[test]
    fn expose_returns_the_wrapped_value() {
        let secret = Secret::new(String::from("password"));
        assert_eq!(secret.expose(), "password");
    }

    #[test]
    fn into_inner_returns_ownership() {
        let secret = Secret::new(String::from("password"));
        assert_eq!(secret.into_inner(), "password");
    }

    #[test]
    fn any_value_type_is_accepted() {
        assert_eq!(*Secret::new(42).expose(), 42);
        assert_eq!(*Secret::new("42").expose(), "42");
        assert!(*Secret::new(true).expose());
        assert_eq!(*Secret::new(vec![1, 2, 3]).expose(), vec![1, 2, 3]);
        assert_eq!(*Secret::new(Some(0.5)).expose(), Some(0.5));
    }
}

mod presentation {
    use super::*;

    #[test]
    fn display_yields_exactly_the_placeholder() {
        let secret = Secret::new(String::from("password"));
        assert_eq!(secret.to_string(), REDACTED_PLACEHOLDER);
        assert_eq!(format!("{secret}"), "[REDACTED]");
    }

    #[test]
    fn debug_yields_the_redacted_tuple_form() {
        let secret = Secret::new(String::from("password"));
        assert_eq!(format!("{secret:?}"), r#"Secret("[REDACTED]")"#);
    }

    #[test]
    fn presentation_leaks_nothing_about_the_value() {
        // Same output for wildly different inner values and types.
        let short = Secret::new(String::from("x")).to_string();
        let long = Secret::new("a".repeat(4096)).to_string();
        let numeric = Secret::new(u128::MAX).to_string();
        assert_eq!(short, long);
        assert_eq!(short, numeric);
    }

    #[test]
    fn redacted_accessor_matches_the_placeholder() {
        let secret = Secret::new(0_u8);
        assert_eq!(secret.redacted(), REDACTED_PLACEHOLDER);
    }
}

mod equality {
    use super::*;

    #[test]
    fn equal_inner_values_make_equal_secrets() {
        let s1 = Secret::new(42);
        let s2 = Secret::new(42);
        let s3 = Secret::new(43);

        assert!(s1.equals(&s2));
        assert!(!s1.equals(&s3));
        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
    }

    #[test]
    fn a_secret_never_equals_its_unwrapped_value() {
        let secret = Secret::new(String::from("password"));
        assert!(!secret.equals(&String::from("password")));
    }

    #[test]
    fn comparison_against_unrelated_types_is_false_not_an_error() {
        let secret = Secret::new(String::from("password"));
        assert!(!secret.equals(&()));
        assert!(!secret.equals(&42_i32));
        assert!(!secret.equals(&Option::<String>::None));
        assert!(!secret.equals(&Secret::new(42_i32)));
    }
}

mod cloning {
    use super::*;

    #[test]
    fn clone_is_a_distinct_equal_instance() {
        let original = Secret::new(String::from("password"));
        let cloned = original.clone();

        assert!(cloned.equals(&original));
        assert_eq!(cloned.expose(), original.expose());
        // Distinct ownership: the clone does not alias the original's storage.
        assert_ne!(
            std::ptr::from_ref(original.expose()),
            std::ptr::from_ref(cloned.expose())
        );
    }

    #[test]
    fn mutating_a_cloned_inner_value_leaves_the_original_intact() {
        let original = Secret::new(vec![1, 2, 3]);
        let mutated = original.clone().map(|mut v| {
            v.push(4);
            v
        });
        assert_eq!(*original.expose(), vec![1, 2, 3]);
        assert_eq!(*mutated.expose(), vec![1, 2, 3, 4]);
    }
}

mod mapping {
    use super::*;

    #[test]
    fn map_transforms_the_hidden_value() {
        let secret = Secret::new("password");
        let length = secret.map(str::len);
        assert_eq!(*length.expose(), 8);
    }

    #[test]
    fn map_preserves_redaction() {
        let secret = Secret::new(String::from("password"));
        let upper = secret.map(|value| value.to_uppercase());
        assert_eq!(upper.to_string(), "[REDACTED]");
        assert_eq!(format!("{upper:?}"), r#"Secret("[REDACTED]")"#);
    }

    #[test]
    fn map_can_change_the_inner_type() {
        let secret = Secret::new(String::from("3"));
        let parsed = secret.map(|value| value.parse::<u32>());
        assert_eq!(*parsed.expose(), Ok(3));
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn password_flows_opaquely_until_exposed() {
        let password = Secret::new(String::from("password"));

        // Threads through formatting opaquely.
        let log_line = format!("auth attempt with password={password}");
        assert_eq!(log_line, "auth attempt with password=[REDACTED]");

        // Deliberate use at the boundary sees the raw value.
        assert_eq!(password.expose(), "password");
    }

    #[test]
    fn derived_secrets_stay_secrets() {
        let api_key = Secret::new(String::from("sk_live_abc123"));
        let fingerprint = api_key.clone().map(|key| key.len());
        assert_eq!(*fingerprint.expose(), 14);
        assert_eq!(fingerprint.to_string(), "[REDACTED]");
        assert!(api_key.equals(&Secret::new(String::from("sk_live_abc123"))));
    }
}
