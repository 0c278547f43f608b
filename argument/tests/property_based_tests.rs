use argument::{Argument, Comparison, Culture, ErrorKind, StringUtils};
use proptest::prelude::*;

#[cfg(test)]
mod string_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_base64_round_trip(text in ".*") {
            let encoded = StringUtils::base64_encode(text.as_str()).unwrap();

            // Property: standard alphabet with padding, length is a multiple of 4
            prop_assert_eq!(encoded.len() % 4, 0);
            prop_assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || "+/=".contains(c)));

            // Property: decoding reproduces the input
            let decoded = StringUtils::base64_decode(encoded.as_str()).unwrap();
            prop_assert_eq!(decoded, text);
        }

        #[test]
        fn test_non_blank_strings_are_not_null_or_whitespace(
            prefix in "\\s*",
            core in "[a-zA-Z0-9]{1,16}",
            suffix in "\\s*"
        ) {
            let text = format!("{prefix}{core}{suffix}");
            prop_assert!(!StringUtils::is_null_or_whitespace(text.as_str()));
            prop_assert!(StringUtils::is_not_null_or_whitespace(text.as_str()));
        }

        #[test]
        fn test_whitespace_predicates_are_negations(text in proptest::option::of(".*")) {
            let text = text.as_deref();
            prop_assert_eq!(
                StringUtils::is_null_or_whitespace(text),
                !StringUtils::is_not_null_or_whitespace(text)
            );
        }

        #[test]
        fn test_split_then_join_restores_source(
            pieces in prop::collection::vec("[a-z]{0,6}", 1..10)
        ) {
            let source = pieces.join(",");
            let split = StringUtils::to_split(source.as_str(), ",").unwrap();

            if source.is_empty() {
                prop_assert!(split.is_empty());
            } else {
                prop_assert_eq!(&split, &pieces);
                prop_assert_eq!(split.join(","), source);
            }
        }

        #[test]
        fn test_separated_trims_every_element(
            pieces in prop::collection::vec("[a-z]{1,6}", 1..10),
            padding in "[ \t]{0,3}"
        ) {
            let padded: Vec<String> =
                pieces.iter().map(|p| format!("{padding}{p}{padding}")).collect();
            let joined = StringUtils::to_separated(Some(&padded), ";").unwrap();
            prop_assert_eq!(joined, pieces.join(";"));
        }

        #[test]
        fn test_trim_end_removes_appended_suffix(stem in ".*", suffix in "\\.[a-z]{1,4}") {
            let input = format!("{stem}{suffix}");
            let trimmed = StringUtils::trim_end(input.as_str(), suffix.as_str()).unwrap();
            prop_assert_eq!(trimmed, stem.as_str());
        }

        #[test]
        fn test_lowercased_text_is_all_lowercase(text in "[a-zA-Z ]*") {
            let lowered = StringUtils::to_lowercase(text.as_str(), &Culture::Invariant).unwrap();
            let invariant = Culture::Invariant;
            prop_assert!(StringUtils::is_all_lowercase(lowered.as_str(), &invariant).unwrap());
        }

        #[test]
        fn test_substring_is_found_ignoring_case(
            before in "[a-z]{0,8}",
            needle in "[a-z]{1,8}",
            after in "[a-z]{0,8}"
        ) {
            let source = format!("{before}{}{after}", needle.to_uppercase());
            let invariant = Culture::Invariant;

            for comparison in [Comparison::OrdinalIgnoreCase, Comparison::CultureIgnoreCase] {
                prop_assert!(StringUtils::contains(
                    source.as_str(),
                    needle.as_str(),
                    comparison,
                    &invariant
                ));
            }
        }
    }
}

#[cfg(test)]
mod guard_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_positive_id_boundary(id in any::<i64>()) {
            let result = Argument::require_positive_id(id, "id", None);
            if id >= 1 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::OutOfRange);
            }
        }

        #[test]
        fn test_greater_than_is_strict(value in any::<i32>(), threshold in any::<i32>()) {
            let result = Argument::require_greater_than(value, "n", threshold);
            prop_assert_eq!(result.is_ok(), value > threshold);
        }

        #[test]
        fn test_max_items_boundary_is_inclusive(len in 1usize..50, max in 0usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let result = Argument::require_max_items(Some(&items), "items", max);

            if len <= max {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::LengthExceeded);
            }
        }

        #[test]
        fn test_min_length_boundary_is_inclusive(text in "\\PC{0,20}", min in 0usize..25) {
            let result = Argument::require_min_length(text.as_str(), "text", min);
            prop_assert_eq!(result.is_ok(), text.chars().count() >= min);
        }
    }
}
