use anyhow::Result;
use proptest::prelude::*;
use useful_extensions::prelude::*;
use useful_extensions::ExtError;

#[test]
fn test_to_int_contract() -> Result<()> {
    assert_eq!("42".to_int(false)?, 42);
    assert_eq!("abc".to_int(false)?, 0);

    let err = "abc".to_int(true).unwrap_err();
    assert!(matches!(err, ExtError::FormatError { .. }));
    assert_eq!(err.to_string(), "'abc' cannot be converted as int");
    Ok(())
}

#[test]
fn test_get_between_markers() {
    assert_eq!("abc[hello]def".get_between("[", "]"), "hello");
    assert_eq!("abc(hello)def".get_between("[", "]"), "");
}

#[test]
fn test_helpers_work_on_owned_strings() -> Result<()> {
    let title = String::from("the quick fox");
    assert_eq!(title.to_upper_at_index(4)?, "the Quick fox");
    assert_eq!(title.replace_last(" ", "_"), "the quick_fox");
    assert_eq!(title.split_by(" ", SplitOptions::RemoveEmptyEntries).len(), 3);
    // input untouched
    assert_eq!(title, "the quick fox");
    Ok(())
}

#[test]
fn test_nullable_trim() -> Result<()> {
    let name: Option<String> = Some("  Ada  ".to_string());
    assert_eq!(name.trim_or_ignore(false)?, Some("Ada".to_string()));

    let missing: Option<String> = None;
    assert_eq!(missing.trim_or_ignore(true)?, None);
    assert!(missing.trim_or_ignore(false).is_err());
    Ok(())
}

proptest! {
    #[test]
    fn test_remove_first_drops_at_most_one_occurrence(s in "[ab]{0,12}", x in "[ab]{1,2}") {
        let removed = s.remove_first(&x);
        let before = s.matches(x.as_str()).count();
        let after = removed.matches(x.as_str()).count();

        if before == 0 {
            prop_assert_eq!(&removed, &s);
        } else {
            prop_assert_eq!(removed.len(), s.len() - x.len());
        }
        // removing one copy can merge neighbours into at most one new match
        prop_assert!(after + 1 >= before);
    }

    #[test]
    fn test_get_between_is_empty_without_markers(s in "[a-z ]{0,20}") {
        prop_assert_eq!(s.get_between("[", "]"), "");
    }

    #[test]
    fn test_to_int_round_trips_any_i32(n in any::<i32>()) {
        prop_assert_eq!(n.to_string().to_int(true).unwrap(), n);
    }

    #[test]
    fn test_case_at_index_preserves_other_chars(s in "[a-z]{1,16}", seed in any::<usize>()) {
        let index = seed % s.len();
        let upper = s.to_upper_at_index(index).unwrap();
        prop_assert_eq!(upper.to_lowercase(), s.clone());
        prop_assert_eq!(upper.to_lower_at_index(index).unwrap(), s);
    }

    #[test]
    fn test_case_at_index_keeps_char_count(s in "\\PC{1,16}", seed in any::<usize>()) {
        let length = s.chars().count();
        let index = seed % length;
        prop_assert_eq!(s.to_upper_at_index(index).unwrap().chars().count(), length);
        prop_assert_eq!(s.to_lower_at_index(index).unwrap().chars().count(), length);
    }

    #[test]
    fn test_has_number_matches_ascii_digits(s in "\\PC{0,16}") {
        let expected = s.chars().any(|c| c.is_ascii_digit());
        prop_assert_eq!(s.has_number(), expected);
    }
}
