//! Lifting of value-type helpers onto `Option`.
//!
//! Every helper is written once against the concrete type. Its `Option`
//! sibling goes through [`lift`], which short-circuits on `None` with the
//! result type's [`Absent`] value and never calls the wrapped function.

/// The result a lifted helper returns when its input is absent.
pub trait Absent {
    fn absent() -> Self;
}

/// Predicates answer `false` for absent input.
impl Absent for bool {
    fn absent() -> Self {
        false
    }
}

/// Transforms answer `None` for absent input.
impl<T> Absent for Option<T> {
    fn absent() -> Self {
        None
    }
}

/// Fallible transforms answer `Ok(None)` for absent input.
impl<T, E> Absent for Result<Option<T>, E> {
    fn absent() -> Self {
        Ok(None)
    }
}

pub fn lift<T, R: Absent>(value: Option<T>, f: impl FnOnce(T) -> R) -> R {
    match value {
        Some(inner) => f(inner),
        None => R::absent(),
    }
}

/// Lifts a total transform, rewrapping its result in `Some`.
pub fn lift_map<T, R>(value: Option<T>, f: impl FnOnce(T) -> R) -> Option<R> {
    lift(value, |inner| Some(f(inner)))
}

/// Lifts a fallible transform: `None` stays `Ok(None)`, errors pass through.
pub fn lift_try<T, R, E>(
    value: Option<T>,
    f: impl FnOnce(T) -> Result<R, E>,
) -> Result<Option<R>, E> {
    lift(value, |inner| f(inner).map(Some))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinel<T, R>(_: T) -> R {
        panic!("wrapped helper must not run for absent input")
    }

    #[test]
    fn test_absent_predicate_is_false_without_evaluation() {
        assert!(!lift(None::<i32>, sentinel::<i32, bool>));
    }

    #[test]
    fn test_absent_transform_is_none_without_evaluation() {
        assert_eq!(lift_map(None::<i32>, sentinel::<i32, String>), None);
    }

    #[test]
    fn test_absent_fallible_transform_is_ok_none() {
        let result: Result<Option<u8>, String> = lift_try(None::<i32>, sentinel);
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_present_values_delegate() {
        assert!(lift(Some(3), |n: i32| n > 0));
        assert_eq!(lift_map(Some("ab"), str::len), Some(2));

        let failed: Result<Option<u8>, String> = lift_try(Some(1), |_| Err("boom".to_string()));
        assert_eq!(failed, Err("boom".to_string()));
    }
}
