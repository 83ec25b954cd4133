use crate::utils::error::{ExtError, Result};
use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

/// Checked conversion of any value into a target type.
///
/// Covers numeric widening and narrowing, and any other pair with a
/// `TryFrom` impl. Values that do not fit the target give
/// [`ExtError::ConversionError`].
pub trait ConvertTo: Sized {
    fn convert_to<T>(self) -> Result<T>
    where
        T: TryFrom<Self>,
        <T as TryFrom<Self>>::Error: Display;
}

impl<S> ConvertTo for S {
    fn convert_to<T>(self) -> Result<T>
    where
        T: TryFrom<Self>,
        <T as TryFrom<Self>>::Error: Display,
    {
        T::try_from(self).map_err(|e| ExtError::ConversionError {
            from: type_name::<S>(),
            to: type_name::<T>(),
            message: e.to_string(),
        })
    }
}

/// Parses text into `T` using its `FromStr` impl.
pub fn parse_as<T>(value: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    value.parse::<T>().map_err(|e| ExtError::ConversionError {
        from: "&str",
        to: type_name::<T>(),
        message: format!("'{}': {}", value, e),
    })
}
