pub mod convert;
pub mod datetime_ext;
pub mod int_ext;
pub mod nullable;
pub mod string_ext;

pub use crate::domain::model::ElapsedTime;
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
