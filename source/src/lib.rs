//! разбор данных UCD, нужных для таблиц букв и регистра:
//! UnicodeData.txt (категория, простые преобразования регистра) и SpecialCasing.txt (полные преобразования)

pub mod properties;

mod casing;
mod error;
mod special_casing;
mod unicode;

pub use casing::CasingData;
pub use casing::ExtractOptions;

pub use error::Dataset;
pub use error::Result;
pub use error::UcdError;

pub use special_casing::special_casing;
pub use unicode::unicode_data;
