use super::{parse_code, PropertiesError};

/// Simple Uppercase/Lowercase Mapping
/// берется из UCD: 12, 13 колонки UnicodeData.txt
///
/// соответствующая символу прописная/строчная буква, один символ
///
/// более детально - https://www.unicode.org/reports/tr44/#Casemapping
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SimpleCaseMapping
{
    None,
    Some(u32),
}

impl TryFrom<&str> for SimpleCaseMapping
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value.is_empty() {
            true => Self::None,
            false => Self::Some(parse_code(value)?),
        })
    }
}

impl From<SimpleCaseMapping> for Option<u32>
{
    #[inline]
    fn from(value: SimpleCaseMapping) -> Self
    {
        match value {
            SimpleCaseMapping::None => None,
            SimpleCaseMapping::Some(code) => Some(code),
        }
    }
}
