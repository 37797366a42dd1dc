use super::{parse_code, PropertiesError};

/// полное преобразование регистра - последовательность кодпоинтов
/// берется из UCD: 1 (lower), 3 (upper) колонки SpecialCasing.txt
///
/// например, ß (U+00DF) в верхнем регистре - "SS" (U+0053 U+0053)
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullCaseMapping
{
    pub codes: Vec<u32>,
}

impl TryFrom<&str> for FullCaseMapping
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let codes = value
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(Self { codes })
    }
}
