use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UcdError>;

/// набор данных UCD, из которого читается запись
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset
{
    /// UnicodeData.txt
    UnicodeData,
    /// SpecialCasing.txt
    SpecialCasing,
}

impl core::fmt::Display for Dataset
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            Dataset::UnicodeData => "UnicodeData",
            Dataset::SpecialCasing => "SpecialCasing",
        };

        write!(f, "{}", value)
    }
}

/// ошибки разбора UCD - любая из них прерывает генерацию таблиц целиком
#[derive(Debug, Error)]
pub enum UcdError
{
    /// строка не соответствует ожидаемому формату
    #[error("{dataset}, строка {line}: {reason}")]
    MalformedRecord
    {
        dataset: Dataset,
        line: usize,
        reason: String,
    },

    /// не удалось прочитать файл с данными
    #[error("не удалось прочитать {}: {}", .path.display(), .source)]
    MissingInput
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl UcdError
{
    pub fn malformed(dataset: Dataset, line: usize, reason: impl Into<String>) -> Self
    {
        Self::MalformedRecord {
            dataset,
            line,
            reason: reason.into(),
        }
    }
}
