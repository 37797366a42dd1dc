mod full_case_mapping;
mod simple_case_mapping;

pub use full_case_mapping::FullCaseMapping;
pub use simple_case_mapping::SimpleCaseMapping;

use thiserror::Error;

/// последний допустимый кодпоинт Unicode
pub const MAX_CODEPOINT: u32 = 0x10FFFF;
/// последний кодпоинт базовой многоязычной плоскости (BMP)
pub const MAX_BMP_CODEPOINT: u32 = 0xFFFF;

/// свойства кодпоинта, необходимые для таблиц букв и регистра
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointAttributeRecord
{
    /// код символа
    pub code: u32,
    /// первая буква основной категории (general category): L, M, N, ...
    pub category_letter: char,
    /// соответствующая прописная буква
    pub simple_upper: Option<u32>,
    /// соответствующая строчная буква
    pub simple_lower: Option<u32>,
}

impl CodepointAttributeRecord
{
    /// относится-ли категория к буквам (L)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        self.category_letter == 'L'
    }
}

/// полное преобразование регистра, зависящее от контекста
/// источник - UCD, SpecialCasing.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCaseRecord
{
    /// код символа
    pub code: u32,
    /// последовательность строчных
    pub lower_sequence: Vec<u32>,
    /// последовательность прописных
    pub upper_sequence: Vec<u32>,
    /// указано условие применения (язык, контекст) - такие записи не поддерживаются
    pub has_condition: bool,
}

impl SpecialCaseRecord
{
    /// запись может попасть в таблицы: без условия и с обеими последовательностями
    #[inline]
    pub fn is_applicable(&self) -> bool
    {
        !self.has_condition && !self.lower_sequence.is_empty() && !self.upper_sequence.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum PropertiesError
{
    #[error("некорректное шестнадцатеричное значение {0:?}")]
    InvalidHex(String),
    #[error("кодпоинт 0x{0:X} вне диапазона Unicode")]
    OutOfRange(u32),
}

/// разбор кодпоинта, записанного в шестнадцатеричном виде
pub fn parse_code(value: &str) -> Result<u32, PropertiesError>
{
    let code = match u32::from_str_radix(value, 16) {
        Ok(code) => code,
        Err(_) => return Err(PropertiesError::InvalidHex(value.to_owned())),
    };

    match code > MAX_CODEPOINT {
        true => Err(PropertiesError::OutOfRange(code)),
        false => Ok(code),
    }
}
