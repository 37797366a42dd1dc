use std::fs;
use std::path::Path;

use crate::error::{Result, UcdError};
use crate::properties::*;
use crate::special_casing::special_casing;
use crate::unicode::unicode_data;

/// настройки извлечения данных
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions
{
    /// разворачивать диапазоны <..., First> / <..., Last> из UnicodeData.txt
    pub expand_ranges: bool,
    /// оставить только кодпоинты базовой многоязычной плоскости
    pub bmp_only: bool,
}

/// данные для таблиц букв и регистра, все коллекции упорядочены по возрастанию исходного кодпоинта
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CasingData
{
    /// кодпоинты с категорией L*
    pub isalpha_codes: Vec<u32>,
    /// простые преобразования в верхний регистр (кодпоинт, результат)
    pub simple_upper_pairs: Vec<(u32, u32)>,
    /// простые преобразования в нижний регистр (кодпоинт, результат)
    pub simple_lower_pairs: Vec<(u32, u32)>,
    /// полные преобразования в верхний регистр (кодпоинт, последовательность)
    pub full_upper_pairs: Vec<(u32, Vec<u32>)>,
    /// полные преобразования в нижний регистр (кодпоинт, последовательность)
    pub full_lower_pairs: Vec<(u32, Vec<u32>)>,
}

impl CasingData
{
    /// прочитать и разобрать UnicodeData.txt и SpecialCasing.txt
    pub fn from_files(unicode_data: &Path, special_casing: &Path, options: ExtractOptions) -> Result<Self>
    {
        let unicode_data = read(unicode_data)?;
        let special_casing = read(special_casing)?;

        Self::parse(&unicode_data, &special_casing, options)
    }

    /// разобрать тексты UnicodeData.txt и SpecialCasing.txt
    pub fn parse(unicode_data_text: &str, special_casing_text: &str, options: ExtractOptions) -> Result<Self>
    {
        let records = unicode_data(unicode_data_text, options.expand_ranges)?;
        let special = special_casing(special_casing_text)?;

        Ok(Self::from_records(records, special, options))
    }

    /// собрать коллекции из уже разобранных записей
    pub fn from_records(
        records: Vec<CodepointAttributeRecord>,
        special: Vec<SpecialCaseRecord>,
        options: ExtractOptions,
    ) -> Self
    {
        let in_scope = |code: u32| !options.bmp_only || code <= MAX_BMP_CODEPOINT;

        let mut data = Self::default();

        for record in records.iter().filter(|r| in_scope(r.code)) {
            if record.is_letter() {
                data.isalpha_codes.push(record.code);
            }

            if let Some(upper) = record.simple_upper {
                data.simple_upper_pairs.push((record.code, upper));
            }

            if let Some(lower) = record.simple_lower {
                data.simple_lower_pairs.push((record.code, lower));
            }
        }

        let mut skipped_conditional = 0;
        let mut skipped_empty = 0;

        for record in special.into_iter().filter(|r| in_scope(r.code)) {
            if record.has_condition {
                skipped_conditional += 1;
                continue;
            }

            if record.lower_sequence.is_empty() || record.upper_sequence.is_empty() {
                skipped_empty += 1;
                continue;
            }

            // тривиальное преобразование (начинается с самого кодпоинта) в таблицу не попадает
            if record.lower_sequence[0] != record.code {
                data.full_lower_pairs.push((record.code, record.lower_sequence));
            }

            if record.upper_sequence[0] != record.code {
                data.full_upper_pairs.push((record.code, record.upper_sequence));
            }
        }

        data.full_lower_pairs.sort_by_key(|(code, _)| *code);
        data.full_upper_pairs.sort_by_key(|(code, _)| *code);

        tracing::debug!(
            isalpha = data.isalpha_codes.len(),
            simple_upper = data.simple_upper_pairs.len(),
            simple_lower = data.simple_lower_pairs.len(),
            full_upper = data.full_upper_pairs.len(),
            full_lower = data.full_lower_pairs.len(),
            skipped_conditional,
            skipped_empty,
            "данные о регистре собраны"
        );

        data
    }
}

/// прочитать файл целиком
fn read(path: &Path) -> Result<String>
{
    fs::read_to_string(path).map_err(|source| UcdError::MissingInput {
        path: path.to_path_buf(),
        source,
    })
}
