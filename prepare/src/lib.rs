//! сжатие данных о буквах и регистре в таблицы диапазонов и смещений и их запись в виде массивов

pub mod output;
pub mod tables;

mod error;

pub use error::PrepareError;

use unicode_casing_source::CasingData;

use crate::output::OutputOptions;
use crate::tables::UcdTables;

/// сжать данные и получить текст таблиц
pub fn generate(data: CasingData, options: &OutputOptions) -> Result<String, PrepareError>
{
    let tables = UcdTables::prepare(data)?;

    Ok(output::render(&tables, options))
}
