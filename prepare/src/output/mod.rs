use std::io::Write;

use crate::error::PrepareError;
use crate::tables::*;

use self::format::format_table;

mod format;
mod stats;

/// настройки вывода
#[derive(Debug, Clone)]
pub struct OutputOptions
{
    /// тип элементов массивов
    pub rune_type: String,
    /// названия исходных файлов - для комментария в начале
    pub sources: Vec<String>,
}

impl Default for OutputOptions
{
    fn default() -> Self
    {
        Self {
            rune_type: "Rune".to_owned(),
            sources: vec!["UnicodeData.txt".to_owned(), "SpecialCasing.txt".to_owned()],
        }
    }
}

/// пишем таблицы; текст готовится целиком заранее, чтобы не оставить в файле половину таблиц
pub fn write<W: Write>(tables: &UcdTables, options: &OutputOptions, writer: &mut W) -> Result<(), PrepareError>
{
    let output = render(tables, options);

    writer.write_all(output.as_bytes())?;
    writer.flush()?;

    stats::log(&tables.stats());

    Ok(())
}

/// текст всех таблиц: комментарий об источниках и восемь массивов
pub fn render(tables: &UcdTables, options: &OutputOptions) -> String
{
    let mut output = format!(
        "/* This file was automatically created from {} */\n",
        options.sources.join(" and ")
    );

    for (name, rows) in rows(tables) {
        output.push_str(format_table(&options.rune_type, name, &rows).as_str());
    }

    output
}

/// строки таблиц в порядке записи
fn rows(tables: &UcdTables) -> Vec<(&'static str, Vec<Vec<i64>>)>
{
    vec![
        (ALPHA1, alpha_rows(&tables.alpha.single, false)),
        (ALPHA2, alpha_rows(&tables.alpha.range, true)),
        (TOLOWER1, map_rows(&tables.tolower.single, false)),
        (TOLOWER2, map_rows(&tables.tolower.range, true)),
        (TOUPPER1, map_rows(&tables.toupper.single, false)),
        (TOUPPER2, map_rows(&tables.toupper.range, true)),
        (TOLOWER_FULL, full_rows(&tables.tolower_full, LOWER_FULL_WIDTH)),
        (TOUPPER_FULL, full_rows(&tables.toupper_full, UPPER_FULL_WIDTH)),
    ]
}

/// start,end, или code,
fn alpha_rows(runs: &[AlphaRun], range: bool) -> Vec<Vec<i64>>
{
    runs.iter()
        .map(|r| match range {
            true => vec![i64::from(r.start), i64::from(r.end)],
            false => vec![i64::from(r.start)],
        })
        .collect()
}

/// start,end,delta, или code,delta,
fn map_rows(runs: &[SimpleMapRun], range: bool) -> Vec<Vec<i64>>
{
    runs.iter()
        .map(|r| match range {
            true => vec![i64::from(r.src_start), i64::from(r.src_end), r.delta],
            false => vec![i64::from(r.src_start), r.delta],
        })
        .collect()
}

/// src,t1,t2,...,0,
fn full_rows(entries: &[FullMapEntry], width: usize) -> Vec<Vec<i64>>
{
    entries
        .iter()
        .map(|e| e.row(width).into_iter().map(i64::from).collect())
        .collect()
}
