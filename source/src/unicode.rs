use crate::error::{Dataset, Result, UcdError};
use crate::properties::*;

/// минимальное количество полей в строке UnicodeData.txt (читаем до 13 колонки включительно)
const MIN_FIELDS: usize = 14;

/// разбор UnicodeData.txt из UCD - по одной записи на строку
///
/// если expand_ranges - пары <..., First> / <..., Last> разворачиваются во все кодпоинты диапазона,
/// иначе обе строки остаются обычными записями
pub fn unicode_data(data: &str, expand_ranges: bool) -> Result<Vec<CodepointAttributeRecord>>
{
    let mut records = vec![];
    let mut last_code: Option<u32> = None;

    // пригодится, когда встретим диапазоны
    let mut range_start: Option<(usize, CodepointAttributeRecord)> = None;

    for (i, line) in data.lines().enumerate() {
        let line_no = i + 1;

        if line.trim().is_empty() {
            continue;
        }

        let malformed = |reason: String| UcdError::malformed(Dataset::UnicodeData, line_no, reason);

        let props: Vec<&str> = line.split(';').map(str::trim).collect();

        if props.len() < MIN_FIELDS {
            return Err(malformed(format!(
                "ожидалось не менее {} полей, найдено {}",
                MIN_FIELDS,
                props.len()
            )));
        }

        // код и название
        let code = parse_code(props[0]).map_err(|e| malformed(e.to_string()))?;
        let name = props[1];

        if let Some(last) = last_code {
            if code <= last {
                return Err(malformed(format!(
                    "кодпоинты должны идти по возрастанию: U+{:04X} после U+{:04X}",
                    code, last
                )));
            }
        }
        last_code = Some(code);

        // от категории нужна только первая буква
        let category_letter = match props[2].chars().next() {
            Some(c) => c,
            None => return Err(malformed("пустая основная категория".to_owned())),
        };

        // связанные символы в другом регистре (если есть)
        let simple_upper = SimpleCaseMapping::try_from(props[12]).map_err(|e| malformed(e.to_string()))?;
        let simple_lower = SimpleCaseMapping::try_from(props[13]).map_err(|e| malformed(e.to_string()))?;

        let record = CodepointAttributeRecord {
            code,
            category_letter,
            simple_upper: simple_upper.into(),
            simple_lower: simple_lower.into(),
        };

        if expand_ranges {
            if let Some((start_line, first)) = &range_start {
                if !is_range_last(name) {
                    return Err(UcdError::malformed(
                        Dataset::UnicodeData,
                        *start_line,
                        format!("диапазон, начатый с U+{:04X}, не закрыт", first.code),
                    ));
                }
            }

            if is_range_first(name) {
                range_start = Some((line_no, record));
                continue;
            }

            if is_range_last(name) {
                let (_, first) = match range_start.take() {
                    Some(start) => start,
                    None => return Err(malformed(format!("конец диапазона U+{:04X} без начала", code))),
                };

                // свойства всех кодпоинтов диапазона совпадают со свойствами его начала
                for code in first.code ..= record.code {
                    records.push(CodepointAttributeRecord {
                        code,
                        ..first
                    });
                }

                continue;
            }
        }

        records.push(record);
    }

    if let Some((start_line, first)) = range_start {
        return Err(UcdError::malformed(
            Dataset::UnicodeData,
            start_line,
            format!("диапазон, начатый с U+{:04X}, не закрыт", first.code),
        ));
    }

    tracing::debug!(records = records.len(), "разобран UnicodeData");

    Ok(records)
}

/// начало диапазона, например <CJK Ideograph, First>
fn is_range_first(name: &str) -> bool
{
    name.starts_with('<') && name.ends_with(", First>")
}

/// конец диапазона, например <CJK Ideograph, Last>
fn is_range_last(name: &str) -> bool
{
    name.starts_with('<') && name.ends_with(", Last>")
}
