use std::collections::HashMap;

use crate::error::{Dataset, Result, UcdError};
use crate::properties::*;

/// минимальное количество полей: code; lower; title; upper; (condition;)? # comment
const MIN_FIELDS: usize = 5;

/// разбор SpecialCasing.txt из UCD
///
/// пустые строки и комментарии пропускаются, записи с условием возвращаются с флагом has_condition -
/// отбрасывать их или нет, решает тот, кто собирает таблицы
pub fn special_casing(data: &str) -> Result<Vec<SpecialCaseRecord>>
{
    let mut records = vec![];

    // строка, на которой встретилась безусловная запись для кодпоинта
    let mut unconditional: HashMap<u32, usize> = HashMap::new();

    for (i, line) in data.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason: String| UcdError::malformed(Dataset::SpecialCasing, line_no, reason);

        let props: Vec<&str> = line.split(';').collect();

        if props.len() < MIN_FIELDS {
            return Err(malformed(format!(
                "ожидалось не менее {} полей, найдено {}",
                MIN_FIELDS,
                props.len()
            )));
        }

        let code = parse_code(props[0].trim()).map_err(|e| malformed(e.to_string()))?;
        let lower = FullCaseMapping::try_from(props[1]).map_err(|e| malformed(e.to_string()))?;
        let upper = FullCaseMapping::try_from(props[3]).map_err(|e| malformed(e.to_string()))?;

        // условие - всё, что до комментария
        let condition = match props[4].split_once('#') {
            Some((condition, _)) => condition,
            None => props[4],
        };

        let record = SpecialCaseRecord {
            code,
            lower_sequence: lower.codes,
            upper_sequence: upper.codes,
            has_condition: !condition.trim().is_empty(),
        };

        if record.is_applicable() {
            if let Some(previous) = unconditional.insert(code, line_no) {
                return Err(malformed(format!(
                    "повторная безусловная запись для U+{:04X}, первая - в строке {}",
                    code, previous
                )));
            }
        }

        records.push(record);
    }

    tracing::debug!(
        records = records.len(),
        unconditional = unconditional.len(),
        "разобран SpecialCasing"
    );

    Ok(records)
}

#[cfg(test)]
mod tests
{
    use super::*;

    const DATA: &str = "\
# SpecialCasing-15.1.0.txt

# Unconditional mappings

00DF; 00DF; 0053 0073; 0053 0053; # LATIN SMALL LETTER SHARP S
0130; 0069 0307; 0130; 0130; # LATIN CAPITAL LETTER I WITH DOT ABOVE

# Conditional mappings

03A3; 03C2; 03A3; 03A3; Final_Sigma; # GREEK CAPITAL LETTER SIGMA
0049; 0131; 0049; 0049; tr; # LATIN CAPITAL LETTER I
";

    #[test]
    fn records()
    {
        let records = special_casing(DATA).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0],
            SpecialCaseRecord {
                code: 0xDF,
                lower_sequence: vec![0xDF],
                upper_sequence: vec![0x53, 0x53],
                has_condition: false,
            }
        );
        assert_eq!(records[1].lower_sequence, vec![0x69, 0x307]);
        assert!(!records[1].has_condition);
        assert!(records[2].has_condition);
        assert!(records[3].has_condition);
    }

    #[test]
    fn comment_is_not_a_condition()
    {
        let records = special_casing("00DF; 00DF; 0053 0073; 0053 0053;# tr; after comment\n").unwrap();
        assert!(!records[0].has_condition);
    }

    #[test]
    fn empty_mappings_are_kept_but_not_applicable()
    {
        let records = special_casing("00DF; ; 0053 0073; 0053 0053; # empty\n").unwrap();

        assert!(records[0].lower_sequence.is_empty());
        assert!(!records[0].is_applicable());
    }

    #[test]
    fn malformed_lines()
    {
        assert!(special_casing("00DF; 00DF; 0053 0073\n").is_err());
        assert!(special_casing("00DF; 00ZZ; 0053 0073; 0053 0053; # bad\n").is_err());
        assert!(special_casing("XYZ; 00DF; 0053 0073; 0053 0053; # bad\n").is_err());
    }

    #[test]
    fn duplicate_unconditional_records()
    {
        let data = "00DF; 00DF; 0053 0073; 0053 0053; #\n00DF; 00DF; 0053 0073; 0053 0053; #\n";

        match special_casing(data) {
            Err(UcdError::MalformedRecord { dataset, line, .. }) => {
                assert_eq!(dataset, Dataset::SpecialCasing);
                assert_eq!(line, 2);
            }
            other => panic!("ожидалась ошибка разбора, получено {:?}", other),
        }

        // с условием - допустимы
        let data = "03A3; 03C2; 03A3; 03A3; Final_Sigma; #\n03A3; 03C3; 03A3; 03A3; tr; #\n";
        assert_eq!(special_casing(data).unwrap().len(), 2);
    }
}
