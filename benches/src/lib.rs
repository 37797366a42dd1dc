//! данные для бенчмарков: тексты в формате UnicodeData.txt и SpecialCasing.txt,
//! по структуре похожие на настоящие (чередование прописных и строчных, блоки букв, пропуски)

/// синтетический UnicodeData.txt с кодпоинтами от 0 до last
pub fn unicode_data(last: u32) -> String
{
    let mut output = String::new();

    for code in 0 ..= last {
        let block = code >> 8;

        // каждый четвертый блок - не буквы
        if block % 4 == 3 {
            if code % 16 == 0 {
                output.push_str(format!("{:04X};SYMBOL;So;0;ON;;;;;N;;;;;\n", code).as_str());
            }
            continue;
        }

        // в остальных - пары прописная/строчная, как в латинице расширенной
        let line = match code % 2 == 0 {
            true => format!("{:04X};CAPITAL;Lu;0;L;;;;;N;;;;{:04X};\n", code, code + 1),
            false => format!("{:04X};SMALL;Ll;0;L;;;;;N;;;{:04X};;{:04X}\n", code, code - 1, code - 1),
        };

        output.push_str(line.as_str());
    }

    output
}

/// синтетический SpecialCasing.txt: count безусловных записей и столько же с условием
pub fn special_casing(count: u32) -> String
{
    let mut output = String::from("# SpecialCasing.txt\n\n");

    for i in 0 .. count {
        let code = 0xFB00 + i;
        output.push_str(
            format!(
                "{:04X}; {:04X}; 0046 {:04X}; 0046 {:04X} 0049; # LIGATURE\n",
                code,
                code,
                0x61 + i % 26,
                0x41 + i % 26
            )
            .as_str(),
        );
    }

    for i in 0 .. count {
        output.push_str(format!("{:04X}; 0131; 0049; 0049; tr; # CONDITIONAL\n", 0x100 + i).as_str());
    }

    output
}

#[cfg(test)]
mod tests
{
    use super::*;
    use unicode_casing_source::{CasingData, ExtractOptions};

    #[test]
    fn generated_data_parses()
    {
        let data = CasingData::parse(&unicode_data(0x3FF), &special_casing(8), ExtractOptions::default()).unwrap();

        assert!(!data.isalpha_codes.is_empty());
        assert_eq!(data.full_upper_pairs.len(), 8);
        assert!(data.full_lower_pairs.is_empty());
    }
}
