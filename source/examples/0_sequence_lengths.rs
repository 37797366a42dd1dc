use std::collections::BTreeMap;
use std::env;
use std::fs;

use unicode_casing_source::special_casing;

/// какой длины бывают полные преобразования регистра? от этого зависит ширина строк в таблицах
fn main()
{
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            println!("Использование: 0_sequence_lengths <SpecialCasing.txt>");
            return;
        }
    };

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) => {
            println!("Не удалось прочитать {}: {}", path, e);
            return;
        }
    };

    let records = match special_casing(&data) {
        Ok(records) => records,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    let mut lower: BTreeMap<usize, Vec<u32>> = BTreeMap::new();
    let mut upper: BTreeMap<usize, Vec<u32>> = BTreeMap::new();

    for record in records.iter().filter(|r| r.is_applicable()) {
        lower.entry(record.lower_sequence.len()).or_default().push(record.code);
        upper.entry(record.upper_sequence.len()).or_default().push(record.code);
    }

    for (name, lengths) in [("lower", &lower), ("upper", &upper)] {
        println!("\n{}:", name);

        for (len, codes) in lengths {
            let sample: String = codes.iter().take(8).map(|c| format!("U+{:04X} ", c)).collect();
            println!("  {} - {} ({}...)", len, codes.len(), sample);
        }
    }
}
