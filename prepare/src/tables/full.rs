use crate::error::PrepareError;

/// ширина строки таблицы полных преобразований в нижний регистр: кодпоинт + до 3 результатов
pub const LOWER_FULL_WIDTH: usize = 4;
/// ширина строки таблицы полных преобразований в верхний регистр: кодпоинт + до 4 результатов
pub const UPPER_FULL_WIDTH: usize = 5;

/// преобразование кодпоинта в последовательность, записывается в таблицу как есть
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullMapEntry
{
    pub src: u32,
    pub mapped: Vec<u32>,
}

impl FullMapEntry
{
    /// строка таблицы: кодпоинт, последовательность и нули до нужной ширины
    ///
    /// ноль после последовательности - признак её конца, поэтому в самой последовательности нулей быть не может
    pub fn row(&self, width: usize) -> Vec<u32>
    {
        let mut row = Vec::with_capacity(width);

        row.push(self.src);
        row.extend_from_slice(&self.mapped);
        row.resize(width, 0);

        row
    }
}

/// строки таблицы полных преобразований; ожидается список, упорядоченный по кодпоинту
pub fn full_entries(pairs: Vec<(u32, Vec<u32>)>, width: usize) -> Result<Vec<FullMapEntry>, PrepareError>
{
    let mut entries: Vec<FullMapEntry> = Vec::with_capacity(pairs.len());

    for (src, mapped) in pairs {
        if let Some(previous) = entries.last() {
            assert!(
                src > previous.src,
                "кодпоинты должны идти по возрастанию: U+{:04X} после U+{:04X}",
                src,
                previous.src
            );
        }

        if mapped.is_empty() {
            return Err(PrepareError::EmptySequence { code: src });
        }

        if mapped.len() >= width {
            return Err(PrepareError::SequenceTooLong {
                code: src,
                len: mapped.len(),
                width,
            });
        }

        if mapped.contains(&0) {
            return Err(PrepareError::ZeroInSequence { code: src });
        }

        assert_ne!(mapped[0], src, "тривиальное преобразование U+{:04X} в таблице", src);

        entries.push(FullMapEntry { src, mapped });
    }

    Ok(entries)
}
