use crate::tables::TableStats;

/// размер элемента таблицы в байтах (Rune - 32-битное целое)
const ELEMENT_SIZE: usize = 4;

/// информация о размерах таблиц
pub fn log(stats: &[TableStats])
{
    let mut total = 0;

    for table in stats {
        let bytes = table.elements * ELEMENT_SIZE;
        total += bytes;

        tracing::info!(
            table = table.name,
            rows = table.rows,
            elements = table.elements,
            bytes,
            "таблица"
        );
    }

    tracing::info!(tables = stats.len(), bytes = total, "общий размер");
}
