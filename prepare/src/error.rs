use std::io;

use thiserror::Error;
use unicode_casing_source::UcdError;

/// ошибки подготовки таблиц
#[derive(Debug, Error)]
pub enum PrepareError
{
    /// ошибка разбора исходных данных
    #[error(transparent)]
    Source(#[from] UcdError),

    /// последовательность не помещается в строку таблицы фиксированной ширины
    #[error("U+{code:04X}: последовательность из {len} кодпоинтов не помещается в строку шириной {width}")]
    SequenceTooLong
    {
        code: u32,
        len: usize,
        width: usize,
    },

    /// пустая последовательность - в таблице неотличима от отсутствия преобразования
    #[error("U+{code:04X}: пустая последовательность")]
    EmptySequence
    {
        code: u32,
    },

    /// ноль в последовательности совпадает с заполнителем строки
    #[error("U+{code:04X}: кодпоинт 0 внутри последовательности")]
    ZeroInSequence
    {
        code: u32,
    },

    /// не удалось записать результат
    #[error("не удалось записать таблицы: {0}")]
    Output(#[from] io::Error),
}
