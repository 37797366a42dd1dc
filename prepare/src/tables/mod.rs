mod deltas;
mod full;
mod runs;

pub use deltas::*;
pub use full::*;
pub use runs::*;

use unicode_casing_source::CasingData;

use crate::error::PrepareError;

// названия таблиц - по ним таблицы ищет код, который их использует

pub const ALPHA1: &str = "ucd_alpha1";
pub const ALPHA2: &str = "ucd_alpha2";
pub const TOLOWER1: &str = "ucd_tolower1";
pub const TOLOWER2: &str = "ucd_tolower2";
pub const TOUPPER1: &str = "ucd_toupper1";
pub const TOUPPER2: &str = "ucd_toupper2";
pub const TOLOWER_FULL: &str = "ucd_tolower_full";
pub const TOUPPER_FULL: &str = "ucd_toupper_full";

/// запись таблицы, которая может описывать как один кодпоинт, так и диапазон
pub trait Run
{
    /// диапазон из одного кодпоинта
    fn is_single(&self) -> bool;
}

/// таблица, разделенная на одиночные значения (суффикс 1) и диапазоны (суффикс 2)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTable<R>
{
    pub single: Vec<R>,
    pub range: Vec<R>,
}

impl<R: Run> From<Vec<R>> for SplitTable<R>
{
    fn from(runs: Vec<R>) -> Self
    {
        let (single, range): (Vec<R>, Vec<R>) = runs.into_iter().partition(|r| r.is_single());

        Self { single, range }
    }
}

/// сжатые таблицы букв и регистра
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UcdTables
{
    pub alpha: SplitTable<AlphaRun>,
    pub tolower: SplitTable<SimpleMapRun>,
    pub toupper: SplitTable<SimpleMapRun>,
    pub tolower_full: Vec<FullMapEntry>,
    pub toupper_full: Vec<FullMapEntry>,
}

/// размер таблицы в элементах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats
{
    pub name: &'static str,
    pub rows: usize,
    pub elements: usize,
}

impl UcdTables
{
    /// сжимаем собранные данные в таблицы
    pub fn prepare(data: CasingData) -> Result<Self, PrepareError>
    {
        Ok(Self {
            alpha: alpha_runs(&data.isalpha_codes).into(),
            tolower: map_runs(&data.simple_lower_pairs).into(),
            toupper: map_runs(&data.simple_upper_pairs).into(),
            tolower_full: full_entries(data.full_lower_pairs, LOWER_FULL_WIDTH)?,
            toupper_full: full_entries(data.full_upper_pairs, UPPER_FULL_WIDTH)?,
        })
    }

    /// размеры таблиц в порядке записи
    pub fn stats(&self) -> Vec<TableStats>
    {
        macro_rules! stats {
            ($name: expr, $rows: expr, $width: expr) => {
                TableStats {
                    name: $name,
                    rows: $rows,
                    elements: $rows * $width,
                }
            };
        }

        vec![
            stats!(ALPHA1, self.alpha.single.len(), 1),
            stats!(ALPHA2, self.alpha.range.len(), 2),
            stats!(TOLOWER1, self.tolower.single.len(), 2),
            stats!(TOLOWER2, self.tolower.range.len(), 3),
            stats!(TOUPPER1, self.toupper.single.len(), 2),
            stats!(TOUPPER2, self.toupper.range.len(), 3),
            stats!(TOLOWER_FULL, self.tolower_full.len(), LOWER_FULL_WIDTH),
            stats!(TOUPPER_FULL, self.toupper_full.len(), UPPER_FULL_WIDTH),
        ]
    }
}
