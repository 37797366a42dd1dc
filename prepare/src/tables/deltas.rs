use super::Run;

/// диапазон [src_start, src_end], каждый кодпоинт которого отображается в src + delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleMapRun
{
    pub src_start: u32,
    pub src_end: u32,
    pub delta: i64,
}

impl SimpleMapRun
{
    /// результат преобразования для кодпоинта из диапазона
    #[inline]
    pub fn apply(&self, code: u32) -> i64
    {
        i64::from(code) + self.delta
    }
}

impl Run for SimpleMapRun
{
    #[inline]
    fn is_single(&self) -> bool
    {
        self.src_start == self.src_end
    }
}

/// собираем упорядоченный список пар (кодпоинт, результат) в диапазоны с общим смещением:
/// диапазон продолжается, только если непрерывны и исходные кодпоинты, и результаты
pub fn map_runs(pairs: &[(u32, u32)]) -> Vec<SimpleMapRun>
{
    let mut runs = vec![];
    let mut current: Option<SimpleMapRun> = None;

    for &(src, mapped) in pairs {
        if let Some(run) = current.as_mut() {
            assert!(
                src > run.src_end,
                "кодпоинты должны идти по возрастанию: U+{:04X} после U+{:04X}",
                src,
                run.src_end
            );

            if src == run.src_end + 1 && run.apply(src) == i64::from(mapped) {
                run.src_end = src;
                continue;
            }

            runs.push(*run);
        }

        current = Some(SimpleMapRun {
            src_start: src,
            src_end: src,
            delta: i64::from(mapped) - i64::from(src),
        });
    }

    runs.extend(current);

    runs
}
