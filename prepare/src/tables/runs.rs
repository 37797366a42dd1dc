use super::Run;

/// непрерывный диапазон букв [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaRun
{
    pub start: u32,
    pub end: u32,
}

impl AlphaRun
{
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.start <= code && code <= self.end
    }
}

impl Run for AlphaRun
{
    #[inline]
    fn is_single(&self) -> bool
    {
        self.start == self.end
    }
}

/// собираем упорядоченный список кодпоинтов в максимальные непрерывные диапазоны
pub fn alpha_runs(codes: &[u32]) -> Vec<AlphaRun>
{
    let mut runs = vec![];
    let mut current: Option<AlphaRun> = None;

    for &code in codes {
        if let Some(run) = current.as_mut() {
            assert!(
                code > run.end,
                "кодпоинты должны идти по возрастанию: U+{:04X} после U+{:04X}",
                code,
                run.end
            );

            if code == run.end + 1 {
                run.end = code;
                continue;
            }

            runs.push(*run);
        }

        current = Some(AlphaRun { start: code, end: code });
    }

    runs.extend(current);

    runs
}
