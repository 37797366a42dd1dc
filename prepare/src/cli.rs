use std::path::{Path, PathBuf};

use clap::Parser;
use unicode_casing_prepare::output::OutputOptions;
use unicode_casing_source::ExtractOptions;

/// генерация таблиц букв и регистра из UnicodeData.txt и SpecialCasing.txt
#[derive(Debug, Parser)]
#[command(name = "genucd", version)]
pub struct Args
{
    /// путь к UnicodeData.txt
    pub unicode_data: PathBuf,

    /// путь к SpecialCasing.txt
    pub special_casing: PathBuf,

    /// записать таблицы в файл вместо stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// тип элементов массивов
    #[arg(long, default_value = "Rune")]
    pub rune_type: String,

    /// разворачивать диапазоны <..., First> / <..., Last> из UnicodeData.txt
    #[arg(long)]
    pub expand_ranges: bool,

    /// только кодпоинты базовой многоязычной плоскости (до U+FFFF)
    #[arg(long)]
    pub bmp_only: bool,

    /// без журнала
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Args
{
    pub fn extract_options(&self) -> ExtractOptions
    {
        ExtractOptions {
            expand_ranges: self.expand_ranges,
            bmp_only: self.bmp_only,
        }
    }

    pub fn output_options(&self) -> OutputOptions
    {
        OutputOptions {
            rune_type: self.rune_type.clone(),
            sources: vec![file_name(&self.unicode_data), file_name(&self.special_casing)],
        }
    }
}

/// название файла без каталога
fn file_name(path: &Path) -> String
{
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn positional_paths()
    {
        let args = Args::try_parse_from(["genucd", "ucd/UnicodeData.txt", "ucd/SpecialCasing.txt"]).unwrap();

        assert_eq!(args.unicode_data, PathBuf::from("ucd/UnicodeData.txt"));
        assert_eq!(args.output, None);
        assert_eq!(args.rune_type, "Rune");
        assert!(!args.extract_options().expand_ranges);
        assert!(!args.extract_options().bmp_only);
        assert_eq!(
            args.output_options().sources,
            vec!["UnicodeData.txt".to_owned(), "SpecialCasing.txt".to_owned()]
        );
    }

    #[test]
    fn options()
    {
        let args = Args::try_parse_from([
            "genucd",
            "UnicodeData.txt",
            "SpecialCasing.txt",
            "-o",
            "utfdata.h",
            "--rune-type",
            "int",
            "--expand-ranges",
            "--bmp-only",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.output, Some(PathBuf::from("utfdata.h")));
        assert_eq!(args.output_options().rune_type, "int");
        assert!(args.extract_options().expand_ranges);
        assert!(args.extract_options().bmp_only);
        assert!(args.quiet);
    }

    #[test]
    fn both_datasets_required()
    {
        assert!(Args::try_parse_from(["genucd", "UnicodeData.txt"]).is_err());
    }
}
