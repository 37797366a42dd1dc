mod cli;

use std::fs::File;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use unicode_casing_prepare::output;
use unicode_casing_prepare::tables::UcdTables;
use unicode_casing_prepare::PrepareError;
use unicode_casing_source::CasingData;

use crate::cli::Args;

fn main() -> ExitCode
{
    let args = Args::parse();

    init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// журнал - в stderr, stdout занят таблицами
fn init_tracing(args: &Args)
{
    let filter = match args.quiet {
        true => tracing_subscriber::EnvFilter::new("off"),
        false => tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), PrepareError>
{
    tracing::info!(
        unicode_data = %args.unicode_data.display(),
        special_casing = %args.special_casing.display(),
        "генерация таблиц"
    );

    let data = CasingData::from_files(&args.unicode_data, &args.special_casing, args.extract_options())?;
    let tables = UcdTables::prepare(data)?;
    let options = args.output_options();

    // файл создаётся только после того, как таблицы готовы
    match &args.output {
        Some(path) => output::write(&tables, &options, &mut File::create(path)?)?,
        None => output::write(&tables, &options, &mut io::stdout().lock())?,
    }

    Ok(())
}
