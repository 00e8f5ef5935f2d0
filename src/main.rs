use anyhow::Context;
use clap::Parser;
use objtrace::processors::{load_trace, output_paths_for, process_records};
use objtrace::utils::Logger;
use objtrace::{log, log_error, AnalysisConfig, Cli, SkipReason};
use std::path::Path;
use std::process::ExitCode;

fn run(input: &Path, config: &AnalysisConfig) -> anyhow::Result<()> {
    log!("Processing file: {}", input.display());

    // 파싱이 끝나기 전에는 출력 디렉토리를 건드리지 않음
    let records = load_trace(input, config)
        .with_context(|| format!("failed to load trace {}", input.display()))?;

    let paths = output_paths_for(input, config);
    Logger::init(&paths.log_file());

    let outcome = process_records(input, records, config)
        .with_context(|| format!("failed to write results to {}", paths.dir().display()))?;

    for (kind, reason) in outcome.report.skipped() {
        match reason {
            SkipReason::InsufficientSamples { count, threshold } => log!(
                "Skipped {}: {} samples, need more than {}",
                kind,
                count,
                threshold
            ),
            SkipReason::Degenerate { count } => {
                log!("Skipped {}: all {} samples are zero", kind, count)
            }
        }
    }

    let written = outcome.report.written().count();
    if written == 0 {
        log!("File: {} had too few usable samples, no CDF saved.", input.display());
    } else {
        log!("File: {} saved ({} CDF files).", input.display(), written);
    }

    Ok(())
}

fn main() -> ExitCode {
    let (input, config) = Cli::parse().into_parts();

    let result = run(&input, &config);
    if let Err(e) = Logger::flush() {
        eprintln!("로그 파일 flush 실패: {e}");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
