use objtrace::{
    run_analysis, AnalysisConfig, DistributionKind, LoaderKind, SkipReason, TraceError,
    WriteOutcome,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const PUT_GET_TRACE: &str = "1 REST.PUT.OBJECT A
10 REST.GET.OBJECT A
20 REST.PUT.OBJECT A
25 REST.GET.OBJECT A
";

fn write_trace(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn config_for(output_dir: PathBuf, min_samples: usize) -> AnalysisConfig {
    AnalysisConfig {
        output_dir,
        min_samples,
        ..Default::default()
    }
}

fn read_rows(path: &Path) -> Vec<(u64, f64)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let (x, y) = line.split_once(',').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

// 여러 키와 OTHER 연산이 섞인 트레이스
fn mixed_trace() -> String {
    let mut lines = Vec::new();
    for i in 0..60u64 {
        let key = format!("obj{}", i % 5);
        let op = match i % 4 {
            0 => "REST.PUT.OBJECT",
            3 => "REST.HEAD.OBJECT",
            _ => "REST.GET.OBJECT",
        };
        lines.push(format!("{} {} {}", 100 + i * 3, op, key));
    }
    lines.join("\n") + "\n"
}

#[test]
fn test_put_get_scenario_writes_raw_cdf() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(dir.path(), "IBMObjectStoreTrace000Part0", PUT_GET_TRACE);
    let out = dir.path().join("data");

    let outcome = run_analysis(&input, &config_for(out.clone(), 1)).unwrap();

    assert_eq!(outcome.analysis.read_after_write, vec![9, 5]);
    assert_eq!(outcome.paths.identifier(), "000Part0");

    let raw_path = out.join("000Part0_raw_cdf.csv");
    let rows = read_rows(&raw_path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, 5);
    assert!((rows[0].1 - 5.0 / 14.0).abs() < 1e-12);
    assert_eq!(rows[1], (9, 1.0));

    // read/write IAT는 샘플이 1개뿐이라 저장되지 않음
    assert!(!out.join("000Part0_read_iat_cdf.csv").exists());
    assert!(!out.join("000Part0_write_iat_cdf.csv").exists());
}

#[test]
fn test_default_threshold_skips_small_trace() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(dir.path(), "IBMObjectStoreTrace001Part0", PUT_GET_TRACE);
    let out = dir.path().join("data");

    let outcome = run_analysis(&input, &config_for(out.clone(), 5)).unwrap();

    assert_eq!(outcome.report.written().count(), 0);
    assert_eq!(
        outcome.report.outcome(DistributionKind::ReadAfterWrite),
        Some(&WriteOutcome::Skipped(SkipReason::InsufficientSamples {
            count: 2,
            threshold: 5
        }))
    );
    // 디렉토리는 생성되지만 CDF 파일은 없음
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_malformed_trace_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(
        dir.path(),
        "IBMObjectStoreTrace002Part0",
        "1 REST.PUT.OBJECT A\nnot-a-number REST.GET.OBJECT A\n",
    );
    let out = dir.path().join("data");

    let err = run_analysis(&input, &config_for(out.clone(), 0)).unwrap_err();

    assert!(matches!(err, TraceError::MalformedLine { line: 2, .. }));
    assert!(!out.exists());
}

#[test]
fn test_all_distributions_written_for_mixed_trace() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(dir.path(), "access.log", &mixed_trace());
    let out = dir.path().join("data");

    let outcome = run_analysis(&input, &config_for(out.clone(), 5)).unwrap();

    assert_eq!(outcome.report.written().count(), 3);
    for kind in DistributionKind::ALL {
        let path = out.join(format!("access{}.csv", kind.suffix()));
        let rows = read_rows(&path);
        assert_eq!(rows.len(), outcome.analysis.samples(kind).len());
        assert!(rows.windows(2).all(|w| w[0].0 <= w[1].0 && w[0].1 <= w[1].1));
        assert!((rows[rows.len() - 1].1 - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_highperf_loader_gives_same_result() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(dir.path(), "IBMObjectStoreTrace003Part0", &mixed_trace());

    let buffered = run_analysis(&input, &config_for(dir.path().join("a"), 5)).unwrap();
    let mmap_config = AnalysisConfig {
        loader: LoaderKind::Mmap,
        ..config_for(dir.path().join("b"), 5)
    };
    let mmap = run_analysis(&input, &mmap_config).unwrap();

    assert_eq!(buffered.analysis, mmap.analysis);
    for kind in DistributionKind::ALL {
        let a = fs::read_to_string(buffered.paths.cdf_csv(kind)).unwrap();
        let b = fs::read_to_string(mmap.paths.cdf_csv(kind)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_summary_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(dir.path(), "IBMObjectStoreTrace004Part0", &mixed_trace());
    let config = AnalysisConfig {
        write_summary: true,
        ..config_for(dir.path().join("data"), 5)
    };

    let outcome = run_analysis(&input, &config).unwrap();
    let summary_path = outcome.summary_path.expect("summary path");
    assert_eq!(summary_path, dir.path().join("data/004Part0_summary.json"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(summary_path).unwrap()).unwrap();
    assert_eq!(value["counts"]["records"], 60);
    assert_eq!(value["counts"]["others"], 15);
    assert_eq!(value["report"]["outcomes"].as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_summary_write_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_trace(dir.path(), "IBMObjectStoreTrace005Part0", &mixed_trace());
    let out = dir.path().join("data");
    // summary 경로를 디렉토리로 막아둠
    fs::create_dir_all(out.join("005Part0_summary.json")).unwrap();
    let config = AnalysisConfig {
        write_summary: true,
        ..config_for(out, 5)
    };

    let err = run_analysis(&input, &config).unwrap_err();
    assert!(matches!(err, TraceError::Io { .. }));
}

#[test]
fn test_highperf_on_gzip_falls_back_to_buffered() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("IBMObjectStoreTrace006Part0.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&input).unwrap(), Compression::default());
    encoder.write_all(mixed_trace().as_bytes()).unwrap();
    encoder.finish().unwrap();

    let buffered = run_analysis(&input, &config_for(dir.path().join("a"), 5)).unwrap();
    let mmap_config = AnalysisConfig {
        loader: LoaderKind::Mmap,
        ..config_for(dir.path().join("b"), 5)
    };
    let mmap = run_analysis(&input, &mmap_config).unwrap();

    assert_eq!(mmap.analysis.counts.records, 60);
    assert_eq!(buffered.analysis, mmap.analysis);
    assert_eq!(mmap.paths.identifier(), "006Part0");
    assert_eq!(mmap.report.written().count(), 3);
}
