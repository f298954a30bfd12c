//! End-to-end pipeline tests against the real filesystem.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use dltrend_core::adapters::{FixedClock, FsWritePort};
use dltrend_core::pipeline::{run_render, run_summary, write_chart};
use dltrend_core::settings::RenderSettings;
use dltrend_core::AxisPadding;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 2, 1).expect("date"))
}

#[test]
fn summary_of_historical_data() {
    let summary = run_summary(&AxisPadding::default(), &clock()).expect("summary");

    assert_eq!(summary.rows.len(), 31);
    assert_eq!(summary.totals.total_downloads, 8141);
    assert_eq!(summary.totals.releases, 30);
    assert_eq!(summary.totals.majors, 8);

    let last = summary.rows.last().expect("sentinel row");
    assert_eq!(last.label, "unreleased");
    assert_eq!(last.cumulative_total, 8141);
}

#[test]
fn summary_is_stable_across_runs() {
    let first = run_summary(&AxisPadding::default(), &clock()).expect("first");
    let second = run_summary(&AxisPadding::default(), &clock()).expect("second");
    assert_eq!(first, second);
}

#[test]
#[ignore = "rasterises text; needs a system sans-serif font"]
fn render_writes_png_into_new_directory() {
    let temp = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8");
    let out = root.join("miscellaneous").join("cumulative_downloads_trend.png");

    let settings = RenderSettings {
        out_path: out.clone(),
        ..RenderSettings::default()
    };
    let outcome = run_render(&settings, &clock()).expect("render");
    write_chart(&outcome, &settings.out_path, &FsWritePort).expect("write");

    let bytes = std::fs::read(&out).expect("read chart");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    // A second run overwrites in place.
    write_chart(&outcome, &settings.out_path, &FsWritePort).expect("rewrite");
    assert_eq!(std::fs::read(&out).expect("reread"), bytes);
}
