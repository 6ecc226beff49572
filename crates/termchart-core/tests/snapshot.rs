// File: crates/termchart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Paints a deterministic chart to its ANSI text form.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares bytes for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use termchart_core::{Chart, ChartOptions, Color, MultiChart, MultiChartOptions, SeriesConfig, Tile};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn write_or_compare(name: &str, text: &str) {
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join(name);

    if bless_mode() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), text.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(
            text,
            want,
            "painted output differs from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!(
            "[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.",
            snap_path.display()
        );
        // Skip without failing on first run
    }
}

#[test]
fn golden_basic_chart() {
    let mut chart = Chart::new(60, 12, ChartOptions::default()).expect("chart");
    let id = chart.add_series(SeriesConfig::with_color(Color::DarkCyan));
    for i in 0..48 {
        let t = i as f64 * 0.3;
        chart.add_entry(id, t.sin() * 4.0 + 5.0).expect("entry");
    }

    write_or_compare("basic_chart.txt", &chart.paint().expect("paint"));
}

#[test]
fn golden_dashboard() {
    let mut multi = MultiChart::new(MultiChartOptions {
        title: "dashboard".to_string(),
        ..MultiChartOptions::default()
    });
    let left = multi
        .add_chart(
            Tile { x_offset: 0, y_offset: 0, width: 30, height: 10 },
            ChartOptions::default(),
        )
        .expect("tile");
    let right = multi
        .add_chart(
            Tile { x_offset: 32, y_offset: 0, width: 30, height: 10 },
            ChartOptions::default(),
        )
        .expect("tile");

    let s = multi.add_series(left, SeriesConfig::with_color(Color::DarkGreen)).expect("series");
    for i in 0..24 {
        multi.add_entry(left, s, (i % 7) as f64).expect("entry");
    }
    let s = multi.add_series(right, SeriesConfig::with_color(Color::DarkYellow)).expect("series");
    for i in 0..24 {
        multi.add_entry(right, s, ((i * i) % 11) as f64).expect("entry");
    }

    write_or_compare("dashboard.txt", &multi.paint().expect("paint"));
}
