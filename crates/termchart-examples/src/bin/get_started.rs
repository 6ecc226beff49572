// File: crates/termchart-examples/src/bin/get_started.rs
// Summary: Minimal example that plots a single function with default options.

use termchart_core::{Chart, ChartOptions, SeriesConfig};

fn main() {
    let mut chart = Chart::new(80, 20, ChartOptions::default()).expect("valid dimensions");
    let id = chart.add_series(SeriesConfig::default());

    let f = |x: f64| x.sin().powi(3) + x.cos().powi(3) - 1.5 * x.sin() * x.cos();

    let mut x = -2.0;
    while x < 2.0 {
        chart.add_entry(id, f(x)).expect("known series");
        x += 0.05;
    }

    println!("{}", chart.paint().expect("paint"));
}
