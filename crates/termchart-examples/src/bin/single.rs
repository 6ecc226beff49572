// File: crates/termchart-examples/src/bin/single.rs
// Summary: A single titled chart with explicit options and series config.

use termchart_core::{
    Aggregation, Align, AxisScale, Chart, ChartOptions, Color, Overflow, SeriesConfig,
};

fn main() {
    let options = ChartOptions {
        show_axis: true,
        horizontal_boundary: 0,
        vertical_boundary: Some(1),
        title: "Sample Line Chart".to_string(),
        title_position: Align::TOP,
        axis_scale: AxisScale::Linear,
        aggregation: Some(Aggregation::Last),
        ..ChartOptions::default()
    };
    let mut chart = Chart::new(80, 20, options).expect("valid dimensions");

    let config = SeriesConfig::with_color(Color::DarkYellow).overflow(Overflow::LinearScale);
    let id = chart.add_series(config);

    let width = chart.width() as f64;
    for i in 0..=chart.width() {
        let x = i as f64;
        chart.add_entry(id, -x * x + width * x).expect("known series");
    }

    println!("{}", chart.paint().expect("paint"));
}
