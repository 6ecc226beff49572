// File: crates/termchart-examples/src/bin/dashboard.rs
// Summary: A tiled dashboard mixing axis scales and overflow policies.

use std::f64::consts::PI;

use termchart_core::{
    Aggregation, AxisScale, ChartOptions, Color, MultiChart, MultiChartOptions, Overflow,
    SeriesConfig, Tile,
};

fn main() {
    let mut chart = MultiChart::new(MultiChartOptions {
        title: "Dashboard chart".to_string(),
        title_boundary: 2,
        title_spacing: 8,
        title_foreground: Color::DarkBlue,
        title_background: Some(Color::Black),
        ..MultiChartOptions::default()
    });

    let waves = chart
        .add_chart(
            Tile { x_offset: 0, y_offset: 0, width: 40, height: 31 },
            ChartOptions {
                title: "overflow: clamp".to_string(),
                ..ChartOptions::default()
            },
        )
        .expect("tile");

    let log = chart
        .add_chart(
            Tile { x_offset: 42, y_offset: 0, width: 60, height: 15 },
            ChartOptions {
                title: "overflow: linearScale (agg: max)".to_string(),
                axis_scale: AxisScale::Log,
                ..ChartOptions::default()
            },
        )
        .expect("tile");

    let inverted = chart
        .add_chart(
            Tile { x_offset: 42, y_offset: 16, width: 60, height: 15 },
            ChartOptions {
                title: "overflow: linearScale (agg: mean)".to_string(),
                axis_scale: AxisScale::LogInverted,
                aggregation: Some(Aggregation::Mean),
                ..ChartOptions::default()
            },
        )
        .expect("tile");

    chart
        .add_series(waves, SeriesConfig::with_color(Color::DarkRed).overflow(Overflow::Clamp))
        .expect("series");
    chart
        .add_series(log, SeriesConfig::with_color(Color::DarkBlue).overflow(Overflow::LinearScale))
        .expect("series");
    chart
        .add_series(inverted, SeriesConfig::with_color(Color::DarkYellow))
        .expect("series");

    for i in 0..2000 {
        let t = i as f64;
        chart.add_entry(waves, 0, (t * PI / 15.0).cos()).expect("entry");
        chart.add_entry(log, 0, (t * PI / 30.0).sin() * 100.0 + 2.0).expect("entry");
        chart.add_entry(inverted, 0, (t * PI / 30.0).cos() * 100.0 + 2.0).expect("entry");
    }

    println!("{}", chart.paint().expect("paint"));
}
