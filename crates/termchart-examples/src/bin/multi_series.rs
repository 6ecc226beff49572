// File: crates/termchart-examples/src/bin/multi_series.rs
// Summary: Three series sharing one chart, drawn in creation order.

use termchart_core::{
    Aggregation, Align, AxisScale, Chart, ChartOptions, Color, Overflow, SeriesConfig,
};

fn main() {
    let options = ChartOptions {
        show_axis: true,
        title: "Multi-Series Demo".to_string(),
        title_position: Align::TOP,
        axis_scale: AxisScale::Linear,
        aggregation: Some(Aggregation::Mean),
        ..ChartOptions::default()
    };
    let mut chart = Chart::new(80, 20, options).expect("valid dimensions");

    let overflow = Overflow::LinearScale;
    let red = chart.add_series(SeriesConfig::with_color(Color::DarkRed).overflow(overflow));
    let green = chart.add_series(SeriesConfig::with_color(Color::DarkGreen).overflow(overflow));
    let cyan = chart.add_series(SeriesConfig::with_color(Color::DarkCyan).overflow(overflow));

    let f1 = |x: f64| x.sin() * (-0.1 * x).exp();
    let f2 = |x: f64| 0.8 * x.sin() + 0.6 * (2.0 * x).sin() + 0.4 * (3.0 * x).sin();
    let f3 = |x: f64| x.sin() * (2.0 * x).cos() + x.cos() * (2.0 * x).sin();

    let mut x = -2.0;
    while x <= 2.0 {
        chart.add_entry(red, f1(x)).expect("known series");
        chart.add_entry(green, f2(x)).expect("known series");
        chart.add_entry(cyan, f3(x)).expect("known series");
        x += 0.03;
    }

    println!("{}", chart.paint().expect("paint"));
}
