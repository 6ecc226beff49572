// File: crates/termchart-core/src/text.rs
// Summary: Number formatting helpers for axis labels.

/// Fixed-point formatting with trailing zeros trimmed.
///
/// `fixed_trimmed(1.5, 2)` is `"1.5"`, `fixed_trimmed(2.0, 2)` is `"2"`.
/// A bare trailing point is trimmed as well.
pub fn fixed_trimmed(value: f64, max_fraction: usize) -> String {
    let label = format!("{value:.max_fraction$}");
    let Some(point) = label.find('.') else {
        return label;
    };

    let bytes = label.as_bytes();
    let mut trim = label.len();
    while trim > point {
        if bytes[trim - 1] != b'0' {
            break;
        }
        trim -= 1;
    }
    if trim > 0 && bytes[trim - 1] == b'.' {
        trim -= 1;
    }

    label[..trim].to_string()
}

/// Width of the widest fixed-point label among `values`, ignoring sign.
pub fn label_width(values: &[f64], max_fraction: usize) -> usize {
    values
        .iter()
        .map(|v| format!("{:.max_fraction$}", v.abs()).len())
        .max()
        .unwrap_or(0)
}
