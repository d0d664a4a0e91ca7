//! Text exposition of a snapshot.
//!
//! One line per entry, `strichliste_<key> <value>`, values in default `f64`
//! formatting (`4.5`, `3`, `-40`). Non-finite values use the exposition
//! spellings `+Inf`, `-Inf` and `NaN`.

use std::fmt::Write;

use crate::aggregate::AggregatedSnapshot;

pub const METRIC_PREFIX: &str = "strichliste_";

pub fn render(snapshot: &AggregatedSnapshot) -> String {
    let mut out = String::new();
    for (key, value) in snapshot.iter() {
        let _ = write!(out, "{METRIC_PREFIX}{key} ");
        write_value(&mut out, value);
        out.push('\n');
    }
    out
}

fn write_value(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("NaN");
    } else if v == f64::INFINITY {
        out.push_str("+Inf");
    } else if v == f64::NEG_INFINITY {
        out.push_str("-Inf");
    } else {
        let _ = write!(out, "{v}");
    }
}
