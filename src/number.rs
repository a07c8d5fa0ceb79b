//! Canonical number text for token literals and the debug printer.
//!
//! Integral values always show one fractional digit (`45` -> `45.0`),
//! anything else is printed as the shortest text that reads back to the
//! same `f64`. Runtime display uses `f64`'s own `Display`, which drops the
//! fraction of integral values instead.

pub fn format_literal(v: f64) -> String {
    if is_integral(v) {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

fn is_integral(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}
