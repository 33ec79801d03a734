/// `base` raised to `exponent`, IEEE-754 semantics (fractional and negative exponents allowed).
pub fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn abs(value: f64) -> f64 {
    value.abs()
}

/// NaN-propagating minimum. On equal arguments the first one wins.
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if b < a {
        b
    } else {
        a
    }
}

/// NaN-propagating maximum. On equal arguments the first one wins.
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if b > a {
        b
    } else {
        a
    }
}
