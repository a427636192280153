//! Math helpers

/// Larger of two values
#[must_use]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Classic fizz buzz rendering of a number
#[must_use]
pub fn fizz_buzz(n: i64) -> String {
    if n % 3 == 0 && n % 5 == 0 {
        return "FizzBuzz".to_string();
    }
    if n % 3 == 0 {
        return "Fizz".to_string();
    }
    if n % 5 == 0 {
        return "Buzz".to_string();
    }
    n.to_string()
}

/// Arithmetic mean of a slice
///
/// Returns `None` for an empty slice; absence is represented explicitly
/// rather than with a NaN sentinel.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}
