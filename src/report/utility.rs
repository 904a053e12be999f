use std::cmp::Ordering;

/// Divides `sum` by `count`, rounding halves to the nearest even integer.
///
/// Integer-only; `count` must be non-zero.
pub fn round_half_even(sum: u64, count: u64) -> u64 {
    let quotient = sum / count;
    let remainder = sum % count;

    match (remainder * 2).cmp(&count) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient % 2),
    }
}
