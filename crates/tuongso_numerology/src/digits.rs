//! Base-10 digit arithmetic.

/// Sum of the decimal digits of `n`.
///
/// `digit_sum(0) == 0`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit by repeated digit summing.
///
/// For `n >= 1` the result is in `[1, 9]`. Zero is a fixed point and
/// returns 0; no valid birth date reaches it.
pub const fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}
