//! Closed-form sums of repeated-digit IDs
//!
//! An ID made of a `d`-digit block `k` written `r` times equals `k * m`, where
//! `m = 1 + 10^d + 10^2d + ... + 10^(r-1)d`. For a fixed width the invalid IDs
//! are therefore the multiples of `m` whose cofactor has exactly `d` digits,
//! and their sum over a range is an arithmetic series.
//!
//! All arithmetic is done in `u128`: the widest multiplier for a `u64` bound
//! is about `10^19`, and series sums exceed `u64` long before that.

use super::IdRange;
use crate::config::RepeatRule;

/// Sum `k * multiplier` for `k` in `[low, high]` clipped to the cofactors that
/// keep the product inside `[start, end]`.
fn multiples_sum(start: u128, end: u128, multiplier: u128, low: u128, high: u128) -> u128 {
    let k_start = low.max(start.div_ceil(multiplier));
    let k_end = high.min(end / multiplier);
    if k_end < k_start {
        return 0;
    }
    // Both products are even, so the halving is exact.
    multiplier * ((k_end * (k_end + 1) - (k_start - 1) * k_start) / 2)
}

/// Sum of IDs in `range` that are a digit block repeated exactly twice
pub fn sum_doubled_ids(range: &IdRange) -> u128 {
    let start = u128::from(range.start);
    let end = u128::from(range.end);

    let mut total = 0;
    let mut min_multiple: u128 = 1;
    loop {
        let next_min_multiple = min_multiple * 10;
        let multiplier = next_min_multiple + 1;

        // Smallest doubled ID of this width is already past the range
        if min_multiple * multiplier > end {
            break;
        }

        total += multiples_sum(start, end, multiplier, min_multiple, next_min_multiple - 1);
        min_multiple = next_min_multiple;
    }
    total
}

/// Möbius function for the small arguments used here (at most 20)
fn mobius(mut n: u32) -> i8 {
    let mut result = 1;
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            n /= p;
            if n % p == 0 {
                return 0;
            }
            result = -result;
        }
        p += 1;
    }
    if n > 1 {
        result = -result;
    }
    result
}

/// Sum of IDs in `range` that are a digit block repeated two or more times
///
/// For `n`-digit IDs, let `S_d` be the sum of those built from a `d`-digit
/// block (`d` a proper divisor of `n`). The sets overlap: `S_d ∩ S_e` is
/// `S_gcd(d, e)`. Inclusion-exclusion over the divisor lattice collapses to
/// `sum over d of -μ(n / d) * S_d`, counting each ID exactly once.
pub fn sum_repeated_ids(range: &IdRange) -> u128 {
    let start = u128::from(range.start);
    let end = u128::from(range.end);

    let mut total: u128 = 0;
    let mut width: u32 = 2;
    while 10u128.pow(width - 1) <= end {
        let span = 10u128.pow(width) - 1;
        let mut width_total: i128 = 0;

        for block in (1..width).filter(|block| width % block == 0) {
            let mu = mobius(width / block);
            if mu == 0 {
                continue;
            }
            let base = 10u128.pow(block);
            let multiplier = span / (base - 1);
            let sum = multiples_sum(start, end, multiplier, base / 10, base - 1) as i128;
            width_total -= i128::from(mu) * sum;
        }

        debug_assert!(width_total >= 0);
        total += width_total as u128;
        width += 1;
    }
    total
}

/// Check a single ID by comparing digit strings
///
/// Linear in the digit count; used to cross-check the closed forms.
pub fn is_invalid_id(id: u64, rule: RepeatRule) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    match rule {
        RepeatRule::Twice => len % 2 == 0 && digits[..len / 2] == digits[len / 2..],
        RepeatRule::AtLeastTwice => (1..len)
            .filter(|block| len % block == 0)
            .any(|block| digits[..block].repeat(len / block) == digits),
    }
}
