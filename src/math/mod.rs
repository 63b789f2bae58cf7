// src/math/mod.rs
// Pure numeric kernel. No I/O, no config - callers enforce size caps.

use num_bigint::BigUint;

/// First `n` terms of the Fibonacci sequence, starting `0, 1, 1, 2, ...`.
///
/// Terms grow past any fixed-width integer well before the request cap
/// (fib(187) already exceeds u128), so the sequence is built in `BigUint`.
pub fn fibonacci(n: usize) -> Vec<BigUint> {
    if n == 0 {
        return Vec::new();
    }

    let mut series = vec![BigUint::from(0u8)];
    if n == 1 {
        return series;
    }

    series.push(BigUint::from(1u8));
    for i in 2..n {
        let next = &series[i - 1] + &series[i - 2];
        series.push(next);
    }
    series
}

/// Trial division by odd divisors up to sqrt(n).
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i <= n / i avoids the i * i overflow near i64::MAX
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Ordered sub-sequence of primes, preserving duplicates.
pub fn filter_primes(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|&v| is_prime(v)).collect()
}

fn ugcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Euclidean GCD on absolute values; `gcd(a, 0) == |a|`.
pub fn gcd(a: i64, b: i64) -> u64 {
    ugcd(a.unsigned_abs() as u128, b.unsigned_abs() as u128) as u64
}

/// HCF of a list as a left fold of `gcd`. Empty list yields 0.
pub fn hcf(values: &[i64]) -> u64 {
    values
        .iter()
        .fold(0u128, |acc, &v| ugcd(acc, v.unsigned_abs() as u128)) as u64
}

/// LCM of two values; 0 if either operand is 0. `None` on overflow.
pub fn lcm_pair(a: i64, b: i64) -> Option<u64> {
    lcm_pair_wide(a.unsigned_abs() as u128, b.unsigned_abs() as u128)
        .and_then(|v| u64::try_from(v).ok())
}

fn lcm_pair_wide(a: u128, b: u128) -> Option<u128> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    // Divide before multiplying to keep intermediates as small as possible.
    (a / ugcd(a, b)).checked_mul(b)
}

/// LCM of a list as a left fold of `lcm_pair`.
///
/// The accumulator runs in u128; a hundred positive i64s can still overflow
/// that, and the result must stay JSON-representable, so anything past
/// u64::MAX reports as `None` instead of wrapping.
pub fn lcm(values: &[i64]) -> Option<u64> {
    let Some((&first, rest)) = values.split_first() else {
        return Some(0);
    };
    let mut acc = first.unsigned_abs() as u128;
    for &v in rest {
        acc = lcm_pair_wide(acc, v.unsigned_abs() as u128)?;
    }
    u64::try_from(acc).ok()
}
