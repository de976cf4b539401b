// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CPU and memory stress kernels
//!
//! Both kernels are single-threaded so timings compare across machines with
//! different core counts.

use std::hint::black_box;
use std::time::Instant;

use super::round_to;

/// Count primes in `2..limit` by trial division up to √n.
pub fn count_primes(limit: u64) -> u64 {
    (2..limit).filter(|&n| is_prime(n)).count() as u64
}

fn is_prime(n: u64) -> bool {
    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Wall-clock seconds to count the primes below `limit`, rounded to 4 decimals.
pub fn cpu_stress(limit: u64) -> f64 {
    let start = Instant::now();
    black_box(count_primes(black_box(limit)));
    round_to(start.elapsed().as_secs_f64(), 4)
}

/// Wall-clock seconds to allocate `size` integers, transform each once, and
/// free them. Sequential bandwidth, not random-access latency.
pub fn memory_stress(size: usize) -> f64 {
    let start = Instant::now();

    let data: Vec<u64> = (0..black_box(size) as u64).collect();
    let doubled: Vec<u64> = data.into_iter().map(|x| x.wrapping_mul(2)).collect();
    black_box(&doubled);
    drop(doubled);

    round_to(start.elapsed().as_secs_f64(), 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_primes_small_bounds() {
        assert_eq!(count_primes(0), 0);
        assert_eq!(count_primes(2), 0);
        assert_eq!(count_primes(3), 1);
        assert_eq!(count_primes(10), 4);
        assert_eq!(count_primes(100), 25);
    }

    #[test]
    fn test_count_primes_excludes_limit() {
        // 97 is prime but the bound is exclusive
        assert_eq!(count_primes(97), 24);
        assert_eq!(count_primes(98), 25);
    }

    #[test]
    fn test_count_primes_ten_thousand() {
        assert_eq!(count_primes(10_000), 1229);
    }

    #[test]
    fn test_is_prime_squares() {
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(is_prime(113));
    }

    #[test]
    fn test_cpu_stress_returns_rounded_seconds() {
        let secs = cpu_stress(5_000);
        assert!(secs >= 0.0);
        assert!((secs * 10_000.0 - (secs * 10_000.0).round()).abs() < 1e-6);
    }

    #[test]
    fn test_memory_stress_runs() {
        let secs = memory_stress(10_000);
        assert!(secs >= 0.0);
        assert!(secs < 5.0);
    }

    #[test]
    fn test_memory_stress_empty() {
        assert!(memory_stress(0) >= 0.0);
    }
}
