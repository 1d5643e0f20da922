//! # dirft - direct-evaluation DFT for Rust
//!
//! A small, `no_std`-friendly Discrete Fourier Transform computed straight
//! from its defining O(n²) summation. The crate is the reference-semantics
//! counterpart to fast FFT libraries: one twiddle factor per (sample, bin)
//! pair, no planner, no caching, no SIMD.
//!
//! ## Contract
//!
//! - Input is an ordered slice of complex samples; output is a freshly
//!   produced sequence of the same length. Input is never mutated.
//! - Forward uses `e^(-2πi·jk/n)`, inverse uses `e^(+2πi·jk/n)`.
//! - The inverse applies **no** `1/n` normalization: `inverse(forward(x))`
//!   equals `n · x`. Scaling is the caller's responsibility.
//! - Empty input yields an empty output; a single sample is returned
//!   unchanged (its only twiddle factor is `1 + 0i`).
//!
//! ## Cargo Features
//!
//! - `std` (default): standard library integration (`std::error::Error`,
//!   thread-count heuristics)
//! - `parallel`: parallel evaluation of the outer bin loop with Rayon
//! - `internal-tests`: property-based test dependencies (proptest, rand)
//! - `verbose-logging`: trace-level logging of transform entry points
//!
//! ## Example
//!
//! ```
//! use dirft::{forward, inverse, Complex64};
//!
//! let x = vec![Complex64::new(1.0, 0.0); 4];
//! let freq = forward(&x).unwrap();
//! assert!((freq[0].re - 4.0).abs() < 1e-12);
//! let back = inverse(&freq).unwrap();
//! // round-trip is scaled by n
//! assert!((back[0].re - 4.0 * x[0].re).abs() < 1e-9);
//! ```

#![no_std]
#[cfg(feature = "std")]
extern crate std;
extern crate alloc;

/// Direct DFT kernel
///
/// The double-loop transform, its direction selector, and the boundary
/// error type.
pub mod dft;

/// Complex arithmetic primitives
///
/// The `Float` abstraction over f32/f64 and the `Complex` value type used
/// by the kernel.
pub mod num;

pub use dft::{dft_into, dft_vec, forward, inverse, twiddle, DftError, Direction};
pub use num::{Complex, Complex32, Complex64, Float};

#[cfg(feature = "parallel")]
pub use dft::{dft_into_parallel, set_parallel_dft_threshold};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_dft_idft_roundtrip_scaled_by_n() {
        let data: Vec<Complex32> = (0..8)
            .map(|i| Complex32::new(i as f32 - 3.0, 0.5 * i as f32))
            .collect();
        let freq = forward(&data).unwrap();
        let back = inverse(&freq).unwrap();
        let n = data.len() as f32;
        for (a, b) in back.iter().zip(data.iter()) {
            assert!((a.re - n * b.re).abs() < 1e-3, "re: {} vs {}", a.re, n * b.re);
            assert!((a.im - n * b.im).abs() < 1e-3, "im: {} vs {}", a.im, n * b.im);
        }
    }

    #[test]
    fn test_dft_cosine_wave_peaks() {
        // DFT of a cosine should peak at bins 1 and n-1
        let n = 8;
        let freq = 1.0;
        let data: Vec<Complex32> = (0..n)
            .map(|i| {
                Complex32::new(
                    (2.0 * core::f32::consts::PI * freq * (i as f32) / n as f32).cos(),
                    0.0,
                )
            })
            .collect();
        let out = forward(&data).unwrap();
        let mags: Vec<f32> = out
            .iter()
            .map(|c| (c.re * c.re + c.im * c.im))
            .collect();
        assert!(mags[1] > 3.0 && mags[n - 1] > 3.0);
        assert!(mags[0] < 1e-6 && mags[2] < 1e-6);
    }

    #[test]
    fn test_real_input_conjugate_symmetry() {
        let data: Vec<Complex64> = (0..6)
            .map(|i| Complex64::new((i as f64).sin() + 0.25 * i as f64, 0.0))
            .collect();
        let out = forward(&data).unwrap();
        let n = data.len();
        for k in 1..n {
            let a = out[k];
            let b = out[n - k].conj();
            assert!((a.re - b.re).abs() < 1e-9, "bin {}: {} vs {}", k, a.re, b.re);
            assert!((a.im - b.im).abs() < 1e-9, "bin {}: {} vs {}", k, a.im, b.im);
        }
    }

    #[test]
    fn test_linearity() {
        let a: Vec<Complex64> = (0..5).map(|i| Complex64::new(i as f64, -1.0)).collect();
        let b: Vec<Complex64> = (0..5)
            .map(|i| Complex64::new(0.5, i as f64 * 0.25))
            .collect();
        let sum: Vec<Complex64> = a.iter().zip(b.iter()).map(|(&x, &y)| x.add(y)).collect();
        let fa = forward(&a).unwrap();
        let fb = forward(&b).unwrap();
        let fsum = forward(&sum).unwrap();
        for k in 0..5 {
            let lhs = fa[k].add(fb[k]);
            assert!((lhs.re - fsum[k].re).abs() < 1e-9);
            assert!((lhs.im - fsum[k].im).abs() < 1e-9);
        }
    }

    #[test]
    fn test_repeated_calls_bit_identical() {
        let data: Vec<Complex64> = (0..7)
            .map(|i| Complex64::new(1.0 / (i as f64 + 1.0), i as f64))
            .collect();
        let first = forward(&data).unwrap();
        for _ in 0..3 {
            assert_eq!(forward(&data).unwrap(), first);
        }
    }
}
