//! Direct-evaluation Discrete Fourier Transform.
//!
//! This module computes the DFT by its defining summation: for each output
//! bin `k`, the weighted sum of all input samples with the twiddle factor
//! `e^(±2πi·jk/n)`. Complexity is Θ(n²) time and Θ(n) output space; there is
//! deliberately no fast algorithm here, no caching, and no planner state.
//!
//! Sign convention: [`Direction::Forward`] uses `e^(-2πi·jk/n)`,
//! [`Direction::Inverse`] uses `e^(+2πi·jk/n)`. The inverse is NOT scaled by
//! `1/n`; applying forward then inverse yields the original sequence times
//! `n`. Normalization is the caller's responsibility.
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::num::{Complex, Float};

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Transform direction, selecting the sign of the twiddle exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `e^(-2πi·jk/n)` weights.
    Forward,
    /// `e^(+2πi·jk/n)` weights, without the `1/n` scale.
    Inverse,
}

impl Direction {
    #[inline(always)]
    fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => -T::one(),
            Direction::Inverse => T::one(),
        }
    }
}

/// Errors that can occur at the transform boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DftError {
    /// Output buffer length differs from input length.
    MismatchedLengths,
    /// The sequence length is not exactly representable in the chosen
    /// float type, so `jk/n` exponents could not be formed reliably.
    UnrepresentableLength,
}

impl core::fmt::Display for DftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DftError::MismatchedLengths => write!(f, "input and output lengths differ"),
            DftError::UnrepresentableLength => {
                write!(f, "sequence length exceeds exact float range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DftError {}

/// Twiddle factor `e^(sign·2πi·exponent)` for a real `exponent`, typically
/// `jk/n`. Bounded in `[-1, 1]` per component; rounding grows with the
/// magnitude of `exponent`, so callers should keep it reduced.
#[inline(always)]
pub fn twiddle<T: Float>(exponent: T, direction: Direction) -> Complex<T> {
    let sign: T = direction.sign();
    Complex::expi(sign * T::from_f32(2.0) * T::pi() * exponent)
}

/// `jk` is kept below `n` by the callers, and `n` itself was checked
/// against `Float::from_usize`, so conversion cannot fail here.
#[inline(always)]
fn exact<T: Float>(jk: usize) -> T {
    match T::from_usize(jk) {
        Some(v) => v,
        None => unreachable!(),
    }
}

/// One output bin: the sum over all samples weighted by the twiddle for
/// `(j·k mod n) / n`. The reduction mod n is exact (`e^(2πi·m) = 1` for
/// integer `m`) and keeps the twiddle argument in `[0, 2π)`.
fn dft_bin<T: Float>(input: &[Complex<T>], k: usize, n_f: T, direction: Direction) -> Complex<T> {
    let n = input.len();
    let mut tot = Complex::zero();
    let mut jk = 0usize; // j*k mod n for the current j
    for &x in input {
        let exponent = exact::<T>(jk) / n_f;
        let tw = twiddle(exponent, direction);
        tot = tot.add(x.mul(tw));
        jk += k;
        if jk >= n {
            jk -= n;
        }
    }
    tot
}

/// Out-of-place direct DFT: fills `output` with the transform of `input`.
///
/// `input` is never mutated; every output slot is freshly written. An empty
/// input succeeds and writes nothing (the guard is explicit so the `jk/n`
/// division is never formed for `n = 0`).
pub fn dft_into<T: Float>(
    input: &[Complex<T>],
    direction: Direction,
    output: &mut [Complex<T>],
) -> Result<(), DftError> {
    let n = input.len();
    if n != output.len() {
        return Err(DftError::MismatchedLengths);
    }
    if n == 0 {
        return Ok(());
    }
    #[cfg(feature = "verbose-logging")]
    log::trace!("dft_into: n={} direction={:?}", n, direction);
    let n_f = T::from_usize(n).ok_or(DftError::UnrepresentableLength)?;
    for (k, out) in output.iter_mut().enumerate() {
        *out = dft_bin(input, k, n_f, direction);
    }
    Ok(())
}

/// Allocating direct DFT: returns a fresh output sequence of the same
/// length as `input`.
pub fn dft_vec<T: Float>(
    input: &[Complex<T>],
    direction: Direction,
) -> Result<Vec<Complex<T>>, DftError> {
    let mut output = vec![Complex::zero(); input.len()];
    dft_into(input, direction, &mut output)?;
    Ok(output)
}

/// Forward DFT, `e^(-2πi·jk/n)` weights.
pub fn forward<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, DftError> {
    dft_vec(input, Direction::Forward)
}

/// Inverse DFT, `e^(+2πi·jk/n)` weights. No `1/n` scale is applied;
/// `inverse(forward(x))` equals `n · x`.
pub fn inverse<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, DftError> {
    dft_vec(input, Direction::Inverse)
}

/// Override for the parallel DFT threshold.
///
/// `0` means no override and the heuristic will be used.
#[cfg(feature = "parallel")]
static PARALLEL_DFT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "parallel")]
/// Set a custom minimum sequence length for parallel evaluation of the
/// outer bin loop. Passing `0` reverts to the built-in heuristic.
pub fn set_parallel_dft_threshold(threshold: usize) {
    PARALLEL_DFT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
fn should_parallelize_dft(n: usize) -> bool {
    let override_thr = PARALLEL_DFT_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return n >= override_thr;
    }
    // Each worker should own a batch of output bins; the O(n) inner loop
    // per bin keeps per-task work well above rayon's scheduling overhead.
    const PER_CORE_BINS: usize = 64;
    #[cfg(feature = "std")]
    {
        n >= PER_CORE_BINS * num_cpus::get().max(1)
    }
    #[cfg(not(feature = "std"))]
    {
        n >= PER_CORE_BINS
    }
}

/// Out-of-place direct DFT with the outer bin loop split across rayon
/// workers. Each bin depends only on the read-only input and its own index,
/// so workers write disjoint output slots with no synchronization. Falls
/// back to the serial loop below the parallel threshold. Results are
/// bit-identical to [`dft_into`].
#[cfg(feature = "parallel")]
pub fn dft_into_parallel<T: Float + Send + Sync>(
    input: &[Complex<T>],
    direction: Direction,
    output: &mut [Complex<T>],
) -> Result<(), DftError> {
    let n = input.len();
    if n != output.len() {
        return Err(DftError::MismatchedLengths);
    }
    if n == 0 {
        return Ok(());
    }
    if !should_parallelize_dft(n) {
        return dft_into(input, direction, output);
    }
    #[cfg(feature = "verbose-logging")]
    log::trace!("dft_into_parallel: n={} direction={:?}", n, direction);
    let n_f = T::from_usize(n).ok_or(DftError::UnrepresentableLength)?;
    output
        .par_iter_mut()
        .enumerate()
        .for_each(|(k, out)| *out = dft_bin(input, k, n_f, direction));
    Ok(())
}
