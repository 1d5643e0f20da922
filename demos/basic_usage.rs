//! Basic usage example for dirft
//!
//! Computes a forward transform, inspects the spectrum, and round-trips
//! back through the inverse (remembering the caller-side 1/n scale).

use dirft::{forward, inverse, Complex64};

fn main() {
    let data = vec![
        Complex64::new(1.0, 0.0),
        Complex64::new(2.0, 0.0),
        Complex64::new(3.0, 0.0),
        Complex64::new(4.0, 0.0),
    ];
    println!(
        "Input:    {:?}",
        data.iter().map(|c| c.re).collect::<Vec<_>>()
    );

    let freq = forward(&data).unwrap();
    println!(
        "Spectrum: {:?}",
        freq.iter()
            .map(|c| format!("{:.2}{:+.2}i", c.re, c.im))
            .collect::<Vec<_>>()
    );

    // The inverse does not divide by n; that is the caller's job.
    let n = data.len() as f64;
    let back: Vec<Complex64> = inverse(&freq)
        .unwrap()
        .into_iter()
        .map(|c| Complex64::new(c.re / n, c.im / n))
        .collect();
    println!(
        "Restored: {:?}",
        back.iter().map(|c| c.re).collect::<Vec<_>>()
    );
}
