use dirft::{twiddle, Complex32, Complex64, Direction};

// The algebra the kernel relies on: (a+bi)(c+di) = (ac-bd) + (ad+bc)i.
#[test]
fn multiplication_formula() {
    let a = Complex64::new(2.0, 3.0);
    let b = Complex64::new(-1.0, 4.0);
    let p = a * b;
    assert_eq!(p.re, 2.0 * -1.0 - 3.0 * 4.0);
    assert_eq!(p.im, 2.0 * 4.0 + 3.0 * -1.0);
}

#[test]
fn addition_is_componentwise() {
    let a = Complex32::new(1.5, -2.5);
    let b = Complex32::new(0.25, 4.0);
    assert_eq!(a + b, Complex32::new(1.75, 1.5));
}

// i * i = -1 through the same multiply the kernel uses.
#[test]
fn imaginary_unit_squares_to_minus_one() {
    let i = Complex64::new(0.0, 1.0);
    let sq = i.mul(i);
    assert_eq!(sq, Complex64::new(-1.0, 0.0));
}

// NaN and Inf pass through arithmetic unchecked.
#[test]
fn non_finite_values_propagate() {
    let a = Complex64::new(f64::NAN, 1.0);
    let b = Complex64::new(1.0, 0.0);
    assert!((a * b).re.is_nan());
    let c = Complex64::new(f64::INFINITY, 0.0);
    assert!((c + b).re.is_infinite());
}

// Whole-turn twiddles are 1 up to rounding; opposite directions conjugate.
#[test]
fn twiddle_conventions() {
    for dir in [Direction::Forward, Direction::Inverse] {
        let t = twiddle(0.0f64, dir);
        assert_eq!(t, Complex64::new(1.0, 0.0));
        let t = twiddle(1.0f64, dir);
        assert!((t.re - 1.0).abs() < 1e-12);
        assert!(t.im.abs() < 1e-12);
    }
    let f = twiddle(0.125f64, Direction::Forward);
    let i = twiddle(0.125f64, Direction::Inverse);
    assert!((f.re - i.re).abs() < 1e-15);
    assert!((f.im + i.im).abs() < 1e-15);
}

// Twiddle components are bounded in [-1, 1] for arbitrary exponents.
#[test]
fn twiddle_stays_on_unit_circle() {
    for k in 0..32 {
        let t = twiddle(k as f64 / 7.0, Direction::Forward);
        assert!(t.re.abs() <= 1.0 + 1e-15);
        assert!(t.im.abs() <= 1.0 + 1e-15);
        let mag = t.re * t.re + t.im * t.im;
        assert!((mag - 1.0).abs() < 1e-12);
    }
}
