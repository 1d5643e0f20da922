//! Demonstrates enabling verbose logging for dirft.
use dirft::{forward, Complex32};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let data: Vec<Complex32> = (0..8).map(|i| Complex32::new(i as f32, 0.0)).collect();
    let freq = forward(&data).unwrap();
    println!("computed {} bins", freq.len());
}
