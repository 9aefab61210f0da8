//! Map a bit stream onto 64-QAM, add channel noise, and soft-demap it.
//!
//! Run with: cargo run --example soft_demod -p qam-core

use qam_core::{IQSample, Modulation, QamOrder, SquareQam};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let qam = SquareQam::<f64>::new(QamOrder::Qam64);
    let fixed = SquareQam::<i8>::new(QamOrder::Qam64);
    let mut rng = StdRng::seed_from_u64(7);

    println!("{} symbol layer demo\n", qam.order());

    // Random bipolar codes, eight symbols worth.
    let codes: Vec<f64> = (0..8 * qam.bits())
        .map(|_| if rng.gen::<bool>() { 1.0 } else { -1.0 })
        .collect();
    let clean = qam.map_block(&codes);

    // Pass through a mild AWGN-ish channel.
    let sigma = 0.3 * qam.amplitude();
    let noisy: Vec<IQSample> = clean
        .iter()
        .map(|s| IQSample::new(s.re + rng.gen_range(-sigma..sigma), s.im + rng.gen_range(-sigma..sigma)))
        .collect();

    // Precision would normally come from a channel noise estimate.
    for precision in [1.0, 16.0] {
        println!("precision = {}", precision);
        for (i, &sample) in noisy.iter().enumerate() {
            let mut metrics = [0i8; 6];
            fixed.soft(&mut metrics, sample, precision, 1);
            let hard: Vec<f64> = codes[i * 6..(i + 1) * 6].to_vec();
            println!("  symbol {}: soft {:>5?}  sent {:?}", i, metrics, hard);
        }
        println!();
    }

    let recovered = qam.hard_block(&noisy);
    let errors = recovered
        .iter()
        .zip(&codes)
        .filter(|(a, b)| a != b)
        .count();
    println!("hard decisions: {} bit errors in {} bits", errors, codes.len());
}
