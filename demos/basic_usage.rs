//! Basic usage example for haardsp
//!
//! Validates a signal length, runs a multi-level Haar DWT in place, walks the
//! resulting sub-bands and reconstructs the original signal.

use haardsp::subband::{energy, subbands};
use haardsp::HaarPlan;

fn main() {
    println!("=== haardsp Basic Usage Example ===\n");

    let mut signal = vec![4.0f32, 6.0, 10.0, 12.0, 8.0, 6.0, 5.0, 5.0];
    let original = signal.clone();

    // 1. Validate once at the boundary
    println!("1. Plan");
    let plan = HaarPlan::new(signal.len()).expect("length is a power of two");
    println!("   Length {} supports up to level {}", plan.len(), plan.max_level());

    // 2. Forward transform
    println!("2. Forward DWT (level 2)");
    plan.forward(&mut signal, 2).unwrap();
    for (band, range) in subbands(signal.len(), 2) {
        println!("   {:?}: {:?}", band, &signal[range]);
    }
    println!(
        "   Energy before {:.3}, after {:.3}",
        energy(&original),
        energy(&signal)
    );

    // 3. Inverse transform
    println!("3. Inverse DWT (level 2)");
    plan.inverse(&mut signal, 2).unwrap();
    println!("   Reconstructed: {:?}", signal);

    println!("\n=== Example completed successfully! ===");
}
