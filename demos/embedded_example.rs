//! Embedded/MCU example for haardsp
//!
//! Uses only fixed-size arrays and the stack-only entry points: no heap, no
//! scratch buffer, just the signal and a few scalars.

use haardsp::{forward_transform, inverse_transform, mask_words, validate_length};
use haardsp::{forward_transform_with_mask, inverse_transform_with_mask};

const LEN: usize = 64;

fn main() {
    println!("=== haardsp Embedded Example ===\n");

    // 1. Validate the compile-time length once
    let max_level = match validate_length(LEN) {
        Ok(level) => level,
        Err(e) => {
            println!("   invalid length: {}", e);
            return;
        }
    };
    println!("1. Length {} validated, maximum level {}", LEN, max_level);

    // 2. Stack-mask drivers
    let mut samples = [0.0f32; LEN];
    for (i, s) in samples.iter_mut().enumerate() {
        *s = (i % 8) as f32;
    }
    forward_transform(&mut samples, max_level);
    println!("2. Forward DWT completed, coarsest trend = {:.3}", samples[0]);
    inverse_transform(&mut samples, max_level);
    println!("   Inverse DWT completed, samples[7] = {:.3}", samples[7]);

    // 3. Caller-owned mask words, e.g. placed in a dedicated RAM section
    let mut mask = [0u32; mask_words(LEN)];
    forward_transform_with_mask(&mut samples, 3, &mut mask);
    inverse_transform_with_mask(&mut samples, 3, &mut mask);
    println!("3. Explicit-mask round trip completed");

    println!("\n=== Embedded example completed! ===");
}
