//! Demonstrates enabling verbose logging for haardsp.
use haardsp::{forward_transform, inverse_transform};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut signal = [4.0f32, 6.0, 10.0, 12.0, 8.0, 6.0, 5.0, 5.0];
    forward_transform(&mut signal, 3);
    inverse_transform(&mut signal, 3);
}
