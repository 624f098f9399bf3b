use haardsp::batch::{forward_batch, inverse_batch};
use haardsp::{forward_transform, DwtError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
/// Each channel of a batch transforms exactly as it would on its own.
fn batch_matches_per_channel() {
    let mut rng = StdRng::seed_from_u64(99);
    let (channels, len) = (6, 128);
    let orig: Vec<f32> = (0..channels * len)
        .map(|_| rng.gen_range(-1.0..1.0))
        .collect();
    let mut data = orig.clone();
    forward_batch(&mut data, len, 4).unwrap();
    for (c, chunk) in orig.chunks_exact(len).enumerate() {
        let mut expected = chunk.to_vec();
        forward_transform(&mut expected, 4);
        assert_eq!(&data[c * len..(c + 1) * len], &expected[..], "channel {}", c);
    }
    inverse_batch(&mut data, len, 4).unwrap();
    for (a, b) in data.iter().zip(orig.iter()) {
        assert!((a - b).abs() < 1e-4);
    }
}

#[test]
/// A ragged batch is rejected without touching the data.
fn ragged_batch_rejected() {
    let mut data = vec![3.0f32; 100];
    assert_eq!(
        inverse_batch(&mut data, 32, 1),
        Err(DwtError::BatchLength { len: 100, channel_len: 32 })
    );
    assert!(data.iter().all(|&v| v == 3.0));
}
