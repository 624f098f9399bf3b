// Minimal float trait for generic sample buffers (no_std, no external deps)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    /// `√2`, the Haar normalisation constant.
    fn sqrt_2() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn sqrt_2() -> Self {
        core::f32::consts::SQRT_2
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn sqrt_2() -> Self {
        core::f64::consts::SQRT_2
    }
}
