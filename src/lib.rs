/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
mod autosort;
mod base;
mod complex_fma;
#[cfg(test)]
mod dft;
mod err;
pub mod global;
mod plan;
mod radix8;
mod real;
mod twiddles;
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
mod x86;

pub use err::OktavError;
pub use plan::FftPlan;

use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

impl FftDirection {
    pub fn inverse(self) -> FftDirection {
        match self {
            FftDirection::Forward => FftDirection::Inverse,
            FftDirection::Inverse => FftDirection::Forward,
        }
    }
}

impl Display for FftDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftDirection::Forward => f.write_str("FftDirection::Forward"),
            FftDirection::Inverse => f.write_str("FftDirection::Inverse"),
        }
    }
}

/// Vector width the butterfly kernels may assume, ordered narrow to wide.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SimdTier {
    Scalar,
    Sse,
    Sse3,
    Avx,
    Avx512,
}

impl Display for SimdTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SimdTier::Scalar => f.write_str("SimdTier::Scalar"),
            SimdTier::Sse => f.write_str("SimdTier::Sse"),
            SimdTier::Sse3 => f.write_str("SimdTier::Sse3"),
            SimdTier::Avx => f.write_str("SimdTier::Avx"),
            SimdTier::Avx512 => f.write_str("SimdTier::Avx512"),
        }
    }
}

/// Probes the CPU for the widest tier the butterfly kernels can use.
pub fn detect_simd() -> SimdTier {
    #[cfg(all(target_arch = "x86_64", feature = "simd"))]
    {
        if std::arch::is_x86_feature_detected!("avx512f") {
            return SimdTier::Avx512;
        }
        if std::arch::is_x86_feature_detected!("avx") {
            return SimdTier::Avx;
        }
        if std::arch::is_x86_feature_detected!("sse3") {
            return SimdTier::Sse3;
        }
        if std::arch::is_x86_feature_detected!("sse") {
            return SimdTier::Sse;
        }
    }
    SimdTier::Scalar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::naive_dft;
    use num_complex::Complex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_detect_simd_is_stable() {
        assert_eq!(detect_simd(), detect_simd());
    }

    #[test]
    fn test_every_complex_size() {
        let mut rng = StdRng::seed_from_u64(0xF0F0);
        let plan = FftPlan::new(8192).unwrap();
        let mut size = 2usize;
        while size <= 8192 {
            let original: Vec<Complex<f32>> = (0..size)
                .map(|_| {
                    Complex::new(
                        rng.random_range(-1.0..1.0),
                        rng.random_range(-1.0..1.0),
                    )
                })
                .collect();

            let mut signal = original.clone();
            let mut spectrum = vec![Complex::new(0.0f32, 0.0); size];
            plan.forward(&mut signal, &mut spectrum).unwrap();

            let reference = naive_dft(&original, FftDirection::Forward);
            for (idx, (got, expected)) in spectrum.iter().zip(reference.iter()).enumerate() {
                assert!(
                    (got.re - expected.re).abs() < 3e-3,
                    "re {} != {} at {idx} for size {size}",
                    got.re,
                    expected.re
                );
                assert!(
                    (got.im - expected.im).abs() < 3e-3,
                    "im {} != {} at {idx} for size {size}",
                    got.im,
                    expected.im
                );
            }

            let mut recovered = vec![Complex::new(0.0f32, 0.0); size];
            plan.inverse(&mut spectrum, &mut recovered).unwrap();
            for (idx, (got, expected)) in recovered.iter().zip(original.iter()).enumerate() {
                assert!(
                    (got.re - expected.re).abs() < 3e-3 && (got.im - expected.im).abs() < 3e-3,
                    "round-trip mismatch at {idx} for size {size}"
                );
            }

            size <<= 1;
        }
    }

    #[test]
    fn test_every_real_size() {
        let mut rng = StdRng::seed_from_u64(0xB0B0);
        let plan = FftPlan::new(8192).unwrap();
        let mut size = 2usize;
        while size <= 16384 {
            let original: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();

            let mut signal = original.clone();
            let mut spectrum = vec![Complex::new(0.0f32, 0.0); size];
            plan.forward_real(&mut signal, &mut spectrum).unwrap();

            let mut recovered = vec![0.0f32; size];
            plan.inverse_real(&mut spectrum, &mut recovered).unwrap();
            for (idx, (got, expected)) in recovered.iter().zip(original.iter()).enumerate() {
                assert!(
                    (got - expected).abs() < 3e-3,
                    "real round-trip {} != {} at {idx} for size {size}",
                    got,
                    expected
                );
            }

            size <<= 1;
        }
    }
}
