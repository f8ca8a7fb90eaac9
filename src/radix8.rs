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
use crate::complex_fma::{c_mul_fast, rotate_90};
use crate::{FftDirection, SimdTier};
use num_complex::Complex;

/// One decimation-in-time radix-8 stage over blocks of size `n`.
///
/// `twiddles` is the stage band of the plan table: eight runs of `n/8`
/// factors, `twiddles[r * n/8 + b]`. The `r = 0` run is identically one
/// and is never multiplied. Every `(block, b)` butterfly is independent,
/// so the widest qualifying kernel streams `K` consecutive `b` columns.
pub(crate) fn radix8_pass(
    _tier: SimdTier,
    src: &[Complex<f32>],
    dst: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    n: usize,
    direction: FftDirection,
) {
    #[cfg(all(target_arch = "x86_64", feature = "simd"))]
    {
        let eighth = n / 8;
        // Safety: plans never carry a tier above what detect_simd reported
        // for this machine.
        if _tier >= SimdTier::Avx512 && eighth >= 8 {
            return unsafe { crate::x86::avx512_radix8_pass(src, dst, twiddles, n, direction) };
        }
        if _tier >= SimdTier::Avx && eighth >= 4 {
            return unsafe { crate::x86::avx_radix8_pass(src, dst, twiddles, n, direction) };
        }
        if _tier >= SimdTier::Sse3 {
            return if eighth >= 2 {
                unsafe { crate::x86::sse3_radix8_pass(src, dst, twiddles, n, direction) }
            } else {
                unsafe { crate::x86::sse3_radix8_pass_lane1(src, dst, twiddles, direction) }
            };
        }
        // SimdTier::Sse falls through: complex multiplication without
        // addsubps/movsldup spills to memory and loses to the scalar loop.
    }
    radix8_pass_scalar(src, dst, twiddles, n, direction)
}

pub(crate) fn radix8_pass_scalar(
    src: &[Complex<f32>],
    dst: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    n: usize,
    direction: FftDirection,
) {
    let eighth = n / 8;
    debug_assert!(eighth >= 1);
    debug_assert!(twiddles.len() >= n);
    let root2 = core::f32::consts::FRAC_1_SQRT_2;

    for (x, y) in src.chunks_exact(n).zip(dst.chunks_exact_mut(n)) {
        for b in 0..eighth {
            unsafe {
                let x0 = *x.get_unchecked(b);
                let x1 = c_mul_fast(
                    *x.get_unchecked(b + eighth),
                    *twiddles.get_unchecked(eighth + b),
                );
                let x2 = c_mul_fast(
                    *x.get_unchecked(b + 2 * eighth),
                    *twiddles.get_unchecked(2 * eighth + b),
                );
                let x3 = c_mul_fast(
                    *x.get_unchecked(b + 3 * eighth),
                    *twiddles.get_unchecked(3 * eighth + b),
                );
                let x4 = c_mul_fast(
                    *x.get_unchecked(b + 4 * eighth),
                    *twiddles.get_unchecked(4 * eighth + b),
                );
                let x5 = c_mul_fast(
                    *x.get_unchecked(b + 5 * eighth),
                    *twiddles.get_unchecked(5 * eighth + b),
                );
                let x6 = c_mul_fast(
                    *x.get_unchecked(b + 6 * eighth),
                    *twiddles.get_unchecked(6 * eighth + b),
                );
                let x7 = c_mul_fast(
                    *x.get_unchecked(b + 7 * eighth),
                    *twiddles.get_unchecked(7 * eighth + b),
                );

                let p04 = x0 + x4;
                let m04 = x0 - x4;
                let p15 = x1 + x5;
                let m15 = x1 - x5;
                let p26 = x2 + x6;
                let m26 = x2 - x6;
                let p37 = x3 + x7;
                let m37 = x3 - x7;

                let a04 = p04 + p26;
                let s04 = p04 - p26;
                let a15 = p15 + p37;
                let r51 = rotate_90(p15 - p37, direction);

                let rm26 = rotate_90(m26, direction);
                let e = m04 + rm26;
                let g = m04 - rm26;
                let f = m15 + rotate_90(m37, direction);
                let h = m37 + rotate_90(m15, direction);
                let wf = (rotate_90(f, direction) + f) * root2;
                let wh = (rotate_90(h, direction) + h) * root2;

                *y.get_unchecked_mut(b) = a04 + a15;
                *y.get_unchecked_mut(b + eighth) = e + wf;
                *y.get_unchecked_mut(b + 2 * eighth) = s04 + r51;
                *y.get_unchecked_mut(b + 3 * eighth) = g + wh;
                *y.get_unchecked_mut(b + 4 * eighth) = a04 - a15;
                *y.get_unchecked_mut(b + 5 * eighth) = e - wf;
                *y.get_unchecked_mut(b + 6 * eighth) = s04 - r51;
                *y.get_unchecked_mut(b + 7 * eighth) = g - wh;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autosort::autosort_pass;
    use crate::base::base_dft_pass;
    use crate::dft::naive_dft;
    use crate::twiddles::stage_twiddles;
    use rand::Rng;

    // Drives the full autosort/base/butterfly ladder through the scalar
    // kernel only, so a stage regression is not masked by SIMD paths.
    #[test]
    fn test_scalar_ladder_matches_naive() {
        let mut rng = rand::rng();
        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            for size in [8usize, 16, 32, 64, 512] {
                let table = stage_twiddles(size, direction).unwrap();
                let input: Vec<Complex<f32>> = (0..size)
                    .map(|_| {
                        Complex::new(
                            rng.random_range(-1.0..1.0),
                            rng.random_range(-1.0..1.0),
                        )
                    })
                    .collect();
                let reference = naive_dft(&input, direction);

                let mut a = input.clone();
                let mut b = vec![Complex::new(0.0, 0.0); size];
                let (mut src, mut dst) = (a.as_mut_slice(), b.as_mut_slice());

                let bits = size.trailing_zeros() as usize;
                let base_len = 1usize << (bits % 3);
                let stages = bits / 3;

                let mut n = size;
                for _ in 0..stages {
                    autosort_pass(src, dst, n);
                    core::mem::swap(&mut src, &mut dst);
                    n /= 8;
                }
                base_dft_pass(src, dst, base_len, direction);
                core::mem::swap(&mut src, &mut dst);
                let mut n = base_len * 8;
                for _ in 0..stages {
                    radix8_pass_scalar(src, dst, &table[n..2 * n], n, direction);
                    core::mem::swap(&mut src, &mut dst);
                    n *= 8;
                }

                for (idx, (got, expected)) in src.iter().zip(reference.iter()).enumerate() {
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
            }
        }
    }
}
