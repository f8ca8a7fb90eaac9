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
use crate::FftDirection;
use num_complex::Complex;
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "avx")]
pub(crate) fn _mm256_cload4_ps(values: &[Complex<f32>], idx: usize) -> __m256 {
    unsafe { _mm256_loadu_ps(values.get_unchecked(idx..).as_ptr().cast()) }
}

#[inline]
#[target_feature(enable = "avx")]
pub(crate) fn _mm256_cstore4_ps(values: &mut [Complex<f32>], idx: usize, v: __m256) {
    unsafe { _mm256_storeu_ps(values.get_unchecked_mut(idx..).as_mut_ptr().cast(), v) }
}

// The plain-AVX tier has no FMA guarantee, so the cross term goes through
// mul + addsub instead of fmaddsub.
#[inline]
#[target_feature(enable = "avx")]
pub(crate) fn _mm256_cmul_ps(a: __m256, b: __m256) -> __m256 {
    let ar = _mm256_moveldup_ps(a); // duplicate even lanes (re parts)
    let ai = _mm256_movehdup_ps(a); // duplicate odd lanes (im parts)
    let bswap = _mm256_permute_ps::<0b10110001>(b); // [im, re, im, re, ...]
    _mm256_addsub_ps(_mm256_mul_ps(ar, b), _mm256_mul_ps(ai, bswap))
}

#[inline]
#[target_feature(enable = "avx")]
fn _mm256_crot_ps(v: __m256, flip: __m256) -> __m256 {
    _mm256_xor_ps(_mm256_permute_ps::<0b10110001>(v), flip)
}

#[inline]
#[target_feature(enable = "avx")]
fn rotation_flip(direction: FftDirection) -> __m256 {
    match direction {
        FftDirection::Forward => _mm256_setr_ps(0.0, -0.0, 0.0, -0.0, 0.0, -0.0, 0.0, -0.0),
        FftDirection::Inverse => _mm256_setr_ps(-0.0, 0.0, -0.0, 0.0, -0.0, 0.0, -0.0, 0.0),
    }
}

/// 256-bit radix-8 stage kernel, four butterflies per iteration.
#[target_feature(enable = "avx")]
pub(crate) fn avx_radix8_pass(
    src: &[Complex<f32>],
    dst: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    n: usize,
    direction: FftDirection,
) {
    let eighth = n / 8;
    debug_assert!(eighth >= 4 && eighth.is_multiple_of(4));

    let flip = rotation_flip(direction);
    let root2 = _mm256_set1_ps(core::f32::consts::FRAC_1_SQRT_2);

    for (x, y) in src.chunks_exact(n).zip(dst.chunks_exact_mut(n)) {
        let mut b = 0usize;
        while b < eighth {
            let x0 = _mm256_cload4_ps(x, b);
            let x1 = _mm256_cmul_ps(
                _mm256_cload4_ps(x, b + eighth),
                _mm256_cload4_ps(twiddles, eighth + b),
            );
            let x2 = _mm256_cmul_ps(
                _mm256_cload4_ps(x, b + 2 * eighth),
                _mm256_cload4_ps(twiddles, 2 * eighth + b),
            );
            let x3 = _mm256_cmul_ps(
                _mm256_cload4_ps(x, b + 3 * eighth),
                _mm256_cload4_ps(twiddles, 3 * eighth + b),
            );
            let x4 = _mm256_cmul_ps(
                _mm256_cload4_ps(x, b + 4 * eighth),
                _mm256_cload4_ps(twiddles, 4 * eighth + b),
            );
            let x5 = _mm256_cmul_ps(
                _mm256_cload4_ps(x, b + 5 * eighth),
                _mm256_cload4_ps(twiddles, 5 * eighth + b),
            );
            let x6 = _mm256_cmul_ps(
                _mm256_cload4_ps(x, b + 6 * eighth),
                _mm256_cload4_ps(twiddles, 6 * eighth + b),
            );
            let x7 = _mm256_cmul_ps(
                _mm256_cload4_ps(x, b + 7 * eighth),
                _mm256_cload4_ps(twiddles, 7 * eighth + b),
            );

            let p04 = _mm256_add_ps(x0, x4);
            let m04 = _mm256_sub_ps(x0, x4);
            let p15 = _mm256_add_ps(x1, x5);
            let m15 = _mm256_sub_ps(x1, x5);
            let p26 = _mm256_add_ps(x2, x6);
            let m26 = _mm256_sub_ps(x2, x6);
            let p37 = _mm256_add_ps(x3, x7);
            let m37 = _mm256_sub_ps(x3, x7);

            let a04 = _mm256_add_ps(p04, p26);
            let s04 = _mm256_sub_ps(p04, p26);
            let a15 = _mm256_add_ps(p15, p37);
            let r51 = _mm256_crot_ps(_mm256_sub_ps(p15, p37), flip);

            let rm26 = _mm256_crot_ps(m26, flip);
            let e = _mm256_add_ps(m04, rm26);
            let g = _mm256_sub_ps(m04, rm26);
            let f = _mm256_add_ps(m15, _mm256_crot_ps(m37, flip));
            let h = _mm256_add_ps(m37, _mm256_crot_ps(m15, flip));
            let wf = _mm256_mul_ps(_mm256_add_ps(_mm256_crot_ps(f, flip), f), root2);
            let wh = _mm256_mul_ps(_mm256_add_ps(_mm256_crot_ps(h, flip), h), root2);

            _mm256_cstore4_ps(y, b, _mm256_add_ps(a04, a15));
            _mm256_cstore4_ps(y, b + eighth, _mm256_add_ps(e, wf));
            _mm256_cstore4_ps(y, b + 2 * eighth, _mm256_add_ps(s04, r51));
            _mm256_cstore4_ps(y, b + 3 * eighth, _mm256_add_ps(g, wh));
            _mm256_cstore4_ps(y, b + 4 * eighth, _mm256_sub_ps(a04, a15));
            _mm256_cstore4_ps(y, b + 5 * eighth, _mm256_sub_ps(e, wf));
            _mm256_cstore4_ps(y, b + 6 * eighth, _mm256_sub_ps(s04, r51));
            _mm256_cstore4_ps(y, b + 7 * eighth, _mm256_sub_ps(g, wh));

            b += 4;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix8::radix8_pass_scalar;
    use crate::twiddles::stage_twiddles;
    use rand::Rng;

    #[test]
    fn test_avx_matches_scalar() {
        if !std::arch::is_x86_feature_detected!("avx") {
            return;
        }
        let mut rng = rand::rng();
        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            for n in [32usize, 256] {
                let table = stage_twiddles(n, direction).unwrap();
                let input: Vec<Complex<f32>> = (0..n * 2)
                    .map(|_| {
                        Complex::new(
                            rng.random_range(-1.0..1.0),
                            rng.random_range(-1.0..1.0),
                        )
                    })
                    .collect();
                let mut expected = vec![Complex::new(0.0, 0.0); input.len()];
                let mut actual = expected.clone();
                radix8_pass_scalar(&input, &mut expected, &table[n..2 * n], n, direction);
                unsafe {
                    avx_radix8_pass(&input, &mut actual, &table[n..2 * n], n, direction);
                }
                for (idx, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
                    assert!(
                        (a.re - e.re).abs() < 1e-5 && (a.im - e.im).abs() < 1e-5,
                        "mismatch at {idx} for n {n}: {a} vs {e}"
                    );
                }
            }
        }
    }
}
