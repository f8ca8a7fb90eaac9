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
#[target_feature(enable = "avx512f")]
pub(crate) fn _mm512_cload8_ps(values: &[Complex<f32>], idx: usize) -> __m512 {
    unsafe { _mm512_loadu_ps(values.get_unchecked(idx..).as_ptr().cast()) }
}

#[inline]
#[target_feature(enable = "avx512f")]
pub(crate) fn _mm512_cstore8_ps(values: &mut [Complex<f32>], idx: usize, v: __m512) {
    unsafe { _mm512_storeu_ps(values.get_unchecked_mut(idx..).as_mut_ptr().cast(), v) }
}

#[inline]
#[target_feature(enable = "avx512f")]
pub(crate) fn _mm512_cmul_ps(a: __m512, b: __m512) -> __m512 {
    let ar = _mm512_moveldup_ps(a); // duplicate even lanes (re parts)
    let ai = _mm512_movehdup_ps(a); // duplicate odd lanes (im parts)
    let bswap = _mm512_permute_ps::<0b10110001>(b); // [im, re, im, re, ...]
    _mm512_fmaddsub_ps(ar, b, _mm512_mul_ps(ai, bswap))
}

// Sign flips run in the integer domain, _mm512_xor_ps needs AVX512DQ and
// this tier only assumes AVX512F.
#[inline]
#[target_feature(enable = "avx512f")]
fn _mm512_crot_ps(v: __m512, flip: __m512i) -> __m512 {
    _mm512_castsi512_ps(_mm512_xor_si512(
        _mm512_castps_si512(_mm512_permute_ps::<0b10110001>(v)),
        flip,
    ))
}

#[inline]
#[target_feature(enable = "avx512f")]
fn rotation_flip(direction: FftDirection) -> __m512i {
    match direction {
        FftDirection::Forward => _mm512_set1_epi64(0x8000_0000_0000_0000u64 as i64),
        FftDirection::Inverse => _mm512_set1_epi64(0x0000_0000_8000_0000u64 as i64),
    }
}

/// 512-bit radix-8 stage kernel, eight butterflies per iteration.
#[target_feature(enable = "avx512f")]
pub(crate) fn avx512_radix8_pass(
    src: &[Complex<f32>],
    dst: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    n: usize,
    direction: FftDirection,
) {
    let eighth = n / 8;
    debug_assert!(eighth >= 8 && eighth.is_multiple_of(8));

    let flip = rotation_flip(direction);
    let root2 = _mm512_set1_ps(core::f32::consts::FRAC_1_SQRT_2);

    for (x, y) in src.chunks_exact(n).zip(dst.chunks_exact_mut(n)) {
        let mut b = 0usize;
        while b < eighth {
            let x0 = _mm512_cload8_ps(x, b);
            let x1 = _mm512_cmul_ps(
                _mm512_cload8_ps(x, b + eighth),
                _mm512_cload8_ps(twiddles, eighth + b),
            );
            let x2 = _mm512_cmul_ps(
                _mm512_cload8_ps(x, b + 2 * eighth),
                _mm512_cload8_ps(twiddles, 2 * eighth + b),
            );
            let x3 = _mm512_cmul_ps(
                _mm512_cload8_ps(x, b + 3 * eighth),
                _mm512_cload8_ps(twiddles, 3 * eighth + b),
            );
            let x4 = _mm512_cmul_ps(
                _mm512_cload8_ps(x, b + 4 * eighth),
                _mm512_cload8_ps(twiddles, 4 * eighth + b),
            );
            let x5 = _mm512_cmul_ps(
                _mm512_cload8_ps(x, b + 5 * eighth),
                _mm512_cload8_ps(twiddles, 5 * eighth + b),
            );
            let x6 = _mm512_cmul_ps(
                _mm512_cload8_ps(x, b + 6 * eighth),
                _mm512_cload8_ps(twiddles, 6 * eighth + b),
            );
            let x7 = _mm512_cmul_ps(
                _mm512_cload8_ps(x, b + 7 * eighth),
                _mm512_cload8_ps(twiddles, 7 * eighth + b),
            );

            let p04 = _mm512_add_ps(x0, x4);
            let m04 = _mm512_sub_ps(x0, x4);
            let p15 = _mm512_add_ps(x1, x5);
            let m15 = _mm512_sub_ps(x1, x5);
            let p26 = _mm512_add_ps(x2, x6);
            let m26 = _mm512_sub_ps(x2, x6);
            let p37 = _mm512_add_ps(x3, x7);
            let m37 = _mm512_sub_ps(x3, x7);

            let a04 = _mm512_add_ps(p04, p26);
            let s04 = _mm512_sub_ps(p04, p26);
            let a15 = _mm512_add_ps(p15, p37);
            let r51 = _mm512_crot_ps(_mm512_sub_ps(p15, p37), flip);

            let rm26 = _mm512_crot_ps(m26, flip);
            let e = _mm512_add_ps(m04, rm26);
            let g = _mm512_sub_ps(m04, rm26);
            let f = _mm512_add_ps(m15, _mm512_crot_ps(m37, flip));
            let h = _mm512_add_ps(m37, _mm512_crot_ps(m15, flip));
            let wf = _mm512_mul_ps(_mm512_add_ps(_mm512_crot_ps(f, flip), f), root2);
            let wh = _mm512_mul_ps(_mm512_add_ps(_mm512_crot_ps(h, flip), h), root2);

            _mm512_cstore8_ps(y, b, _mm512_add_ps(a04, a15));
            _mm512_cstore8_ps(y, b + eighth, _mm512_add_ps(e, wf));
            _mm512_cstore8_ps(y, b + 2 * eighth, _mm512_add_ps(s04, r51));
            _mm512_cstore8_ps(y, b + 3 * eighth, _mm512_add_ps(g, wh));
            _mm512_cstore8_ps(y, b + 4 * eighth, _mm512_sub_ps(a04, a15));
            _mm512_cstore8_ps(y, b + 5 * eighth, _mm512_sub_ps(e, wf));
            _mm512_cstore8_ps(y, b + 6 * eighth, _mm512_sub_ps(s04, r51));
            _mm512_cstore8_ps(y, b + 7 * eighth, _mm512_sub_ps(g, wh));

            b += 8;
        }
    }
}
