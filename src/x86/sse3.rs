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
#[target_feature(enable = "sse3")]
pub(crate) fn _mm_cload2_ps(values: &[Complex<f32>], idx: usize) -> __m128 {
    unsafe { _mm_loadu_ps(values.get_unchecked(idx..).as_ptr().cast()) }
}

#[inline]
#[target_feature(enable = "sse3")]
pub(crate) fn _mm_cstore2_ps(values: &mut [Complex<f32>], idx: usize, v: __m128) {
    unsafe { _mm_storeu_ps(values.get_unchecked_mut(idx..).as_mut_ptr().cast(), v) }
}

#[inline]
#[target_feature(enable = "sse3")]
pub(crate) fn _mm_cload1_ps(values: &[Complex<f32>], idx: usize) -> __m128 {
    unsafe { _mm_castsi128_ps(_mm_loadu_si64(values.get_unchecked(idx..).as_ptr().cast())) }
}

#[inline]
#[target_feature(enable = "sse3")]
pub(crate) fn _mm_cstore1_ps(values: &mut [Complex<f32>], idx: usize, v: __m128) {
    unsafe {
        _mm_storeu_si64(
            values.get_unchecked_mut(idx..).as_mut_ptr().cast(),
            _mm_castps_si128(v),
        )
    }
}

#[inline]
#[target_feature(enable = "sse3")]
pub(crate) fn _mm_cmul_ps(a: __m128, b: __m128) -> __m128 {
    let ar = _mm_moveldup_ps(a); // duplicate even lanes (re parts)
    let ai = _mm_movehdup_ps(a); // duplicate odd lanes (im parts)
    let bswap = _mm_shuffle_ps::<0b10110001>(b, b); // [im, re, im, re]
    _mm_addsub_ps(_mm_mul_ps(ar, b), _mm_mul_ps(ai, bswap))
}

// Swap re/im per lane and flip one sign: -j on the forward path, +j on
// the inverse path, matching the scalar rotate_90.
#[inline]
#[target_feature(enable = "sse3")]
fn _mm_crot_ps(v: __m128, flip: __m128) -> __m128 {
    _mm_xor_ps(_mm_shuffle_ps::<0b10110001>(v, v), flip)
}

#[inline]
#[target_feature(enable = "sse3")]
fn rotation_flip(direction: FftDirection) -> __m128 {
    match direction {
        FftDirection::Forward => _mm_setr_ps(0.0, -0.0, 0.0, -0.0),
        FftDirection::Inverse => _mm_setr_ps(-0.0, 0.0, -0.0, 0.0),
    }
}

/// 128-bit radix-8 stage kernel, two butterflies per iteration.
#[target_feature(enable = "sse3")]
pub(crate) fn sse3_radix8_pass(
    src: &[Complex<f32>],
    dst: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    n: usize,
    direction: FftDirection,
) {
    let eighth = n / 8;
    debug_assert!(eighth >= 2 && eighth.is_multiple_of(2));

    let flip = rotation_flip(direction);
    let root2 = _mm_set1_ps(core::f32::consts::FRAC_1_SQRT_2);

    for (x, y) in src.chunks_exact(n).zip(dst.chunks_exact_mut(n)) {
        let mut b = 0usize;
        while b < eighth {
            let x0 = _mm_cload2_ps(x, b);
            let x1 = _mm_cmul_ps(_mm_cload2_ps(x, b + eighth), _mm_cload2_ps(twiddles, eighth + b));
            let x2 = _mm_cmul_ps(
                _mm_cload2_ps(x, b + 2 * eighth),
                _mm_cload2_ps(twiddles, 2 * eighth + b),
            );
            let x3 = _mm_cmul_ps(
                _mm_cload2_ps(x, b + 3 * eighth),
                _mm_cload2_ps(twiddles, 3 * eighth + b),
            );
            let x4 = _mm_cmul_ps(
                _mm_cload2_ps(x, b + 4 * eighth),
                _mm_cload2_ps(twiddles, 4 * eighth + b),
            );
            let x5 = _mm_cmul_ps(
                _mm_cload2_ps(x, b + 5 * eighth),
                _mm_cload2_ps(twiddles, 5 * eighth + b),
            );
            let x6 = _mm_cmul_ps(
                _mm_cload2_ps(x, b + 6 * eighth),
                _mm_cload2_ps(twiddles, 6 * eighth + b),
            );
            let x7 = _mm_cmul_ps(
                _mm_cload2_ps(x, b + 7 * eighth),
                _mm_cload2_ps(twiddles, 7 * eighth + b),
            );

            let p04 = _mm_add_ps(x0, x4);
            let m04 = _mm_sub_ps(x0, x4);
            let p15 = _mm_add_ps(x1, x5);
            let m15 = _mm_sub_ps(x1, x5);
            let p26 = _mm_add_ps(x2, x6);
            let m26 = _mm_sub_ps(x2, x6);
            let p37 = _mm_add_ps(x3, x7);
            let m37 = _mm_sub_ps(x3, x7);

            let a04 = _mm_add_ps(p04, p26);
            let s04 = _mm_sub_ps(p04, p26);
            let a15 = _mm_add_ps(p15, p37);
            let r51 = _mm_crot_ps(_mm_sub_ps(p15, p37), flip);

            let rm26 = _mm_crot_ps(m26, flip);
            let e = _mm_add_ps(m04, rm26);
            let g = _mm_sub_ps(m04, rm26);
            let f = _mm_add_ps(m15, _mm_crot_ps(m37, flip));
            let h = _mm_add_ps(m37, _mm_crot_ps(m15, flip));
            let wf = _mm_mul_ps(_mm_add_ps(_mm_crot_ps(f, flip), f), root2);
            let wh = _mm_mul_ps(_mm_add_ps(_mm_crot_ps(h, flip), h), root2);

            _mm_cstore2_ps(y, b, _mm_add_ps(a04, a15));
            _mm_cstore2_ps(y, b + eighth, _mm_add_ps(e, wf));
            _mm_cstore2_ps(y, b + 2 * eighth, _mm_add_ps(s04, r51));
            _mm_cstore2_ps(y, b + 3 * eighth, _mm_add_ps(g, wh));
            _mm_cstore2_ps(y, b + 4 * eighth, _mm_sub_ps(a04, a15));
            _mm_cstore2_ps(y, b + 5 * eighth, _mm_sub_ps(e, wf));
            _mm_cstore2_ps(y, b + 6 * eighth, _mm_sub_ps(s04, r51));
            _mm_cstore2_ps(y, b + 7 * eighth, _mm_sub_ps(g, wh));

            b += 2;
        }
    }
}

/// 64-bit radix-8 stage kernel, one complex per register. Only the n = 8
/// stage has a single butterfly column, so this is its dedicated path.
#[target_feature(enable = "sse3")]
pub(crate) fn sse3_radix8_pass_lane1(
    src: &[Complex<f32>],
    dst: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    direction: FftDirection,
) {
    let flip = rotation_flip(direction);
    let root2 = _mm_set1_ps(core::f32::consts::FRAC_1_SQRT_2);

    for (x, y) in src.chunks_exact(8).zip(dst.chunks_exact_mut(8)) {
        let x0 = _mm_cload1_ps(x, 0);
        let x1 = _mm_cmul_ps(_mm_cload1_ps(x, 1), _mm_cload1_ps(twiddles, 1));
        let x2 = _mm_cmul_ps(_mm_cload1_ps(x, 2), _mm_cload1_ps(twiddles, 2));
        let x3 = _mm_cmul_ps(_mm_cload1_ps(x, 3), _mm_cload1_ps(twiddles, 3));
        let x4 = _mm_cmul_ps(_mm_cload1_ps(x, 4), _mm_cload1_ps(twiddles, 4));
        let x5 = _mm_cmul_ps(_mm_cload1_ps(x, 5), _mm_cload1_ps(twiddles, 5));
        let x6 = _mm_cmul_ps(_mm_cload1_ps(x, 6), _mm_cload1_ps(twiddles, 6));
        let x7 = _mm_cmul_ps(_mm_cload1_ps(x, 7), _mm_cload1_ps(twiddles, 7));

        let p04 = _mm_add_ps(x0, x4);
        let m04 = _mm_sub_ps(x0, x4);
        let p15 = _mm_add_ps(x1, x5);
        let m15 = _mm_sub_ps(x1, x5);
        let p26 = _mm_add_ps(x2, x6);
        let m26 = _mm_sub_ps(x2, x6);
        let p37 = _mm_add_ps(x3, x7);
        let m37 = _mm_sub_ps(x3, x7);

        let a04 = _mm_add_ps(p04, p26);
        let s04 = _mm_sub_ps(p04, p26);
        let a15 = _mm_add_ps(p15, p37);
        let r51 = _mm_crot_ps(_mm_sub_ps(p15, p37), flip);

        let rm26 = _mm_crot_ps(m26, flip);
        let e = _mm_add_ps(m04, rm26);
        let g = _mm_sub_ps(m04, rm26);
        let f = _mm_add_ps(m15, _mm_crot_ps(m37, flip));
        let h = _mm_add_ps(m37, _mm_crot_ps(m15, flip));
        let wf = _mm_mul_ps(_mm_add_ps(_mm_crot_ps(f, flip), f), root2);
        let wh = _mm_mul_ps(_mm_add_ps(_mm_crot_ps(h, flip), h), root2);

        _mm_cstore1_ps(y, 0, _mm_add_ps(a04, a15));
        _mm_cstore1_ps(y, 1, _mm_add_ps(e, wf));
        _mm_cstore1_ps(y, 2, _mm_add_ps(s04, r51));
        _mm_cstore1_ps(y, 3, _mm_add_ps(g, wh));
        _mm_cstore1_ps(y, 4, _mm_sub_ps(a04, a15));
        _mm_cstore1_ps(y, 5, _mm_sub_ps(e, wf));
        _mm_cstore1_ps(y, 6, _mm_sub_ps(s04, r51));
        _mm_cstore1_ps(y, 7, _mm_sub_ps(g, wh));
    }
}
