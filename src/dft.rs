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

// O(n^2) reference transform with a precomputed f64 twiddle row, so it
// stays a usable oracle at the largest supported sizes.
pub(crate) fn naive_dft(input: &[Complex<f32>], direction: FftDirection) -> Vec<Complex<f32>> {
    let len = input.len();
    let sign = match direction {
        FftDirection::Forward => -1.0f64,
        FftDirection::Inverse => 1.0f64,
    };

    let twiddles: Vec<(f64, f64)> = (0..len)
        .map(|i| {
            let angle = sign * 2.0 * std::f64::consts::PI * i as f64 / len as f64;
            angle.sin_cos()
        })
        .collect();

    let mut output = Vec::with_capacity(len);
    for k in 0..len {
        let mut sum_re = 0.0f64;
        let mut sum_im = 0.0f64;
        for (n, value) in input.iter().enumerate() {
            let (s, c) = twiddles[(k * n) % len];
            sum_re += value.re as f64 * c - value.im as f64 * s;
            sum_im += value.re as f64 * s + value.im as f64 * c;
        }
        output.push(Complex::new(sum_re as f32, sum_im as f32));
    }
    output
}
