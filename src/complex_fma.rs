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

#[inline(always)]
pub(crate) fn c_mul_fast(a: Complex<f32>, b: Complex<f32>) -> Complex<f32> {
    Complex {
        re: f32::mul_add(a.re, b.re, -(a.im * b.im)),
        im: f32::mul_add(a.re, b.im, a.im * b.re),
    }
}

// Multiplication by -j on the forward path, +j on the inverse path.
#[inline(always)]
pub(crate) fn rotate_90(value: Complex<f32>, direction: FftDirection) -> Complex<f32> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_mul_fast() {
        let a = Complex::new(1.5f32, -2.0);
        let b = Complex::new(-0.25f32, 3.0);
        let exact = a * b;
        let fast = c_mul_fast(a, b);
        assert!((fast.re - exact.re).abs() < 1e-6);
        assert!((fast.im - exact.im).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_90() {
        let v = Complex::new(1.0f32, 2.0);
        assert_eq!(rotate_90(v, FftDirection::Forward), Complex::new(2.0, -1.0));
        assert_eq!(rotate_90(v, FftDirection::Inverse), Complex::new(-2.0, 1.0));
    }
}
