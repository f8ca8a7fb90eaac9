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
use crate::err::{OktavError, try_vec};
use num_complex::Complex;
use num_traits::Zero;

pub(crate) fn compute_twiddle(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<f32> {
    let angle = -2.0 * core::f64::consts::PI * index as f64 / fft_len as f64;
    let twiddle = Complex {
        re: angle.cos() as f32,
        im: angle.sin() as f32,
    };
    match direction {
        FftDirection::Forward => twiddle,
        FftDirection::Inverse => twiddle.conj(),
    }
}

/// Per-stage twiddle bands for the radix-8 butterfly.
///
/// A stage of size `N` keeps its factors at `N..2N`, split into eight runs
/// of `N/8`: the entry at `N + r * N/8 + b` holds `exp(∓j*2*pi*r*b/N)`, so
/// a butterfly can stream `K` consecutive `b` values with plain vector
/// loads. Stages below 8 have no butterfly and leave their band empty.
pub(crate) fn stage_twiddles(
    max_size: usize,
    direction: FftDirection,
) -> Result<Vec<Complex<f32>>, OktavError> {
    debug_assert!(max_size.is_power_of_two());
    let mut table = try_vec![Complex::zero(); 2 * max_size];

    let mut n = 8usize;
    while n <= max_size {
        let eighth = n / 8;
        for r in 0..8 {
            for b in 0..eighth {
                table[n + r * eighth + b] = compute_twiddle(r * b, n, direction);
            }
        }
        n <<= 1;
    }

    Ok(table)
}

/// `table[k] = exp(-j*pi*k/max_size)`, consumed by the real-signal adapters.
pub(crate) fn real_twiddles(max_size: usize) -> Result<Vec<Complex<f32>>, OktavError> {
    let mut table = try_vec![Complex::zero(); max_size];
    for (k, dst) in table.iter_mut().enumerate() {
        let angle = -core::f64::consts::PI * k as f64 / max_size as f64;
        *dst = Complex {
            re: angle.cos() as f32,
            im: angle.sin() as f32,
        };
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_layout() {
        let table = stage_twiddles(64, FftDirection::Forward).unwrap();
        assert_eq!(table.len(), 128);
        for n in [8usize, 16, 32, 64] {
            let eighth = n / 8;
            for r in 0..8 {
                for b in 0..eighth {
                    let angle = -2.0 * std::f64::consts::PI * (r * b) as f64 / n as f64;
                    let got = table[n + r * eighth + b];
                    assert!(
                        (got.re - angle.cos() as f32).abs() < 1e-6,
                        "re mismatch at n={n} r={r} b={b}"
                    );
                    assert!(
                        (got.im - angle.sin() as f32).abs() < 1e-6,
                        "im mismatch at n={n} r={r} b={b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_inverse_is_conjugate() {
        let forward = stage_twiddles(256, FftDirection::Forward).unwrap();
        let inverse = stage_twiddles(256, FftDirection::Inverse).unwrap();
        for (f, i) in forward.iter().zip(inverse.iter()) {
            assert_eq!(f.re, i.re);
            assert_eq!(f.im, -i.im);
        }
    }

    #[test]
    fn test_real_twiddles() {
        let table = real_twiddles(128).unwrap();
        assert_eq!(table.len(), 128);
        assert_eq!(table[0], Complex::new(1.0, 0.0));
        // k = max/2 is a quarter turn clockwise
        assert!((table[64].re - 0.0).abs() < 1e-7);
        assert!((table[64].im - -1.0).abs() < 1e-7);
    }
}
