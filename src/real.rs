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
use crate::complex_fma::c_mul_fast;
use num_complex::Complex;

/// A real buffer of even length is the same bytes as half as many
/// interleaved complex values; `Complex<f32>` is `repr(C)` over two `f32`.
pub(crate) fn as_complex_mut(buffer: &mut [f32]) -> &mut [Complex<f32>] {
    debug_assert!(buffer.len().is_multiple_of(2));
    unsafe {
        core::slice::from_raw_parts_mut(buffer.as_mut_ptr().cast(), buffer.len() / 2)
    }
}

/// Forward finalization: turns the half-length complex spectrum `Z` held in
/// `spectrum[..half]` into the real-signal spectrum `X[0..=half]`.
///
/// The split pass keeps the even part in `scratch` (the clobbered signal
/// buffer) and the odd part over `Z`. Each iteration performs the ascending
/// and the descending write together, because `Z` is consumed from both
/// ends at once.
pub(crate) fn r2c_finalize(
    spectrum: &mut [Complex<f32>],
    scratch: &mut [Complex<f32>],
    real_twiddles: &[Complex<f32>],
    stride: usize,
) {
    let half = scratch.len();
    debug_assert!(spectrum.len() > half);

    for k in 0..=half / 2 {
        let paired = if k == 0 { 0 } else { half - k };
        let zk = spectrum[k];
        let zp = spectrum[paired].conj();
        let even = (zk + zp) * 0.5;
        let diff = (zk - zp) * 0.5;
        let odd = Complex::new(diff.im, -diff.re);
        scratch[k] = even;
        spectrum[k] = odd;
        scratch[paired] = even.conj();
        spectrum[paired] = odd.conj();
    }

    // Nyquist bin comes from the k = 0 split values
    spectrum[half] = scratch[0] - spectrum[0];

    for k in 0..half {
        spectrum[k] = scratch[k] + c_mul_fast(spectrum[k], real_twiddles[stride * k]);
    }
}

/// Inverse preparation: rebuilds the half-length complex signal
/// `Y[k] = Xe[k] + j*Xo[k]` in place over `spectrum[..half]`, reading the
/// stored bins `X[0..=half]`. The pair at `k = 0` pulls the Nyquist bin
/// directly; the auxiliary twiddle is conjugated on this side.
pub(crate) fn c2r_prepare(
    spectrum: &mut [Complex<f32>],
    real_twiddles: &[Complex<f32>],
    stride: usize,
    half: usize,
) {
    debug_assert!(spectrum.len() > half);

    for k in 0..=half / 2 {
        let paired = half - k;
        let a = spectrum[k];
        let b = spectrum[paired].conj();
        let even = (a + b) * 0.5;
        let odd = c_mul_fast((a - b) * 0.5, real_twiddles[stride * k].conj());
        spectrum[k] = Complex::new(even.re - odd.im, even.im + odd.re);
        if k != 0 && paired != k {
            // conj(Xe - j*Xo) lands in the mirrored slot
            spectrum[paired] = Complex::new(even.re + odd.im, odd.re - even.im);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_complex_mut_layout() {
        let mut buffer = [1.0f32, 2.0, 3.0, 4.0];
        let packed = as_complex_mut(&mut buffer);
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0], Complex::new(1.0, 2.0));
        assert_eq!(packed[1], Complex::new(3.0, 4.0));
        packed[1] = Complex::new(-5.0, -6.0);
        assert_eq!(buffer, [1.0, 2.0, -5.0, -6.0]);
    }

    #[test]
    fn test_finalize_then_prepare_is_identity() {
        // r2c_finalize maps Z -> X, c2r_prepare maps X -> Y; Y must equal Z
        let half = 8usize;
        let max_size = 16usize;
        let stride = max_size / half;
        let real_twiddles = crate::twiddles::real_twiddles(max_size).unwrap();

        let z: Vec<Complex<f32>> = (0..half)
            .map(|i| Complex::new(0.3 + 0.11 * i as f32, -0.7 + 0.23 * i as f32))
            .collect();
        let mut spectrum = vec![Complex::new(0.0, 0.0); 2 * half];
        spectrum[..half].copy_from_slice(&z);
        let mut scratch = vec![Complex::new(0.0, 0.0); half];

        r2c_finalize(&mut spectrum, &mut scratch, &real_twiddles, stride);
        c2r_prepare(&mut spectrum, &real_twiddles, stride, half);

        for (idx, (got, expected)) in spectrum[..half].iter().zip(z.iter()).enumerate() {
            assert!(
                (got.re - expected.re).abs() < 1e-5,
                "re {} != {} at {idx}",
                got.re,
                expected.re
            );
            assert!(
                (got.im - expected.im).abs() < 1e-5,
                "im {} != {} at {idx}",
                got.im,
                expected.im
            );
        }
    }
}
