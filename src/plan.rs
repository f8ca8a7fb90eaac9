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
use crate::autosort::autosort_pass;
use crate::base::base_dft_pass;
use crate::err::OktavError;
use crate::radix8::radix8_pass;
use crate::real::{as_complex_mut, c2r_prepare, r2c_finalize};
use crate::twiddles::{real_twiddles, stage_twiddles};
use crate::{FftDirection, SimdTier, detect_simd};
use num_complex::Complex;

/// Precomputed transform state: twiddle tables for every stage up to the
/// plan capacity plus the resolved vector tier.
///
/// A plan is immutable once built and may be shared across threads, as
/// long as every transform call owns its signal/spectrum pair. The signal
/// buffer doubles as scratch and is clobbered by every call.
#[derive(Debug)]
pub struct FftPlan {
    max_size_complex: usize,
    forward_twiddles: Vec<Complex<f32>>,
    inverse_twiddles: Vec<Complex<f32>>,
    real_twiddles: Vec<Complex<f32>>,
    simd_tier: SimdTier,
}

impl FftPlan {
    /// Builds a plan able to run complex transforms up to `max_size_complex`
    /// points and real transforms up to twice that. The size must be a
    /// power of two of at least 4.
    pub fn new(max_size_complex: usize) -> Result<FftPlan, OktavError> {
        FftPlan::with_simd_tier(max_size_complex, detect_simd())
    }

    /// Same as [`FftPlan::new`] with a pinned vector tier, clamped to what
    /// the running CPU actually supports.
    pub fn with_simd_tier(
        max_size_complex: usize,
        simd_tier: SimdTier,
    ) -> Result<FftPlan, OktavError> {
        if !max_size_complex.is_power_of_two() || max_size_complex < 4 {
            return Err(OktavError::InvalidLength(max_size_complex));
        }
        Ok(FftPlan {
            max_size_complex,
            forward_twiddles: stage_twiddles(max_size_complex, FftDirection::Forward)?,
            inverse_twiddles: stage_twiddles(max_size_complex, FftDirection::Inverse)?,
            real_twiddles: real_twiddles(max_size_complex)?,
            simd_tier: simd_tier.min(detect_simd()),
        })
    }

    pub fn max_size_complex(&self) -> usize {
        self.max_size_complex
    }

    pub fn simd_tier(&self) -> SimdTier {
        self.simd_tier
    }

    /// Forward complex transform. `signal` is consumed as scratch,
    /// `spectrum` receives the unscaled DFT in natural order.
    pub fn forward(
        &self,
        signal: &mut [Complex<f32>],
        spectrum: &mut [Complex<f32>],
    ) -> Result<(), OktavError> {
        self.check_complex(signal.len(), spectrum.len())?;
        self.run(signal, spectrum, FftDirection::Forward);
        Ok(())
    }

    /// Inverse complex transform, scaled by `1/len`. `spectrum` is consumed
    /// as scratch.
    pub fn inverse(
        &self,
        spectrum: &mut [Complex<f32>],
        signal: &mut [Complex<f32>],
    ) -> Result<(), OktavError> {
        self.check_complex(spectrum.len(), signal.len())?;
        self.run(spectrum, signal, FftDirection::Inverse);
        let scale = 1.0 / signal.len() as f32;
        for value in signal.iter_mut() {
            *value = *value * scale;
        }
        Ok(())
    }

    /// Forward transform of a real signal of length `n` through a complex
    /// transform of length `n/2`. The non-redundant bins `X[0..=n/2]` land
    /// in the first `n/2 + 1` spectrum slots, the rest of the spectrum
    /// buffer is scratch. `signal` is clobbered.
    pub fn forward_real(
        &self,
        signal: &mut [f32],
        spectrum: &mut [Complex<f32>],
    ) -> Result<(), OktavError> {
        self.check_real(signal.len(), spectrum.len())?;
        let half = signal.len() / 2;
        let packed = as_complex_mut(signal);
        self.run(packed, &mut spectrum[..half], FftDirection::Forward);
        r2c_finalize(
            spectrum,
            packed,
            &self.real_twiddles,
            self.max_size_complex / half,
        );
        Ok(())
    }

    /// Inverse of [`FftPlan::forward_real`]: consumes the bins
    /// `spectrum[0..=n/2]` and recovers the real signal, scaled by `1/(n/2)`.
    pub fn inverse_real(
        &self,
        spectrum: &mut [Complex<f32>],
        signal: &mut [f32],
    ) -> Result<(), OktavError> {
        self.check_real(signal.len(), spectrum.len())?;
        let half = signal.len() / 2;
        c2r_prepare(
            spectrum,
            &self.real_twiddles,
            self.max_size_complex / half,
            half,
        );
        let packed = as_complex_mut(signal);
        self.run(&mut spectrum[..half], packed, FftDirection::Inverse);
        let scale = 1.0 / half as f32;
        for value in signal.iter_mut() {
            *value *= scale;
        }
        Ok(())
    }

    fn check_complex(&self, input_len: usize, output_len: usize) -> Result<(), OktavError> {
        if input_len != output_len {
            return Err(OktavError::LengthMismatch(input_len, output_len));
        }
        if !input_len.is_power_of_two() || input_len < 2 {
            return Err(OktavError::InvalidLength(input_len));
        }
        if input_len > self.max_size_complex {
            return Err(OktavError::ExceedsPlanCapacity(
                input_len,
                self.max_size_complex,
            ));
        }
        Ok(())
    }

    fn check_real(&self, signal_len: usize, spectrum_len: usize) -> Result<(), OktavError> {
        if signal_len != spectrum_len {
            return Err(OktavError::LengthMismatch(signal_len, spectrum_len));
        }
        if !signal_len.is_power_of_two() || signal_len < 2 {
            return Err(OktavError::InvalidLength(signal_len));
        }
        if signal_len > 2 * self.max_size_complex {
            return Err(OktavError::ExceedsPlanCapacity(
                signal_len,
                2 * self.max_size_complex,
            ));
        }
        Ok(())
    }

    /// The planned ladder: k autosort passes outer->base, one base-case
    /// pass, k butterfly passes base->outer. Buffer roles swap after every
    /// pass; 2k+1 passes always leave the result in `dst`.
    fn run<'a>(
        &self,
        mut src: &'a mut [Complex<f32>],
        mut dst: &'a mut [Complex<f32>],
        direction: FftDirection,
    ) {
        debug_assert_eq!(src.len(), dst.len());
        let total = src.len();
        let (base_len, stages) = decompose(total);
        let twiddles = match direction {
            FftDirection::Forward => self.forward_twiddles.as_slice(),
            FftDirection::Inverse => self.inverse_twiddles.as_slice(),
        };

        let mut n = total;
        for _ in 0..stages {
            autosort_pass(src, dst, n);
            core::mem::swap(&mut src, &mut dst);
            n /= 8;
        }

        base_dft_pass(src, dst, base_len, direction);
        core::mem::swap(&mut src, &mut dst);

        let mut n = base_len * 8;
        for _ in 0..stages {
            radix8_pass(self.simd_tier, src, dst, &twiddles[n..2 * n], n, direction);
            core::mem::swap(&mut src, &mut dst);
            n *= 8;
        }
    }
}

/// Splits a power-of-two size into `base * 8^stages` with base in {1, 2, 4}.
#[inline]
pub(crate) fn decompose(size: usize) -> (usize, usize) {
    debug_assert!(size.is_power_of_two());
    let bits = size.trailing_zeros() as usize;
    (1 << (bits % 3), bits / 3)
}
