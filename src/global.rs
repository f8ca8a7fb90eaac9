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
use crate::err::OktavError;
use crate::plan::FftPlan;
use num_complex::Complex;
use std::sync::OnceLock;

/// Capacity of the process-wide convenience plan: complex transforms up to
/// this many points, real ones up to twice as many.
pub const SHARED_PLAN_SIZE: usize = 4096;

static SHARED_PLAN: OnceLock<FftPlan> = OnceLock::new();

/// The lazily built process-wide plan. Construction happens once; a losing
/// racer's plan is dropped, which is harmless since equal-sized plans
/// transform identically.
pub fn shared_plan() -> Result<&'static FftPlan, OktavError> {
    if let Some(plan) = SHARED_PLAN.get() {
        return Ok(plan);
    }
    let plan = FftPlan::new(SHARED_PLAN_SIZE)?;
    Ok(SHARED_PLAN.get_or_init(move || plan))
}

pub fn forward(
    signal: &mut [Complex<f32>],
    spectrum: &mut [Complex<f32>],
) -> Result<(), OktavError> {
    shared_plan()?.forward(signal, spectrum)
}

pub fn inverse(
    spectrum: &mut [Complex<f32>],
    signal: &mut [Complex<f32>],
) -> Result<(), OktavError> {
    shared_plan()?.inverse(spectrum, signal)
}

pub fn forward_real(signal: &mut [f32], spectrum: &mut [Complex<f32>]) -> Result<(), OktavError> {
    shared_plan()?.forward_real(signal, spectrum)
}

pub fn inverse_real(spectrum: &mut [Complex<f32>], signal: &mut [f32]) -> Result<(), OktavError> {
    shared_plan()?.inverse_real(spectrum, signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_plan_round_trip() {
        let original: Vec<Complex<f32>> = (0..64)
            .map(|i| Complex::new(0.01 * i as f32, -0.02 * i as f32))
            .collect();
        let mut signal = original.clone();
        let mut spectrum = vec![Complex::new(0.0f32, 0.0); 64];
        forward(&mut signal, &mut spectrum).unwrap();
        let mut recovered = vec![Complex::new(0.0f32, 0.0); 64];
        inverse(&mut spectrum, &mut recovered).unwrap();
        for (got, expected) in recovered.iter().zip(original.iter()) {
            assert!((got.re - expected.re).abs() < 1e-4);
            assert!((got.im - expected.im).abs() < 1e-4);
        }
        assert_eq!(shared_plan().unwrap().max_size_complex(), SHARED_PLAN_SIZE);
    }
}
