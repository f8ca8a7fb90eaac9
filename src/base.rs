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
use crate::complex_fma::rotate_90;
use num_complex::Complex;

/// One pass of independent size-1/2/4 DFTs over contiguous blocks.
///
/// All twiddles at these sizes are `±1` or `±j`, so no general
/// multiplications happen here.
pub(crate) fn base_dft_pass(
    src: &[Complex<f32>],
    dst: &mut [Complex<f32>],
    base_len: usize,
    direction: FftDirection,
) {
    debug_assert_eq!(src.len(), dst.len());
    match base_len {
        1 => dst.copy_from_slice(src),
        2 => {
            for (x, y) in src.chunks_exact(2).zip(dst.chunks_exact_mut(2)) {
                y[0] = x[0] + x[1];
                y[1] = x[0] - x[1];
            }
        }
        _ => {
            debug_assert_eq!(base_len, 4);
            for (x, y) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
                let t0 = x[0] + x[2];
                let t1 = x[0] - x[2];
                let t2 = x[1] + x[3];
                let t3 = rotate_90(x[1] - x[3], direction);
                y[0] = t0 + t2;
                y[1] = t1 + t3;
                y[2] = t0 - t2;
                y[3] = t1 - t3;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::naive_dft;
    use rand::Rng;

    fn random_block(len: usize) -> Vec<Complex<f32>> {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| {
                Complex::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_base_dft_sizes() {
        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            for base_len in [1usize, 2, 4] {
                // several independent blocks per pass
                let input = random_block(base_len * 4);
                let mut output = vec![Complex::new(0.0, 0.0); input.len()];
                base_dft_pass(&input, &mut output, base_len, direction);

                for (block_in, block_out) in input
                    .chunks_exact(base_len)
                    .zip(output.chunks_exact(base_len))
                {
                    let reference = naive_dft(block_in, direction);
                    for (idx, (got, expected)) in
                        block_out.iter().zip(reference.iter()).enumerate()
                    {
                        assert!(
                            (got.re - expected.re).abs() < 1e-5,
                            "re mismatch for base {base_len} at {idx}"
                        );
                        assert!(
                            (got.im - expected.im).abs() < 1e-5,
                            "im mismatch for base {base_len} at {idx}"
                        );
                    }
                }
            }
        }
    }
}
