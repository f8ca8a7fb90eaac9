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
use num_complex::Complex;

/// Stockham stride shuffle at stage size `n`: within every block,
/// `dst[k + r * n/8] = src[8 * k + r]`, an interleave-to-stride transpose
/// of an `n/8 x 8` matrix. No twiddles are touched, the pass is purely
/// memory-bound.
pub(crate) fn autosort_pass(src: &[Complex<f32>], dst: &mut [Complex<f32>], n: usize) {
    debug_assert!(n >= 8 && n.is_multiple_of(8));
    debug_assert_eq!(src.len(), dst.len());
    debug_assert!(src.len().is_multiple_of(n));

    let eighth = n / 8;
    for (x, y) in src.chunks_exact(n).zip(dst.chunks_exact_mut(n)) {
        for k in 0..eighth {
            let s = 8 * k;
            unsafe {
                *y.get_unchecked_mut(k) = *x.get_unchecked(s);
                *y.get_unchecked_mut(k + eighth) = *x.get_unchecked(s + 1);
                *y.get_unchecked_mut(k + 2 * eighth) = *x.get_unchecked(s + 2);
                *y.get_unchecked_mut(k + 3 * eighth) = *x.get_unchecked(s + 3);
                *y.get_unchecked_mut(k + 4 * eighth) = *x.get_unchecked(s + 4);
                *y.get_unchecked_mut(k + 5 * eighth) = *x.get_unchecked(s + 5);
                *y.get_unchecked_mut(k + 6 * eighth) = *x.get_unchecked(s + 6);
                *y.get_unchecked_mut(k + 7 * eighth) = *x.get_unchecked(s + 7);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autosort_shuffle() {
        for n in [8usize, 16, 64] {
            let total = n * 2;
            let input: Vec<Complex<f32>> = (0..total)
                .map(|i| Complex::new(i as f32, -(i as f32)))
                .collect();
            let mut output = vec![Complex::new(0.0, 0.0); total];
            autosort_pass(&input, &mut output, n);

            let eighth = n / 8;
            for block in 0..total / n {
                for k in 0..eighth {
                    for r in 0..8 {
                        assert_eq!(
                            output[block * n + k + r * eighth],
                            input[block * n + 8 * k + r],
                            "mismatch at block {block} k {k} r {r} for n {n}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_autosort_identity_at_minimum_stage() {
        // n = 8 has a single column, the shuffle degenerates to a copy
        let input: Vec<Complex<f32>> = (0..8).map(|i| Complex::new(i as f32, 0.0)).collect();
        let mut output = vec![Complex::new(0.0, 0.0); 8];
        autosort_pass(&input, &mut output, 8);
        assert_eq!(input, output);
    }
}
