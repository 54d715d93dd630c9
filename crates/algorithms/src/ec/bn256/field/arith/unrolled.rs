//! Fully unrolled Montgomery arithmetic.

use super::{adc, mac, sbb, subtract_p, FieldArithmetic, INV, MODULUS};

/// Straight-line backend, one `mac` per limb product.
pub(crate) struct Unrolled;

impl Unrolled {
    /// Reduce an 8-limb product by R = 2^256.
    #[inline(always)]
    #[allow(clippy::too_many_arguments)]
    const fn montgomery_reduce(
        t0: u64,
        t1: u64,
        t2: u64,
        t3: u64,
        t4: u64,
        t5: u64,
        t6: u64,
        t7: u64,
    ) -> [u64; 4] {
        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS[0], 0);
        let (r1, carry) = mac(t1, k, MODULUS[1], carry);
        let (r2, carry) = mac(t2, k, MODULUS[2], carry);
        let (r3, carry) = mac(t3, k, MODULUS[3], carry);
        let (r4, r5) = adc(t4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, r6) = adc(t5, r5, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, r7) = adc(t6, r6, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, r8) = adc(t7, r7, carry);

        subtract_p([r4, r5, r6, r7], r8)
    }
}

impl FieldArithmetic for Unrolled {
    #[inline]
    fn add(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let (d0, carry) = adc(a[0], b[0], 0);
        let (d1, carry) = adc(a[1], b[1], carry);
        let (d2, carry) = adc(a[2], b[2], carry);
        let (d3, carry) = adc(a[3], b[3], carry);

        subtract_p([d0, d1, d2, d3], carry)
    }

    #[inline]
    fn sub(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let (d0, borrow) = sbb(a[0], b[0], 0);
        let (d1, borrow) = sbb(a[1], b[1], borrow);
        let (d2, borrow) = sbb(a[2], b[2], borrow);
        let (d3, borrow) = sbb(a[3], b[3], borrow);

        // Add p back when the subtraction wrapped
        let (d0, carry) = adc(d0, MODULUS[0] & borrow, 0);
        let (d1, carry) = adc(d1, MODULUS[1] & borrow, carry);
        let (d2, carry) = adc(d2, MODULUS[2] & borrow, carry);
        let (d3, _) = adc(d3, MODULUS[3] & borrow, carry);

        [d0, d1, d2, d3]
    }

    #[inline]
    fn neg(a: &[u64; 4]) -> [u64; 4] {
        let (d0, borrow) = sbb(MODULUS[0], a[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], a[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], a[2], borrow);
        let (d3, _) = sbb(MODULUS[3], a[3], borrow);

        // -0 must stay 0 rather than becoming p
        let mask = (((a[0] | a[1] | a[2] | a[3]) == 0) as u64).wrapping_sub(1);

        [d0 & mask, d1 & mask, d2 & mask, d3 & mask]
    }

    #[inline]
    fn mul(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let (t0, carry) = mac(0, a[0], b[0], 0);
        let (t1, carry) = mac(0, a[0], b[1], carry);
        let (t2, carry) = mac(0, a[0], b[2], carry);
        let (t3, t4) = mac(0, a[0], b[3], carry);

        let (t1, carry) = mac(t1, a[1], b[0], 0);
        let (t2, carry) = mac(t2, a[1], b[1], carry);
        let (t3, carry) = mac(t3, a[1], b[2], carry);
        let (t4, t5) = mac(t4, a[1], b[3], carry);

        let (t2, carry) = mac(t2, a[2], b[0], 0);
        let (t3, carry) = mac(t3, a[2], b[1], carry);
        let (t4, carry) = mac(t4, a[2], b[2], carry);
        let (t5, t6) = mac(t5, a[2], b[3], carry);

        let (t3, carry) = mac(t3, a[3], b[0], 0);
        let (t4, carry) = mac(t4, a[3], b[1], carry);
        let (t5, carry) = mac(t5, a[3], b[2], carry);
        let (t6, t7) = mac(t6, a[3], b[3], carry);

        Self::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }

    #[inline]
    fn square(a: &[u64; 4]) -> [u64; 4] {
        // Off-diagonal products once
        let (t1, carry) = mac(0, a[0], a[1], 0);
        let (t2, carry) = mac(0, a[0], a[2], carry);
        let (t3, t4) = mac(0, a[0], a[3], carry);

        let (t3, carry) = mac(t3, a[1], a[2], 0);
        let (t4, t5) = mac(t4, a[1], a[3], carry);

        let (t5, t6) = mac(t5, a[2], a[3], 0);

        // Double them
        let t7 = t6 >> 63;
        let t6 = (t6 << 1) | (t5 >> 63);
        let t5 = (t5 << 1) | (t4 >> 63);
        let t4 = (t4 << 1) | (t3 >> 63);
        let t3 = (t3 << 1) | (t2 >> 63);
        let t2 = (t2 << 1) | (t1 >> 63);
        let t1 = t1 << 1;

        // Add the squares on the diagonal
        let (t0, carry) = mac(0, a[0], a[0], 0);
        let (t1, carry) = adc(t1, 0, carry);
        let (t2, carry) = mac(t2, a[1], a[1], carry);
        let (t3, carry) = adc(t3, 0, carry);
        let (t4, carry) = mac(t4, a[2], a[2], carry);
        let (t5, carry) = adc(t5, 0, carry);
        let (t6, carry) = mac(t6, a[3], a[3], carry);
        let (t7, _) = adc(t7, 0, carry);

        Self::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }
}
