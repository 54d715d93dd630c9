//! Portable loop-based Montgomery arithmetic (CIOS).

use super::{adc, mac, sbb, subtract_p, FieldArithmetic, INV, MODULUS};

/// Reference backend written as limb loops.
pub(crate) struct Generic;

impl FieldArithmetic for Generic {
    fn add(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let mut r = [0u64; 4];
        let mut carry = 0;
        for i in 0..4 {
            let (d, c) = adc(a[i], b[i], carry);
            r[i] = d;
            carry = c;
        }
        subtract_p(r, carry)
    }

    fn sub(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let mut r = [0u64; 4];
        let mut borrow = 0;
        for i in 0..4 {
            let (d, bw) = sbb(a[i], b[i], borrow);
            r[i] = d;
            borrow = bw;
        }
        let mut carry = 0;
        for i in 0..4 {
            let (d, c) = adc(r[i], MODULUS[i] & borrow, carry);
            r[i] = d;
            carry = c;
        }
        r
    }

    fn neg(a: &[u64; 4]) -> [u64; 4] {
        let zero = [0u64; 4];
        let mut r = Self::sub(&zero, a);
        // sub(0, 0) is already 0; any other input lands in (0, p)
        let nonzero = a.iter().fold(0u64, |acc, limb| acc | limb);
        let mask = ((nonzero == 0) as u64).wrapping_sub(1);
        for limb in r.iter_mut() {
            *limb &= mask;
        }
        r
    }

    fn mul(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
        let mut t = [0u64; 6];
        for i in 0..4 {
            let mut carry = 0;
            for j in 0..4 {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
            }
            let (lo, hi) = adc(t[4], carry, 0);
            t[4] = lo;
            t[5] = hi;

            let k = t[0].wrapping_mul(INV);
            let (_, mut carry) = mac(t[0], k, MODULUS[0], 0);
            for j in 1..4 {
                let (lo, hi) = mac(t[j], k, MODULUS[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (lo, hi) = adc(t[4], carry, 0);
            t[3] = lo;
            t[4] = t[5] + hi;
        }
        subtract_p([t[0], t[1], t[2], t[3]], t[4])
    }

    fn square(a: &[u64; 4]) -> [u64; 4] {
        Self::mul(a, a)
    }
}
