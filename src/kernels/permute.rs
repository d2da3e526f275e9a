//! This module contains the in-place subband packing permutation and its inverse.
//!
//! After a lifting pass a line holds `t0 f0 t1 f1 ...`. Packing is the stable
//! partition by parity that turns it into `t0 t1 ... | f0 f1 ...`; unpacking
//! restores the interleaved order. Both are done without a second buffer:
//!
//! * the permutation is split into disjoint cycles,
//! * each cycle is walked once, carrying a single sample forward,
//! * a bit table with one flag per candidate seed (a quarter of the line)
//!   stops the outer scan from walking a cycle twice.
//!
//! For packing, old offset `i` moves to `i / 2` when even and to
//! `L/2 + (i - 1) / 2` when odd. Offsets `0` and `L - 1` are fixed, and every
//! other cycle passes through at least one odd offset of the lower half, so
//! those are the seeds. For unpacking the mirror holds: every non-trivial cycle
//! reaches an even offset of the upper half.

use bitvec::prelude::*;

use crate::traits::SampleLine;

//==================================================================================
// 1. Index Maps
//==================================================================================

/// Where the sample at `offset` lands when a line of length `len` is packed.
#[inline]
pub fn packed_offset(offset: usize, len: usize) -> usize {
    if offset % 2 == 0 {
        offset / 2
    } else {
        len / 2 + (offset - 1) / 2
    }
}

/// Where the sample at `offset` lands when a packed line of length `len` is unpacked.
#[inline]
pub fn unpacked_offset(offset: usize, len: usize) -> usize {
    let half = len / 2;
    if offset < half {
        2 * offset
    } else {
        2 * (offset - half) + 1
    }
}

//==================================================================================
// 2. Cycle Walker (The "Engine")
//==================================================================================

/// Rotates the cycle through `seed` one step along `destination`.
///
/// `mark` is called for every offset the walk reaches after the seed so the
/// caller can retire other seeds that belong to the same cycle. Returns the
/// number of samples moved.
fn walk_cycle<L, D, M>(line: &mut L, seed: usize, destination: D, mut mark: M) -> usize
where
    L: SampleLine + ?Sized,
    D: Fn(usize) -> usize,
    M: FnMut(usize),
{
    let mut carried = line.get(seed);
    let mut position = seed;
    let mut moved = 0;

    loop {
        let target = destination(position);
        if target == seed {
            line.set(seed, carried);
            return moved + 1;
        }
        let displaced = line.get(target);
        line.set(target, carried);
        carried = displaced;
        position = target;
        moved += 1;
        mark(position);
    }
}

//==================================================================================
// 3. Public API
//==================================================================================

/// Gathers even offsets into the first half and odd offsets into the second
/// half, each in original order. `line.len()` must be even.
pub fn pack<L>(line: &mut L)
where
    L: SampleLine + ?Sized,
{
    let len = line.len();
    debug_assert!(len % 2 == 0, "packed lines must have even length");
    let half = len / 2;

    // One flag per odd offset in [1, half): offset j maps to flag j / 2.
    let mut visited = bitvec![u8, Lsb0; 0; len / 4];
    let mut cycles = 0usize;
    let mut moved = 0usize;

    for seed in (1..half).step_by(2) {
        if visited[seed / 2] {
            continue;
        }
        moved += walk_cycle(
            line,
            seed,
            |offset| packed_offset(offset, len),
            |offset| {
                if offset % 2 == 1 && offset < half {
                    visited.set(offset / 2, true);
                }
            },
        );
        cycles += 1;
    }

    log::trace!("pack: len={} cycles={} moved={}", len, cycles, moved);
}

/// Inverse of [`pack`]: interleaves the first half back onto even offsets and
/// the second half onto odd offsets. `line.len()` must be even.
pub fn unpack<L>(line: &mut L)
where
    L: SampleLine + ?Sized,
{
    let len = line.len();
    debug_assert!(len % 2 == 0, "unpacked lines must have even length");
    let half = len / 2;

    // One flag per even offset in [half, len - 1): offset p maps to flag (p - first) / 2.
    let first = half + half % 2;
    let mut visited = bitvec![u8, Lsb0; 0; len / 4];
    let mut cycles = 0usize;
    let mut moved = 0usize;

    for seed in (first..len.saturating_sub(1)).step_by(2) {
        if visited[(seed - first) / 2] {
            continue;
        }
        moved += walk_cycle(
            line,
            seed,
            |offset| unpacked_offset(offset, len),
            |offset| {
                if offset % 2 == 0 && offset >= half {
                    visited.set((offset - first) / 2, true);
                }
            },
        );
        cycles += 1;
    }

    log::trace!("unpack: len={} cycles={} moved={}", len, cycles, moved);
}

//==================================================================================
// 4. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StridedLine;

    fn naive_pack(input: &[u16]) -> Vec<u16> {
        let evens = input.iter().step_by(2).copied();
        let odds = input.iter().skip(1).step_by(2).copied();
        evens.chain(odds).collect()
    }

    #[test]
    fn test_pack_small_line() {
        let mut line = [0u8, 1, 2, 3, 4, 5, 6, 7];
        pack(&mut line[..]);
        assert_eq!(line, [0, 2, 4, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn test_unpack_small_line() {
        let mut line = [0u8, 2, 4, 6, 1, 3, 5, 7];
        unpack(&mut line[..]);
        assert_eq!(line, [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_length_two_is_untouched() {
        let mut line = [9u8, 3];
        pack(&mut line[..]);
        assert_eq!(line, [9, 3]);
        unpack(&mut line[..]);
        assert_eq!(line, [9, 3]);
    }

    #[test]
    fn test_pack_matches_stable_partition_for_every_even_length() {
        // Includes non-dyadic even lengths, which have a different cycle structure.
        for len in (2..=130).step_by(2) {
            let original: Vec<u16> = (0..len as u16).collect();
            let mut line = original.clone();
            pack(&mut line[..]);
            assert_eq!(line, naive_pack(&original), "len = {}", len);
        }
    }

    #[test]
    fn test_unpack_inverts_stable_partition_for_every_even_length() {
        for len in (2..=130).step_by(2) {
            let original: Vec<u16> = (0..len as u16).collect();
            let mut line = naive_pack(&original);
            unpack(&mut line[..]);
            assert_eq!(line, original, "len = {}", len);
        }
    }

    #[test]
    fn test_pack_and_unpack_are_mutual_inverses() {
        let mut len = 2;
        while len <= 1024 {
            let original: Vec<u16> = (0..len as u16).map(|v| v.wrapping_mul(7919)).collect();

            let mut line = original.clone();
            pack(&mut line[..]);
            unpack(&mut line[..]);
            assert_eq!(line, original, "unpack(pack(x)) at len = {}", len);

            let mut line = original.clone();
            unpack(&mut line[..]);
            pack(&mut line[..]);
            assert_eq!(line, original, "pack(unpack(x)) at len = {}", len);

            len *= 2;
        }
    }

    #[test]
    fn test_index_maps_are_inverse() {
        for len in [2usize, 4, 16, 64, 256] {
            for offset in 0..len {
                assert_eq!(unpacked_offset(packed_offset(offset, len), len), offset);
            }
        }
    }

    #[test]
    fn test_pack_strided_column() {
        // 4x4 grid, pack column 1 only.
        let mut grid: Vec<u8> = (0..16).collect();
        {
            let mut column = StridedLine::new(&mut grid[1..], 4, 4);
            pack(&mut column);
        }
        let column: Vec<u8> = (0..4).map(|row| grid[row * 4 + 1]).collect();
        assert_eq!(column, vec![1, 9, 5, 13]);
        // Other columns untouched.
        assert_eq!(grid[0], 0);
        assert_eq!(grid[4], 4);
        assert_eq!(grid[6], 6);
    }

    #[test]
    fn test_pack_only_touches_the_given_segment() {
        let mut row = [0u8, 1, 2, 3, 4, 5, 6, 7];
        pack(&mut row[..4]);
        assert_eq!(row, [0, 2, 1, 3, 4, 5, 6, 7]);
    }
}
