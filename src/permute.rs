// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use ndarray::prelude::*;
use ndarray::{RawData, Slice};

fn slice_tile<S, D>(arr: &mut ArrayBase<S, D>, i: usize, cols: usize, tw: usize, th: usize)
where
    S: RawData,
    D: Dimension,
{
    let (r, c) = ((i / cols) * th, (i % cols) * tw);
    arr.slice_axis_inplace(Axis(0), Slice::from(r..r + th));
    arr.slice_axis_inplace(Axis(1), Slice::from(c..c + tw));
}

/// Main tile permutation.
///
/// Cuts an array into tiles and produces a new array where
/// slot `i` (row-major) holds source tile `ordering[i]`.
///
/// Parameters:
/// * `arr` : Input array view. Can be multidimensional,
///   but only the first 2 dimension (rows, columns) are tiled.
/// * `tile_size` : Tile `(width, height)`, ie. `(columns, rows)`.
/// * `ordering` : Source tile for each destination slot.
///
/// Returns [None] if the tiles do not cover the array exactly,
/// or if `ordering` does not name exactly one in-grid tile per slot.
/// Repeated entries are not rejected here, use
/// [valid_input](crate::valid_input) for that.
pub fn permute_tiles<A, D>(
    arr: ArrayView<'_, A, D>,
    tile_size: (u32, u32),
    ordering: &[usize],
) -> Option<Array<A, D>>
where
    A: Clone,
    D: Dimension,
{
    let &[h, w, ..] = arr.shape() else {
        return None;
    };
    let (tw, th) = (tile_size.0 as usize, tile_size.1 as usize);
    if tw == 0 || th == 0 || w % tw != 0 || h % th != 0 {
        return None;
    }

    let cols = w / tw;
    let count = cols * (h / th);
    if ordering.len() != count || ordering.iter().any(|&i| i >= count) {
        return None;
    }

    let mut out = arr.to_owned();
    for (dst, &src) in ordering.iter().enumerate() {
        let mut tile = arr.view();
        slice_tile(&mut tile, src, cols, tw, th);

        let mut slot = out.view_mut();
        slice_tile(&mut slot, dst, cols, tw, th);

        slot.assign(&tile);
    }

    Some(out)
}

/// Inverse of a permutation.
///
/// If `ordering` takes slot `i` from tile `ordering[i]`,
/// the result takes it back.
///
/// Panics if `ordering` is not a permutation of `0..ordering.len()`.
pub fn invert_ordering(ordering: &[usize]) -> Vec<usize> {
    let mut ret = vec![usize::MAX; ordering.len()];
    for (i, &o) in ordering.iter().enumerate() {
        match ret.get_mut(o) {
            Some(v) if *v == usize::MAX => *v = i,
            _ => panic!("Ordering is not a permutation (bad entry {o} at {i})"),
        }
    }
    ret
}
