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

/// Number of tiles of `tile_size` that exactly cover `image_size`.
///
/// Returns [None] if either tile dimension is zero or does not
/// divide the image dimension.
pub fn tile_count(image_size: (u32, u32), tile_size: (u32, u32)) -> Option<usize> {
    let (w, h) = image_size;
    let (tw, th) = tile_size;

    if tw == 0 || th == 0 || w % tw != 0 || h % th != 0 {
        return None;
    }

    Some((w / tw) as usize * (h / th) as usize)
}

/// Checks that `tile_size` and `ordering` are valid for an image of `image_size`.
///
/// Valid means:
/// * Tile size divides image size with no remainder in both dimensions.
/// * `ordering` has exactly one entry per tile.
/// * `ordering` is a permutation of `0..tile_count`.
///
/// Sizes are `(width, height)`.
pub fn valid_input(image_size: (u32, u32), tile_size: (u32, u32), ordering: &[usize]) -> bool {
    let Some(count) = tile_count(image_size, tile_size) else {
        return false;
    };
    if ordering.len() != count {
        return false;
    }

    let mut seen = vec![false; count];
    for &i in ordering {
        match seen.get_mut(i) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }

    true
}
