//! Library to reassemble tile-scrambled images.
//!
//! An image is cut into equal-size rectangular tiles, numbered row-major
//! from the top-left corner. An *ordering* says which scrambled tile
//! belongs in each slot: slot `i` receives tile `ordering[i]`.
//!
//! * [valid_input] checks that a tile size and ordering fit an image.
//! * [rearrange_tiles] reassembles a scrambled image file.
//! * [scramble_tiles] does the reverse, producing a scrambled image and
//!   the ordering that undoes it.

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//

mod error;
mod ordering;
mod permute;
mod reassemble;
mod validate;

#[doc(inline)]
pub use crate::error::{Error, Result, INVALID_INPUT_MESSAGE};
#[doc(inline)]
pub use crate::ordering::{parse_ordering, read_ordering, write_ordering};
#[doc(inline)]
pub use crate::permute::{invert_ordering, permute_tiles};
#[doc(inline)]
pub use crate::reassemble::{
    rearrange_tiles, rearrange_tiles_with, scramble_tiles, seeded_rng,
};
#[doc(inline)]
pub use crate::validate::{tile_count, valid_input};
