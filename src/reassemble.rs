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

use std::fs::{write, File};
use std::io::{BufReader, Cursor};
use std::path::Path;

use image::error::{ParameterError, ParameterErrorKind};
use image::io::Reader as ImageReader;
use image::{write_buffer_with_format, DynamicImage, GenericImageView, ImageError, ImageFormat};
use ndarray::prelude::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::permute::{invert_ordering, permute_tiles};
use crate::validate::{tile_count, valid_input};

fn load(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::new(BufReader::new(File::open(path)?))
        .with_guessed_format()?
        .decode()?)
}

// Permutes tiles over the raw channel bytes, so any pixel format passes through untouched.
fn permute_image(im: &DynamicImage, tile_size: (u32, u32), ordering: &[usize]) -> Result<Vec<u8>> {
    let arr = <ArrayView3<u8>>::from_shape(
        (
            im.height() as usize,
            im.width() as usize,
            im.color().bytes_per_pixel() as usize,
        ),
        im.as_bytes(),
    )
    .map_err(|_| {
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
    })?;

    let out = permute_tiles(arr, tile_size, ordering).ok_or(Error::InvalidInput)?;

    // Standard layout, inherited from the decoded buffer.
    Ok(out.into_raw_vec())
}

// Encodes fully in memory first, so a failed encode never touches `path`.
fn save(path: &Path, im: &DynamicImage, buf: &[u8]) -> Result<()> {
    let format = ImageFormat::from_path(path)?;

    let mut encoded = Cursor::new(Vec::new());
    write_buffer_with_format(
        &mut encoded,
        buf,
        im.width(),
        im.height(),
        im.color(),
        format,
    )?;

    write(path, encoded.into_inner())?;
    Ok(())
}

/// Reassembles a scrambled image.
///
/// Loads `input`, puts scrambled tile `ordering[i]` into slot `i`
/// and saves the result to `output` in the same color type.
/// The output encoding is picked from its file extension.
///
/// Returns [Error::InvalidInput] without writing anything
/// if `tile_size` or `ordering` is not valid for the image (see [valid_input]).
pub fn rearrange_tiles(
    input: impl AsRef<Path>,
    tile_size: (u32, u32),
    ordering: &[usize],
    output: impl AsRef<Path>,
) -> Result<()> {
    rearrange_tiles_with(valid_input, input, tile_size, ordering, output)
}

/// Same as [rearrange_tiles], but with a custom validator.
///
/// `validate` is called once, with the image `(width, height)`,
/// `tile_size` and `ordering`, before any tile is moved.
/// An ordering it accepts but that does not fit the tile grid
/// still results in [Error::InvalidInput].
pub fn rearrange_tiles_with<F>(
    validate: F,
    input: impl AsRef<Path>,
    tile_size: (u32, u32),
    ordering: &[usize],
    output: impl AsRef<Path>,
) -> Result<()>
where
    F: FnOnce((u32, u32), (u32, u32), &[usize]) -> bool,
{
    let im = load(input.as_ref())?;

    if !validate(im.dimensions(), tile_size, ordering) {
        return Err(Error::InvalidInput);
    }

    let buf = permute_image(&im, tile_size, ordering)?;
    save(output.as_ref(), &im, &buf)
}

/// Scrambles tiles of an image.
///
/// Loads `input`, shuffles its tiles randomly and saves it to `output`.
/// Returns the ordering that restores it with [rearrange_tiles].
///
/// Returns [Error::InvalidInput] if `tile_size` does not divide the image.
pub fn scramble_tiles<R: Rng + ?Sized>(
    input: impl AsRef<Path>,
    tile_size: (u32, u32),
    random: &mut R,
    output: impl AsRef<Path>,
) -> Result<Vec<usize>> {
    let im = load(input.as_ref())?;

    let count = tile_count(im.dimensions(), tile_size).ok_or(Error::InvalidInput)?;
    let mut ordering: Vec<_> = (0..count).collect();
    ordering.shuffle(random);

    let buf = permute_image(&im, tile_size, &invert_ordering(&ordering))?;
    save(output.as_ref(), &im, &buf)?;

    Ok(ordering)
}

/// Random generator for [scramble_tiles].
///
/// A seed string is hashed into the generator state, so the same seed
/// always gives the same scramble. Without seed, uses system entropy.
pub fn seeded_rng(seed: Option<&str>) -> Xoshiro256StarStar {
    if let Some(seed) = seed {
        let mut hasher = Sha256::new();
        hasher.update(seed);

        Xoshiro256StarStar::from_seed(hasher.finalize().into())
    } else {
        Xoshiro256StarStar::from_entropy()
    }
}
