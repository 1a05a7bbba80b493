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

use std::fmt;

/// Message carried by [Error::InvalidInput].
pub const INVALID_INPUT_MESSAGE: &str =
    "The tile size or ordering are not valid for the given image";

/// Error returned by every fallible operation of this crate.
#[derive(Debug)]
pub enum Error {
    /// Tile size or ordering does not fit the image.
    InvalidInput,

    /// Reading or writing a file failed.
    Io(std::io::Error),

    /// Decoding or encoding an image failed.
    ///
    /// I/O failures reported by the codec are [Error::Io] instead.
    Image(image::ImageError),

    /// Ordering text is malformed.
    Ordering {
        /// 1-based line number.
        line: usize,
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => f.write_str(INVALID_INPUT_MESSAGE),
            Self::Io(e) => fmt::Display::fmt(e, f),
            Self::Image(e) => fmt::Display::fmt(e, f),
            Self::Ordering { line, reason } => write!(f, "Invalid ordering at line {line}: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => std::error::Error::source(e),
            Self::Image(e) => std::error::Error::source(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::Io(e),
            e => Self::Image(e),
        }
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
