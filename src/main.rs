//! Main Program for Descramble
//! Run with `--help` for more instruction

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

use std::path::PathBuf;

use anyhow::{bail, Context, Error};
use clap::{Parser, Subcommand};
use image::image_dimensions;

use descramble::{
    rearrange_tiles, read_ordering, scramble_tiles, seeded_rng, valid_input, write_ordering,
};

/// Parses `WxH`, or `N` for a square tile.
fn parse_tile_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s.split_once(['x', 'X']).unwrap_or((s, s));
    let w = w.trim().parse().map_err(|e| format!("bad tile width: {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad tile height: {e}"))?;
    Ok((w, h))
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reassemble a scrambled image
    Unscramble {
        /// Input file
        input: PathBuf,

        /// Tile size (WxH or N)
        #[arg(short = 't', long, value_parser = parse_tile_size)]
        tile_size: (u32, u32),

        /// Ordering file (one tile index per line)
        #[arg(short = 'r', long)]
        ordering: PathBuf,

        /// Output file
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Scramble tiles of an image and write the ordering that restores it
    Scramble {
        /// Input file
        input: PathBuf,

        /// Tile size (WxH or N)
        #[arg(short = 't', long, value_parser = parse_tile_size)]
        tile_size: (u32, u32),

        /// Random seed
        #[arg(long)]
        seed: Option<String>,

        /// Output file
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Ordering output file
        #[arg(short = 'r', long)]
        ordering: PathBuf,
    },

    /// Check tile size and ordering against an image
    Check {
        /// Input file
        input: PathBuf,

        /// Tile size (WxH or N)
        #[arg(short = 't', long, value_parser = parse_tile_size)]
        tile_size: (u32, u32),

        /// Ordering file (one tile index per line)
        #[arg(short = 'r', long)]
        ordering: PathBuf,
    },
}

fn main() -> Result<(), Error> {
    match Args::parse().command {
        Command::Unscramble {
            input,
            tile_size,
            ordering,
            output,
        } => {
            let ordering = read_ordering(&ordering)
                .with_context(|| format!("reading ordering {}", ordering.display()))?;

            rearrange_tiles(&input, tile_size, &ordering, &output)
                .with_context(|| format!("unscrambling {}", input.display()))?;
            println!("Wrote {}", output.display());
        }
        Command::Scramble {
            input,
            tile_size,
            seed,
            output,
            ordering,
        } => {
            if seed.is_none() {
                println!("WARNING: No seed given, result is not reproducible");
            }
            let mut random = seeded_rng(seed.as_deref());

            let order = scramble_tiles(&input, tile_size, &mut random, &output)
                .with_context(|| format!("scrambling {}", input.display()))?;
            write_ordering(&ordering, &order)
                .with_context(|| format!("writing ordering {}", ordering.display()))?;
            println!(
                "Wrote {} ({} tiles) and {}",
                output.display(),
                order.len(),
                ordering.display()
            );
        }
        Command::Check {
            input,
            tile_size,
            ordering,
        } => {
            let image_size = image_dimensions(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let ordering = read_ordering(&ordering)
                .with_context(|| format!("reading ordering {}", ordering.display()))?;

            if !valid_input(image_size, tile_size, &ordering) {
                bail!(descramble::Error::InvalidInput);
            }
            println!("OK: {} tiles", ordering.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tile_size() {
        assert_eq!(parse_tile_size("16x32"), Ok((16, 32)));
        assert_eq!(parse_tile_size("20X20"), Ok((20, 20)));
        assert_eq!(parse_tile_size("256"), Ok((256, 256)));
        assert!(parse_tile_size("16x").is_err());
        assert!(parse_tile_size("ax2").is_err());
    }

    #[test]
    fn test_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
