//! Frame export.
//!
//! Writes finished frames to disk, either as binary PPM (`P6`) or as PNG
//! via the `image` crate. Export reads the pixel buffer as a snapshot and
//! never mutates it; I/O failures are returned to the caller and leave the
//! in-memory buffer untouched.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::colors::unpack_color;

/// Writes a binary PPM (`P6`) image to the given sink.
///
/// The format is exactly `P6\n<width> <height>\n255\n` followed by raw
/// interleaved R,G,B bytes, row-major, top-to-bottom. This layout is
/// load-bearing for interop with standard PPM readers.
pub fn write_ppm<W: Write>(
    mut sink: W,
    pixels: &[u32],
    width: u32,
    height: u32,
) -> io::Result<()> {
    debug_assert_eq!(pixels.len(), (width * height) as usize);
    write!(sink, "P6\n{} {}\n255\n", width, height)?;
    let mut row = Vec::with_capacity(width as usize * 3);
    for y in 0..height {
        row.clear();
        for x in 0..width {
            let (r, g, b) = unpack_color(pixels[(y * width + x) as usize]);
            row.extend_from_slice(&[r, g, b]);
        }
        sink.write_all(&row)?;
    }
    sink.flush()
}

/// Saves a frame as a binary PPM file.
pub fn save_ppm<P: AsRef<Path>>(
    path: P,
    pixels: &[u32],
    width: u32,
    height: u32,
) -> io::Result<()> {
    let file = File::create(path)?;
    write_ppm(BufWriter::new(file), pixels, width, height)
}

/// Saves a frame as a PNG file.
pub fn save_png<P: AsRef<Path>>(
    path: P,
    pixels: &[u32],
    width: u32,
    height: u32,
) -> Result<(), image::ImageError> {
    let mut img = image::RgbImage::new(width, height);
    for (i, pixel) in img.pixels_mut().enumerate() {
        let (r, g, b) = unpack_color(pixels[i]);
        *pixel = image::Rgb([r, g, b]);
    }
    img.save(path)
}

/// Records successive frames as numbered PPM files in one directory.
pub struct FrameRecorder {
    dir: PathBuf,
    frame: u32,
}

impl FrameRecorder {
    pub fn new<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            frame: 0,
        })
    }

    /// Write the next frame; file names count up as `frame_0000.ppm`.
    pub fn capture(&mut self, pixels: &[u32], width: u32, height: u32) -> io::Result<PathBuf> {
        let path = self.dir.join(format!("frame_{:04}.ppm", self.frame));
        save_ppm(&path, pixels, width, height)?;
        self.frame += 1;
        Ok(path)
    }

    pub fn frames_written(&self) -> u32 {
        self.frame
    }
}
