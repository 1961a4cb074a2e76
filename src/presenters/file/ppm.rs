use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::BYTES_PER_PIXEL;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes buffers as binary PPM (`P6`). Alpha is dropped; every engine pixel is opaque.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6: binary RGB, then width, height and max colour value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;

    for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
        writer.write_all(&pixel[..3])?;
    }

    Ok(())
}
