use rayon::prelude::*;

use crate::core::colour_mapping::palette::Palette;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::BYTES_PER_PIXEL;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    #[error("{cells} iteration results cannot fill a buffer of {pixels} pixels")]
    CellCountMismatch { cells: usize, pixels: usize },
}

/// Colours `cells` through `palette` into `pixel_buffer`, overwriting every byte in place.
pub fn generate_pixel_buffer(
    cells: &[IterationResult],
    palette: &Palette,
    pixel_buffer: &mut PixelBuffer,
) -> Result<(), GeneratePixelBufferError> {
    let pixels = pixel_buffer.pixel_rect().size();

    if cells.len() != pixels {
        return Err(GeneratePixelBufferError::CellCountMismatch {
            cells: cells.len(),
            pixels,
        });
    }

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(cells.par_iter())
        .for_each(|(pixel, &cell)| pixel.copy_from_slice(&palette.rgba(cell)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
    use crate::core::colour_mapping::kinds::ColourMapKind;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap for StubColourMap {
        fn map(&self, result: IterationResult) -> Colour {
            if !result.escaped {
                return Colour::BLACK;
            }

            let value = result.count as u8;
            Colour {
                r: value,
                g: value,
                b: value,
            }
        }

        fn kind(&self) -> ColourMapKind {
            ColourMapKind::Grayscale
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let cells = vec![
            IterationResult::escaped_at(1),
            IterationResult::escaped_at(2),
            IterationResult::bounded(10),
            IterationResult::escaped_at(4),
        ];
        let palette = Palette::build(&StubColourMap {}, 10);
        let mut pixel_buffer = PixelBuffer::new(PixelRect::new(2, 2).unwrap());

        generate_pixel_buffer(&cells, &palette, &mut pixel_buffer).unwrap();

        assert_eq!(
            pixel_buffer.buffer(),
            &[1, 1, 1, 255, 2, 2, 2, 255, 0, 0, 0, 255, 4, 4, 4, 255]
        );
        assert_eq!(pixel_buffer.pixel(Point { x: 0, y: 1 }), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let cells = vec![IterationResult::escaped_at(1); 6];
        let palette = Palette::build(&StubColourMap {}, 10);
        let mut pixel_buffer = PixelBuffer::new(PixelRect::new(2, 2).unwrap());

        assert_eq!(
            generate_pixel_buffer(&cells, &palette, &mut pixel_buffer),
            Err(GeneratePixelBufferError::CellCountMismatch {
                cells: 6,
                pixels: 4
            })
        );
    }

    #[test]
    fn test_buffer_length_is_unchanged() {
        let pixel_rect = PixelRect::new(5, 3).unwrap();
        let cells = vec![IterationResult::escaped_at(3); pixel_rect.size()];
        let palette = Palette::build(&StubColourMap {}, 10);
        let mut pixel_buffer = PixelBuffer::new(pixel_rect);

        generate_pixel_buffer(&cells, &palette, &mut pixel_buffer).unwrap();

        assert_eq!(pixel_buffer.buffer_size(), 5 * 3 * 4);
    }
}
