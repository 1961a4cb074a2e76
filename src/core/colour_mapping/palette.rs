use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_result::IterationResult;

/// Upper bound on lookup table entries. Caps above this share entries.
pub const MAX_PALETTE_ENTRIES: usize = 65_536;

/// Pre-mapped RGBA entries for escape counts in `[0, max_iterations]`, plus the interior.
///
/// Built once per engine so the render loop is a table lookup. Up to [`MAX_PALETTE_ENTRIES`]
/// counts get an entry each; beyond that counts are spread evenly over the table, with the
/// first and last entries still matching counts `0` and `max_iterations` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    escaped: Vec<[u8; 4]>,
    interior: [u8; 4],
    max_iterations: u32,
}

impl Palette {
    #[must_use]
    pub fn build<CMap: ColourMap + ?Sized>(colour_map: &CMap, max_iterations: u32) -> Self {
        let entries = (u64::from(max_iterations) + 1).min(MAX_PALETTE_ENTRIES as u64);
        let escaped = (0..entries)
            .map(|index| {
                let count = count_at(index, entries, max_iterations);
                colour_map.map(IterationResult::escaped_at(count)).to_rgba()
            })
            .collect();
        let interior = colour_map
            .map(IterationResult::bounded(max_iterations))
            .to_rgba();

        Self {
            escaped,
            interior,
            max_iterations,
        }
    }

    #[inline]
    #[must_use]
    pub fn rgba(&self, result: IterationResult) -> [u8; 4] {
        if !result.escaped {
            return self.interior;
        }

        let count = u64::from(result.count.min(self.max_iterations));
        let last = self.escaped.len() as u64 - 1;
        let index = if last == u64::from(self.max_iterations) {
            count
        } else {
            count * last / u64::from(self.max_iterations)
        };

        self.escaped[index as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.escaped.len()
    }
}

/// Escape count sampled by table entry `index` out of `entries`.
fn count_at(index: u64, entries: u64, max_iterations: u32) -> u32 {
    let last = entries - 1;

    if last == u64::from(max_iterations) {
        return index as u32;
    }

    (index * u64::from(max_iterations) / last) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::factory::colour_map_factory;
    use crate::core::colour_mapping::kinds::ColourMapKind;

    #[test]
    fn test_palette_has_an_entry_per_count() {
        let colour_map = colour_map_factory(ColourMapKind::FireGradient, 100);
        let palette = Palette::build(&colour_map, 100);

        assert_eq!(palette.len(), 101);
    }

    #[test]
    fn test_palette_matches_direct_mapping() {
        for &kind in ColourMapKind::ALL {
            let colour_map = colour_map_factory(kind, 64);
            let palette = Palette::build(&colour_map, 64);

            for count in 0..=64 {
                let result = IterationResult::escaped_at(count);
                assert_eq!(palette.rgba(result), colour_map.map(result).to_rgba());
            }

            let interior = IterationResult::bounded(64);
            assert_eq!(palette.rgba(interior), [0, 0, 0, 255]);
        }
    }

    #[test]
    fn test_large_cap_is_spread_over_bounded_table() {
        let colour_map = colour_map_factory(ColourMapKind::FireGradient, u32::MAX);
        let palette = Palette::build(&colour_map, u32::MAX);

        assert_eq!(palette.len(), MAX_PALETTE_ENTRIES);
        for count in [0, u32::MAX] {
            let result = IterationResult::escaped_at(count);
            assert_eq!(palette.rgba(result), colour_map.map(result).to_rgba());
        }
        assert_eq!(palette.rgba(IterationResult::bounded(u32::MAX)), [0, 0, 0, 255]);
    }

    #[test]
    fn test_cap_at_table_size_keeps_exact_entries() {
        let max_iterations = (MAX_PALETTE_ENTRIES - 1) as u32;
        let colour_map = colour_map_factory(ColourMapKind::Grayscale, max_iterations);
        let palette = Palette::build(&colour_map, max_iterations);

        assert_eq!(palette.len(), MAX_PALETTE_ENTRIES);
        for count in [1, 777, 40_000, max_iterations] {
            let result = IterationResult::escaped_at(count);
            assert_eq!(palette.rgba(result), colour_map.map(result).to_rgba());
        }
    }

    #[test]
    fn test_palette_pins_counts_above_cap() {
        let colour_map = colour_map_factory(ColourMapKind::Grayscale, 10);
        let palette = Palette::build(&colour_map, 10);

        assert_eq!(
            palette.rgba(IterationResult::escaped_at(1000)),
            palette.rgba(IterationResult::escaped_at(10))
        );
    }
}
