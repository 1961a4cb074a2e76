use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::{
    blue_white_gradient::BlueWhiteGradient, cosine_ramp::CosineRamp, fire_gradient::FireGradient,
    grayscale::Grayscale,
};

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::CosineRamp => Box::new(CosineRamp::new(max_iterations)),
        ColourMapKind::FireGradient => Box::new(FireGradient::new(max_iterations)),
        ColourMapKind::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(max_iterations)),
        ColourMapKind::Grayscale => Box::new(Grayscale::new(max_iterations)),
    }
}
