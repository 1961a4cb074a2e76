use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_result::IterationResult;

/// Pure mapping from an escape-time result to a colour.
///
/// Equal inputs always produce equal colours, and points that never escaped map to the
/// interior colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, result: IterationResult) -> Colour;

    fn kind(&self) -> ColourMapKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, result: IterationResult) -> Colour {
        (**self).map(result)
    }

    fn kind(&self) -> ColourMapKind {
        (**self).kind()
    }
}
