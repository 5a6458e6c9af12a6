use truesheet_ui_graphics::{Density, Px};
use truesheet_ui_layout::{SheetSize, SheetSizes};

/// Host configuration for a sheet.
///
/// Defaults to `["medium", "large"]`, no height cap and baseline density.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SheetConfig {
    pub sizes: SheetSizes,
    /// Ceiling applied to every resolved height.
    pub max_height: Option<Px>,
    pub density: Density,
}

impl SheetConfig {
    pub fn with_sizes<I>(mut self, sizes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SheetSize>,
    {
        self.sizes = SheetSizes::new(sizes);
        self
    }

    pub fn with_max_height(mut self, max_height: Px) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }
}
