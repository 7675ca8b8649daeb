/// Load state of a background image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageLoad {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl ImageLoad {
    /// State for an element that may already have finished before any
    /// listener was attached. A complete image with no intrinsic width is a
    /// broken image.
    pub fn from_element(complete: bool, natural_width: u32) -> Self {
        match (complete, natural_width) {
            (false, _) => ImageLoad::Loading,
            (true, 0) => ImageLoad::Failed,
            (true, _) => ImageLoad::Loaded,
        }
    }

    /// Returns the state after a `load` event and whether it is a new load.
    pub fn on_load(self) -> (Self, bool) {
        match self {
            ImageLoad::Loading => (ImageLoad::Loaded, true),
            other => (other, false),
        }
    }

    /// Returns the state after an `error` event.
    pub fn on_error(self) -> Self {
        ImageLoad::Failed
    }

    pub fn shows_fallback(&self) -> bool {
        matches!(self, ImageLoad::Failed)
    }

    pub fn shows_spinner(&self) -> bool {
        matches!(self, ImageLoad::Loading)
    }
}
