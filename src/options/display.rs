use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Output surface and host-document settings.
pub struct DisplayOptions {
    /// Render with 4x multisampling.
    pub antialias: bool,
    /// Window title (native viewer).
    pub title: String,
    /// Element id of the render canvas (web).
    pub canvas_id: String,
    /// Selector matching the heading elements moved by scrolling (web).
    pub heading_selector: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            title: "Planets".into(),
            canvas_id: "canvas".into(),
            heading_selector: "#heading".into(),
        }
    }
}

impl DisplayOptions {
    /// MSAA sample count implied by [`antialias`](Self::antialias).
    #[must_use]
    pub fn sample_count(&self) -> u32 {
        if self.antialias {
            4
        } else {
            1
        }
    }
}
