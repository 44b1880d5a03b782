use bo_contour::DEFAULT_MAX_STEPS;
use bo_core::Vec2f;
use serde::{Deserialize, Serialize};

/// Parameters of one outline pass.
///
/// The illumination vector is in image coordinates (y down) and points
/// toward the light: `(0, 1)` lights the bottom edge of a shape. It is used
/// as given, without normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Bevel width in pixels. Values below 1 are treated as 1.
    pub border_width: i32,
    /// Upper bound on the per-channel brightness delta before lighting.
    pub max_strength: i32,
    /// Scale of the inverse-square falloff.
    pub rel_strength: f32,
    pub illum_x: f32,
    pub illum_y: f32,
    /// Tracer steps after which the pass gives up.
    pub max_steps: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            border_width: 4,
            max_strength: 128,
            rel_strength: 0.05,
            illum_x: 0.0,
            illum_y: 1.0,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl RenderSettings {
    /// Defaults with the border width derived from the image size,
    /// `max(width, height) / 20`.
    pub fn for_image(width: usize, height: usize) -> Self {
        let border_width = i32::try_from(width.max(height) / 20).unwrap_or(i32::MAX);
        Self {
            border_width: border_width.max(1),
            ..Self::default()
        }
    }

    /// Sets a unit illumination vector at `degrees` from the +x axis,
    /// clockwise on screen.
    pub fn with_illumination_angle(mut self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.illum_x = cos;
        self.illum_y = sin;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn effective_border_width(&self) -> usize {
        self.border_width.max(1) as usize
    }

    pub fn illumination(&self) -> Vec2f {
        Vec2f::new(self.illum_x, self.illum_y)
    }
}
