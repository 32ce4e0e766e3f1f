#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal caption alignment.
pub enum AlignX {
    /// Left edge.
    Left,
    /// Horizontal center.
    Center,
    /// Right edge.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Vertical caption alignment.
pub enum AlignY {
    /// Top edge.
    Top,
    /// Vertical center.
    Center,
    /// Bottom edge.
    Bottom,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Visual style for one caption overlay.
///
/// Colors are straight-alpha RGBA8; a zero alpha background is fully
/// transparent. Box dimensions bound the caption's layout area on the output
/// canvas.
pub struct CaptionStyle {
    /// Relative path to the font file.
    pub font_source: String,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Text color.
    pub color_rgba8: [u8; 4],
    /// Background fill behind the text.
    pub background_rgba8: [u8; 4],
    /// Stroke (outline) width in pixels.
    pub stroke_width_px: f32,
    /// Stroke color.
    pub stroke_rgba8: [u8; 4],
    /// Horizontal alignment inside the caption box.
    pub align_x: AlignX,
    /// Vertical alignment inside the caption box.
    pub align_y: AlignY,
    /// Extra spacing between wrapped lines, in pixels.
    pub line_spacing_px: f32,
    /// Caption box width in pixels.
    pub box_width_px: u32,
    /// Caption box height in pixels.
    pub box_height_px: u32,
}

impl Default for CaptionStyle {
    /// White bold text with a black outline over a fully transparent
    /// background, centered on a vertical 1080x1920 canvas.
    fn default() -> Self {
        Self {
            font_source: "assets/Roboto-Bold.ttf".to_string(),
            font_size_px: 80.0,
            color_rgba8: [255, 255, 255, 255],
            background_rgba8: [0, 0, 0, 0],
            stroke_width_px: 3.0,
            stroke_rgba8: [0, 0, 0, 255],
            align_x: AlignX::Center,
            align_y: AlignY::Center,
            line_spacing_px: 5.0,
            box_width_px: 1080,
            box_height_px: 1920,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/style.rs"]
mod tests;
