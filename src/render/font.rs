use ab_glyph::FontRef;

use crate::error::AppError;

// DejaVu Sans, see assets/DejaVuSans.LICENSE
const FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// # Errors
///
/// Will return `Err` if the embedded font is not a usable TrueType font
pub fn chart_font() -> Result<FontRef<'static>, AppError> {
    FontRef::try_from_slice(FONT_DATA).map_err(|e| AppError::Render(format!("font: {e}")))
}
