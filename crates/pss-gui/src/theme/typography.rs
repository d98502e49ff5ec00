//! Font sizes and text limits, sizes in logical pixels.

// =============================================================================
// FONT SIZES
// =============================================================================

/// Hints, badges, relative timestamps
pub const FONT_SIZE_CAPTION: f32 = 11.0;

/// Secondary labels and list metadata
pub const FONT_SIZE_SMALL: f32 = 12.0;

/// Default body text
pub const FONT_SIZE_BODY: f32 = 14.0;

/// Emphasized rows and form titles
pub const FONT_SIZE_SUBTITLE: f32 = 16.0;

/// Section headers
pub const FONT_SIZE_TITLE: f32 = 20.0;

/// Page headers
pub const FONT_SIZE_HEADING: f32 = 24.0;

/// The welcome hero and overview stat values
pub const FONT_SIZE_DISPLAY: f32 = 32.0;

// =============================================================================
// LIMITS
// =============================================================================

/// Longest accepted competition, station, group, or patrol name
pub const MAX_CHARS_NAME: usize = 80;

/// Longest accepted station description
pub const MAX_CHARS_DESCRIPTION: usize = 500;
