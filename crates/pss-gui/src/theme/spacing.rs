//! Layout constants, all in logical pixels.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Gap between tightly related elements (icon and its label)
pub const SPACING_XS: f32 = 4.0;

/// Gap inside rows and compact cards
pub const SPACING_SM: f32 = 8.0;

/// Default padding and gap between fields
pub const SPACING_MD: f32 = 16.0;

/// Gap between sections of a page
pub const SPACING_LG: f32 = 24.0;

/// Page margins
pub const SPACING_XL: f32 = 32.0;

/// Breathing room around the welcome hero
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Buttons, inputs, the score entry field
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Cards and list rows
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Modals and toasts
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Pill shape for badges and section chips
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

/// Hairline card borders and separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

/// Focused inputs and the selected chip outline
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Icons inline with body text
pub const ICON_SIZE_SM: f32 = 16.0;

/// Icons in buttons and list rows
pub const ICON_SIZE_MD: f32 = 20.0;

/// Icons leading a page header
pub const ICON_SIZE_LG: f32 = 24.0;

/// Standard single-line input height
pub const INPUT_HEIGHT: f32 = 36.0;

// =============================================================================
// LAYOUT WIDTHS
// =============================================================================

/// Station list panel in the scoring master-detail layout
pub const MASTER_WIDTH: f32 = 320.0;

/// Confirmation modals
pub const MODAL_WIDTH_SM: f32 = 320.0;

/// Standard modals (unsaved changes, errors)
pub const MODAL_WIDTH_MD: f32 = 480.0;

/// Centered settings column
pub const SETTINGS_WIDTH: f32 = 600.0;

// =============================================================================
// TAB BAR
// =============================================================================

/// Horizontal padding inside a setup tab
pub const TAB_PADDING_X: f32 = 16.0;

/// Vertical padding inside a setup tab
pub const TAB_PADDING_Y: f32 = 8.0;
