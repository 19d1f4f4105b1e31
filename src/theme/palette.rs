//! Color constants and font size tokens.

use bevy::prelude::*;

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/prompt text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// HUD readout (pale cyan).
pub const HUD_TEXT: Color = Color::srgb(0.6, 0.95, 1.0);

// === UI Backgrounds ===

/// Semi-transparent dark overlay for pause/modal screens.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

// === World Colors ===

/// Clear color behind the starfield; also fills the letterbox bars.
pub const SPACE_BACKGROUND: Color = Color::srgb(0.01, 0.01, 0.03);

pub const BOARD_OUTLINE: Color = Color::srgba(0.4, 0.4, 0.7, 0.5);
pub const PLAYER_SHIP: Color = Color::srgb(0.3, 0.85, 1.0);
pub const BULLET: Color = Color::srgb(1.0, 1.0, 0.3);
pub const DEBUG_BODY: Color = Color::srgb(0.55, 0.45, 0.4);
pub const EXPLOSION: Color = Color::srgb(1.0, 0.55, 0.1);

// === Font Size Tokens ===

pub const FONT_SIZE_TITLE: f32 = 72.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_HUD: f32 = 28.0;
pub const FONT_SIZE_PROMPT: f32 = 24.0;
