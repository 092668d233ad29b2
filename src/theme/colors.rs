//! Color constants for the Connect campus palette.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_SUNKEN: &str = "#f4f5f7";
pub const SURFACE_RAISED: &str = "#fafbfc";
pub const BORDER: &str = "#e3e6ea";

// === INDIGO (Primary, Actions, Selection) ===
pub const INDIGO: &str = "#4c5fd5";
pub const INDIGO_DEEP: &str = "#3a4bb8";
pub const INDIGO_TINT: &str = "rgba(76, 95, 213, 0.12)";

// === STATUS ===
pub const ONLINE_GREEN: &str = "#2ebd6b";
pub const TYPING_BLUE: &str = "#3d8bff";
pub const OFFLINE_GREY: &str = "#b3bac4";
pub const PIN_AMBER: &str = "#f0a92e";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1c2330";
pub const TEXT_SECONDARY: &str = "rgba(28, 35, 48, 0.68)";
pub const TEXT_MUTED: &str = "rgba(28, 35, 48, 0.45)";
pub const TEXT_ON_PRIMARY: &str = "#ffffff";

// === SEMANTIC ===
pub const DANGER: &str = "#d64550";
pub const DANGER_TINT: &str = "rgba(214, 69, 80, 0.1)";
pub const READ_ACCENT: &str = "#3db2ff";
