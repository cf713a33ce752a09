//! Input handling for the road builder.
//!
//! Split into sub-modules by concern:
//! - `types`: Resource types and enums (ActiveTool, CursorGridPos)
//! - `cursor`: Cursor-to-grid ray cast against the ground plane
//! - `tool_handler`: Mouse clicks turned into placement events
//! - `keyboard`: Tool hotkeys

mod cursor;
mod keyboard;
mod tool_handler;
mod types;


pub use types::{ActiveTool, CursorGridPos, ToolAction};

pub use cursor::{ground_hit, update_cursor_grid_pos};

pub use tool_handler::{handle_tool_input, tool_action};

pub use keyboard::keyboard_tool_switch;
