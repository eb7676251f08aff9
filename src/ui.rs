//! Rendering for the typedeck character display.
//!
//! The functions in [render] turn model state into [crate::hal::Screen]
//! calls. They decide *what* appears on screen; how the screen encodes
//! clearing and highlighting is the HAL's concern.

pub mod render;

pub use render::{
    COLUMN_WIDTH, draw_columns, draw_editor, draw_new_file, draw_new_folder, draw_rename,
};
