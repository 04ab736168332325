//! Client-side state containers for the folder explorer.

pub mod explorer;
pub mod move_picker;

pub use explorer::{ExplorerState, NavigationTicket};
pub use move_picker::{MovePickerState, MoveRequest};
