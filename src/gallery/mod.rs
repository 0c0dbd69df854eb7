//! Gallery view state
//!
//! A `GallerySession` is the state a gallery view owns while it is open: the
//! current [`FilterState`](crate::filters::FilterState) and whether the detail
//! modal is showing an item. It holds no items itself; callers pass the store's
//! item slice in when they need the visible list or the active item.

pub mod session;

pub use session::{GallerySession, ModalState};
