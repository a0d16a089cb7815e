// State management module.
// Holds the view state the UI draws from.

pub mod panel;

pub use panel::{EMPTY_TEXT, ERROR_TEXT, LOADING_TEXT, PanelBody, PanelView};
