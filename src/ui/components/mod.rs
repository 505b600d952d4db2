//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `StatusIndicator` - Loading spinner and empty/failed resource text
//! - `TabSelector` - Horizontal selector with a `▶` marker

mod dialog_frame;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{render_status_indicator, resource_status, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
