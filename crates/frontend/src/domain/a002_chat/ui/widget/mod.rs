//! Floating chat widget (MVVM)
//!
//! - view_model.rs: ChatWidgetVm with RwSignals
//! - view.rs: ChatWidget component mounted by the shell

mod view;
mod view_model;

pub use view::ChatWidget;
pub use view_model::ChatWidgetVm;
