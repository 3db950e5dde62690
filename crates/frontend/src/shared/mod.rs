pub mod components;
pub mod config;
pub mod delay;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
