pub mod badge;
pub mod checkbox;
pub mod input;
pub mod select;

pub use badge::{AvailabilityBadge, Badge, BadgeTone};
pub use checkbox::Checkbox;
pub use input::Input;
pub use select::Select;
