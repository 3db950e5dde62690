pub mod d400_allocation_results;

pub use d400_allocation_results::ui::dashboard::AllocationResultsDashboard;
