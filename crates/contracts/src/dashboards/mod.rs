pub mod d400_allocation_results;
