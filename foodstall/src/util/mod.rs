/// Set of functions used throughout to assure the correctness of the planner.
pub mod assertions;
