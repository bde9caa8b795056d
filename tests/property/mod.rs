//! Property-based tests for planning, ordering, and history invariants

mod history;
mod outcomes;
mod planning;
