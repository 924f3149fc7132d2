//! # Using vectors and matrices together
//!
//! Scenarios that go through construction, access, comparison and arithmetic in one go.

mod test;
