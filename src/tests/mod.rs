//! Internal test modules - whitebox tests with crate access
