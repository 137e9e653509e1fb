//! Tests for the passcode stores

mod memory_store_tests;
