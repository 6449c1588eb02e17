//! Integration tests for Spotlight-Harvest

mod client_tests;
