//! Integration tests against a mock HTTP service

mod api_tests;
