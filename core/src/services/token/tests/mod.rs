//! Tests for the token lifecycle module

#[cfg(test)]
mod service_tests;
