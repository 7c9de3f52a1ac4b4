//! Tests for the identity store
