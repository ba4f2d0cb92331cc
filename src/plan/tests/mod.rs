//! Unit tests for the planning engine.

mod support;
