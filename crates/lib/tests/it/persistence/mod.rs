//! Persistence integration tests

mod roundtrip_tests;
