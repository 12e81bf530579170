//! Compile-fail tests to verify error messages
//!
//! These tests ensure that invalid field types and attribute combinations
//! produce clear errors pointing at the offending tokens.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
