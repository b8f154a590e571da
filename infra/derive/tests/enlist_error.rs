#[test]
fn enlist_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/enlist_error_pass.rs");
}
