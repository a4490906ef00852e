use ior_args_testing::TestWorld;

// Snapshot tests - full reference sweep rendered through the binary
#[test]
fn test_reference_sweep_markdown_snapshot() {
    let world = TestWorld::new().with_reference_sweep();

    let result = world.run(&[]).expect("Failed to run ior-args");
    assert!(result.success(), "stderr: {}", result.stderr());

    insta::assert_snapshot!("reference_sweep_markdown", result.stdout());
}
