use assert_cmd::Command;

/// A `sortbench-runner` command with colors switched off and a fixed seed
pub fn runner() -> Command {
    let mut command = Command::cargo_bin("sortbench-runner").unwrap();
    command
        .env("SORTBENCH_COLOR", "never")
        .env_remove("RUST_LOG")
        .env_remove("SORTBENCH_LOG")
        .env_remove("SORTBENCH_START")
        .env_remove("SORTBENCH_END")
        .env_remove("SORTBENCH_FACTOR")
        .env_remove("SORTBENCH_OUTPUT_FORMAT")
        .env_remove("SORTBENCH_STORES")
        .env("SORTBENCH_SEED", "42");
    command
}
