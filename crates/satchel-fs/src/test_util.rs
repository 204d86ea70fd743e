use std::process::{Command, ExitStatus, Stdio};

const CHILD_ENV: &str = "SATCHEL_FS_TEST_CHILD";

/// True inside a test binary spawned by [`run_in_child`].
pub(crate) fn in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

/// Re-run this test binary, restricted to the test at `path`, and return
/// its exit status. A filter that matches nothing exits with 0.
pub(crate) fn run_in_child(path: &str) -> ExitStatus {
    let exe = std::env::current_exe().unwrap();
    Command::new(exe)
        .args([path, "--exact", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap()
}
