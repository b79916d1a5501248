use assert_cmd::Command;

pub fn tagtally_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagtally").unwrap();
    cmd.env_remove("TAGTALLY_ROOT");
    cmd
}
