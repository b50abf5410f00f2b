use assert_cmd::Command;

pub fn remit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("remit").unwrap();
    cmd.env_remove("REMIT_CONFIG");
    cmd.env_remove("REMIT_POLICY");
    cmd.env_remove("REMIT_DATE_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}
