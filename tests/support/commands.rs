//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// A ghsecret command with an empty environment.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghsecret").expect("failed to find ghsecret binary");
        cmd.env_clear();
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// A ghsecret command with GH_KEY and GH_KEY_ID set.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("GH_KEY", self.public_key_b64());
        cmd.env("GH_KEY_ID", &self.key_id);
        cmd
    }

    /// Seal bytes passed on stdin.
    pub fn seal_stdin(&self, input: &[u8]) -> Output {
        self.cmd()
            .write_stdin(input.to_vec())
            .output()
            .expect("failed to run ghsecret")
    }

    /// Seal the value of an env var named on the command line.
    pub fn seal_var(&self, name: &str, value: &str) -> Output {
        self.cmd()
            .env(name, value)
            .arg(name)
            .output()
            .expect("failed to run ghsecret")
    }
}
