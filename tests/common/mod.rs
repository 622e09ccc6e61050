use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Dump report for a small fixture profile: a description tag, an 8-bit
/// B2A LUT, a 16-bit A2B LUT and a white-point tag.
pub const FIXTURE_REPORT: &str = "\
icc:
Header:
  size = 2212 bytes
tag 0: sig 'desc'
  type 'desc'
  ASCII description \"fixture profile\"
tag 1: sig 'B2A0'
  type 'mft1'
  Input channels = 3
  Output channels = 3
  Input Table entries = 2
  Output Table entries = 2
  Input table:
  0 255
  Output table:
  0 255
tag 2: sig 'A2B0'
  type 'mft2'
  Lut16
  Input channels = 3
  Output channels = 3
  Input Table entries = 4
  Output Table entries = 2
  Input table:
  0 21845 43690 65535
  Output table:
  0 65535
tag 3: sig 'wtpt'
  type 'XYZ'
  0.964203 1.000000 0.824905
";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub report: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let report = tmp.path().join("fixture-report.txt");
        fs::write(&report, FIXTURE_REPORT).expect("write fixture report");

        Self {
            _tmp: tmp,
            home,
            report,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("icclut").expect("icclut binary");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn report_path(&self) -> &str {
        self.report.to_str().expect("report path utf8")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_profile(&self) -> PathBuf {
        let path = self._tmp.path().join("fixture.icc");
        fs::write(&path, b"\x00\x00\x08\xa4ADBE").expect("write profile bytes");
        path
    }

    pub fn write_config(&self, tool: &std::path::Path) {
        let dir = self.home.join(".config/icclut");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(
            dir.join("config.toml"),
            format!("iccdump = \"{}\"\n", tool.display()),
        )
        .expect("write config file");
    }

    #[cfg(unix)]
    pub fn write_fake_iccdump(&self) -> PathBuf {
        self.write_tool(
            "iccdump",
            &format!("#!/usr/bin/env sh\ncat <<'EOF'\n{FIXTURE_REPORT}EOF\n"),
        )
    }

    #[cfg(unix)]
    pub fn write_failing_iccdump(&self) -> PathBuf {
        self.write_tool("iccdump-fail", "#!/usr/bin/env sh\nexit 3\n")
    }

    #[cfg(unix)]
    fn write_tool(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = self._tmp.path().join(name);
        fs::write(&path, script).expect("write tool script");
        let mut perms = fs::metadata(&path).expect("tool metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("set tool permissions");
        path
    }
}
