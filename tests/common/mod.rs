use std::io::Write;

use tempfile::NamedTempFile;

pub const CONFIG: &str = r#"
portal:
  redirects:
    app: /dashboard
  tokens:
    - { token: t-student, id: u1, name: Sara, role: student }
    - { token: t-teacher, id: u2, name: Omar, role: teacher }
    - { token: t-admin, id: u3, name: Layla, role: admin }
    - { token: t-norole, id: u4, name: Nour }
    - { token: t-expired, id: u5, name: Ali, role: admin, expires_at: 2020-01-01T00:00:00Z }
  routes:
    - { name: landing, path: /, access: public }
    - { name: login, path: /login, access: public_only }
    - { name: dashboard, path: /dashboard }
    - { name: exams, path: "/academy/:slug/exams/*", roles: [teacher, admin] }
    - { name: admin, path: "/admin/*", roles: [admin] }
"#;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes())
        .expect("write temp config");
    file
}

pub fn config() -> edrak::config::Config {
    serde_yaml::from_str(CONFIG).expect("parse test config")
}
