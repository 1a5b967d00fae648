//! Simulated outbound email alerts.
//!
//! Alerts are "sent" by appending a framed message to a text file under the
//! output directory. Fire-and-forget: callers get no delivery confirmation,
//! and I/O failures are logged rather than surfaced.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Default location of the simulated email log.
pub const ALERT_LOG_PATH: &str = "output/observer_emails.txt";

/// Appends a framed alert message to the file at `path`, creating the parent
/// directory if needed.
pub fn append_alert(path: &Path, to: &str, subject: &str, body: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(
        file,
        "---\nTo: {}\nSubject: {}\nMessage: {}\n---\n",
        to, subject, body
    )
}

/// Records a simulated email in the default alert log. Failures are logged
/// and swallowed so a broken sink can never poison a notification.
pub fn simulate_send_email(to: &str, subject: &str, body: &str) {
    if let Err(error) = append_alert(Path::new(ALERT_LOG_PATH), to, subject, body) {
        tracing::error!(%error, "failed to record simulated alert email");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_alert_writes_framed_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emails.txt");

        append_alert(&path, "a@b.com", "Hello", "Body text").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "---\nTo: a@b.com\nSubject: Hello\nMessage: Body text\n---\n"
        );
    }

    #[test]
    fn test_append_alert_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emails.txt");

        append_alert(&path, "a@b.com", "First", "one").unwrap();
        append_alert(&path, "a@b.com", "Second", "two").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let first = contents.find("Subject: First").unwrap();
        let second = contents.find("Subject: Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_append_alert_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/output/emails.txt");

        append_alert(&path, "a@b.com", "Hello", "Body").unwrap();

        assert!(path.exists());
    }
}
