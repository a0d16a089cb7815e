// Small helpers shared by the app and UI.

use chrono::{DateTime, Datelike, Utc};

/// Open a URL in the default browser without blocking the UI.
///
/// Uses `xdg-open`, falling back to `open` on macOS, or `cmd /c start` on
/// Windows. Failures are logged and otherwise ignored.
#[cfg_attr(test, allow(unused_variables))]
pub fn open_url(url: &str) {
    // Skip actual spawning during tests
    #[cfg(not(test))]
    {
        use std::process::{Command, Stdio};

        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            let spawned = Command::new("cmd")
                .args(["/c", "start", "", &url])
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            #[cfg(not(target_os = "windows"))]
            let spawned = Command::new("xdg-open")
                .arg(&url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .or_else(|_| {
                    Command::new("open")
                        .arg(&url)
                        .stdin(Stdio::null())
                        .stdout(Stdio::null())
                        .stderr(Stdio::null())
                        .spawn()
                });

            if let Err(e) = spawned {
                tracing::warn!(url = %url, error = %e, "failed to open browser");
            }
        });
    }
}

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 365 {
        format!("{}y ago", duration.num_days() / 365)
    } else if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Footer line, e.g. "© 2026 octocat".
pub fn copyright(user: &str, now: DateTime<Utc>) -> String {
    format!("© {} {}", now.year(), user)
}
