/// Desktop notifications
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when the countdown runs out
pub fn notify_session_complete(tasks_done: usize, tasks_total: usize) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "Time's up! {} of {} tasks done" with title "isostudy - Session Complete""#,
            tasks_done, tasks_total
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!("Notification failed: {}", e);
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (tasks_done, tasks_total);
    }
}
