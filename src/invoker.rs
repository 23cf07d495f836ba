//! OS-level effects for action kinds.
//!
//! Every effect is best-effort: it runs on a short-lived thread, reports its
//! outcome over the injected event channel, and is never retried. Command
//! execution sits behind a trait so tests observe outcomes without touching
//! the OS.

use std::process::Command;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::actions::ActionKind;
use crate::constants::volume;
use crate::events::AppEvent;

/// Executes a command line and returns its stdout on success.
pub trait CommandRunner: Send + Sync + 'static {
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Spawns real processes.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to spawn {program}"))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Fires OS effects and reports outcomes over the event channel.
pub struct SystemInvoker {
    runner: Arc<dyn CommandRunner>,
    events: Sender<AppEvent>,
}

impl SystemInvoker {
    pub fn new(runner: Arc<dyn CommandRunner>, events: Sender<AppEvent>) -> Self {
        Self { runner, events }
    }

    /// Fire the effect for one action kind. Kinds backed by in-widget tool
    /// views have no OS effect and report a failure toast if routed here.
    pub fn invoke(&self, kind: ActionKind, title: &str) {
        self.spawn(title, move |runner| perform(runner, kind));
    }

    /// Shift output volume by `delta` percent, clamped to the allowed range.
    pub fn adjust_volume(&self, delta: i64) {
        self.spawn("Volume", move |runner| apply_volume(runner, delta));
    }

    pub fn toggle_mute(&self) {
        self.spawn("Mute", |runner| {
            osascript(
                runner,
                "set volume output muted not (output muted of (get volume settings))",
            )?;
            Ok(Some("Toggled mute".to_string()))
        });
    }

    fn spawn<F>(&self, title: &str, effect: F)
    where
        F: FnOnce(&dyn CommandRunner) -> Result<Option<String>> + Send + 'static,
    {
        let runner = Arc::clone(&self.runner);
        let events = self.events.clone();
        let title = title.to_string();
        thread::spawn(move || {
            let result = effect(runner.as_ref());
            report(&events, &title, result);
        });
    }
}

fn report(events: &Sender<AppEvent>, title: &str, result: Result<Option<String>>) {
    let event = match result {
        Ok(detail) => {
            debug!(action = %title, "action completed");
            AppEvent::Invocation {
                title: title.to_string(),
                success: true,
                detail,
            }
        }
        Err(err) => {
            warn!(action = %title, "action failed: {err:#}");
            AppEvent::Invocation {
                title: title.to_string(),
                success: false,
                detail: Some(err.to_string()),
            }
        }
    };
    let _ = events.send(event);
}

fn perform(runner: &dyn CommandRunner, kind: ActionKind) -> Result<Option<String>> {
    match kind {
        ActionKind::DesktopIcons => toggle_desktop_icons(runner),
        ActionKind::Appearance => toggle_appearance(runner),
        ActionKind::Command => open_app(runner, "Terminal"),
        ActionKind::Finder => open_app(runner, "Finder"),
        other => Err(anyhow!("{} is not an OS action", other.as_raw())),
    }
}

fn osascript(runner: &dyn CommandRunner, script: &str) -> Result<String> {
    runner.run("/usr/bin/osascript", &["-e", script])
}

fn open_app(runner: &dyn CommandRunner, app: &str) -> Result<Option<String>> {
    runner.run("/usr/bin/open", &["-a", app])?;
    Ok(Some(format!("Opened {app}")))
}

/// Toggle Finder's desktop-icon visibility and restart it. A missing
/// CreateDesktop key means icons are currently shown.
fn toggle_desktop_icons(runner: &dyn CommandRunner) -> Result<Option<String>> {
    let shown = runner
        .run("/usr/bin/defaults", &["read", "com.apple.finder", "CreateDesktop"])
        .ok()
        .and_then(|out| parse_flag(&out))
        .unwrap_or(true);
    let next = if shown { "false" } else { "true" };
    runner.run(
        "/usr/bin/defaults",
        &["write", "com.apple.finder", "CreateDesktop", "-bool", next],
    )?;
    runner.run("/usr/bin/killall", &["Finder"])?;
    let detail = if shown {
        "Desktop icons hidden"
    } else {
        "Desktop icons shown"
    };
    Ok(Some(detail.to_string()))
}

fn toggle_appearance(runner: &dyn CommandRunner) -> Result<Option<String>> {
    osascript(
        runner,
        "tell application \"System Events\" to tell appearance preferences to set dark mode to not dark mode",
    )?;
    Ok(Some("Toggled appearance".to_string()))
}

fn apply_volume(runner: &dyn CommandRunner, delta: i64) -> Result<Option<String>> {
    let out = osascript(runner, "output volume of (get volume settings)")?;
    let current = parse_volume(&out)?;
    let next = clamp_volume(current + delta);
    osascript(runner, &format!("set volume output volume {next}"))?;
    Ok(Some(format!("Volume {next}%")))
}

/// Clamp a requested output volume into the allowed range.
pub fn clamp_volume(value: i64) -> i64 {
    value.clamp(volume::MIN, volume::MAX)
}

/// Parse the single integer osascript prints for the current volume.
pub fn parse_volume(output: &str) -> Result<i64> {
    output
        .trim()
        .parse::<i64>()
        .map_err(|_| anyhow!("unexpected volume output: {output:?}"))
}

fn parse_flag(output: &str) -> Option<bool> {
    match output.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::mpsc;
    use std::time::Duration;

    /// Records invocations and replays canned stdout per program.
    struct FakeRunner {
        calls: Mutex<Vec<(String, Vec<String>)>>,
        responses: Mutex<Vec<Result<String>>>,
    }

    impl FakeRunner {
        fn with_responses(responses: Vec<Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(responses),
            })
        }

        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<String> {
            self.calls.lock().unwrap().push((
                program.to_string(),
                args.iter().map(|s| s.to_string()).collect(),
            ));
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                Ok(String::new())
            } else {
                responses.remove(0)
            }
        }
    }

    fn recv_invocation(rx: &mpsc::Receiver<AppEvent>) -> (String, bool, Option<String>) {
        match rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            AppEvent::Invocation {
                title,
                success,
                detail,
            } => (title, success, detail),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_clamp_volume_bounds() {
        assert_eq!(clamp_volume(95 + 10), 100);
        assert_eq!(clamp_volume(3 - 10), 0);
        assert_eq!(clamp_volume(50), 50);
        assert_eq!(clamp_volume(0), 0);
        assert_eq!(clamp_volume(100), 100);
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!(parse_volume("  31\n").unwrap(), 31);
        assert_eq!(parse_volume("0").unwrap(), 0);
        assert!(parse_volume("missing value").is_err());
        assert!(parse_volume("").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1\n"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("whatever"), None);
    }

    #[test]
    fn test_adjust_volume_reads_then_writes_clamped() {
        let runner = FakeRunner::with_responses(vec![Ok("98".to_string()), Ok(String::new())]);
        let (tx, rx) = mpsc::channel();
        let invoker = SystemInvoker::new(Arc::clone(&runner) as Arc<dyn CommandRunner>, tx);

        invoker.adjust_volume(5);
        let (title, success, detail) = recv_invocation(&rx);
        assert_eq!(title, "Volume");
        assert!(success);
        assert_eq!(detail.as_deref(), Some("Volume 100%"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].1[1], "set volume output volume 100");
    }

    #[test]
    fn test_failed_effect_reports_failure_event() {
        let runner = FakeRunner::with_responses(vec![Err(anyhow!("no such application"))]);
        let (tx, rx) = mpsc::channel();
        let invoker = SystemInvoker::new(Arc::clone(&runner) as Arc<dyn CommandRunner>, tx);

        invoker.invoke(ActionKind::Finder, "Finder");
        let (title, success, detail) = recv_invocation(&rx);
        assert_eq!(title, "Finder");
        assert!(!success);
        assert!(detail.is_some());
    }

    #[test]
    fn test_desktop_icons_toggle_writes_negated_flag() {
        let runner = FakeRunner::with_responses(vec![
            Ok("1".to_string()),
            Ok(String::new()),
            Ok(String::new()),
        ]);
        let (tx, rx) = mpsc::channel();
        let invoker = SystemInvoker::new(Arc::clone(&runner) as Arc<dyn CommandRunner>, tx);

        invoker.invoke(ActionKind::DesktopIcons, "Desktop");
        let (_, success, detail) = recv_invocation(&rx);
        assert!(success);
        assert_eq!(detail.as_deref(), Some("Desktop icons hidden"));

        let calls = runner.calls();
        assert_eq!(calls[0].1, vec!["read", "com.apple.finder", "CreateDesktop"]);
        assert_eq!(
            calls[1].1,
            vec!["write", "com.apple.finder", "CreateDesktop", "-bool", "false"]
        );
        assert_eq!(calls[2].0, "/usr/bin/killall");
    }

    #[test]
    fn test_missing_desktop_flag_defaults_to_shown() {
        let runner = FakeRunner::with_responses(vec![
            Err(anyhow!("key does not exist")),
            Ok(String::new()),
            Ok(String::new()),
        ]);
        let (tx, rx) = mpsc::channel();
        let invoker = SystemInvoker::new(Arc::clone(&runner) as Arc<dyn CommandRunner>, tx);

        invoker.invoke(ActionKind::DesktopIcons, "Desktop");
        let (_, success, detail) = recv_invocation(&rx);
        assert!(success);
        assert_eq!(detail.as_deref(), Some("Desktop icons hidden"));
    }

    #[test]
    fn test_tool_kind_has_no_os_effect() {
        let runner = FakeRunner::with_responses(Vec::new());
        let (tx, rx) = mpsc::channel();
        let invoker = SystemInvoker::new(Arc::clone(&runner) as Arc<dyn CommandRunner>, tx);

        invoker.invoke(ActionKind::QuickTimer, "Timer");
        let (_, success, _) = recv_invocation(&rx);
        assert!(!success);
        assert!(runner.calls().is_empty());
    }
}
