// Integration tests for a full splash session driven with synthetic time
use chrono::{DateTime, Duration, Local, TimeZone};
use pretty_assertions::assert_eq;
use rust_splash::models::settings::SplashSettings;
use rust_splash::services::scheduler::SplashScheduler;
use rust_splash::services::settings::SplashConfig;

fn session_config() -> SplashConfig {
    let settings = SplashSettings {
        target_date: "2026-01-25T00:00:00".to_string(),
        ..SplashSettings::default()
    };
    SplashConfig::resolve(&settings).expect("default-derived settings must resolve")
}

fn session_start() -> DateTime<Local> {
    // Ten seconds short of a day before the target.
    Local.with_ymd_and_hms(2026, 1, 24, 0, 0, 10).unwrap()
}

#[test]
fn full_session_boot_then_countdown() {
    let config = session_config();
    let mut scheduler = SplashScheduler::from_config(&config);

    let mut now = session_start();
    let mut boot_updates = 0;
    let mut completions = 0;
    let mut first_snapshot = None;

    // Drive the session in 200 ms passes, exactly like the host loop would.
    for _ in 0..200 {
        let result = scheduler.tick_at(now);
        if let Some(boot) = &result.boot {
            boot_updates += 1;
            assert!(boot.progress <= 100);
            assert!(!config.boot_messages.is_empty());
        }
        if result.boot_completed {
            completions += 1;
            first_snapshot = result.countdown.clone();
        }
        now += Duration::milliseconds(200);
    }

    // 100 progress passes plus the settle-delay passes before the signal.
    assert!(boot_updates >= 100);
    assert_eq!(completions, 1);
    assert!(scheduler.boot_state().complete);
    assert_eq!(scheduler.boot_state().progress, 100);
    assert_eq!(
        scheduler.boot_state().message,
        *config.boot_messages.last().unwrap()
    );

    let snapshot = first_snapshot.expect("completion pass carries the first countdown snapshot");
    assert!(!snapshot.expired);
    // Progress hits 100 on the 100th pass (19.8 s in) and the settle delay
    // lands the signal at 20.6 s; 86_390 s minus 20.6 s leaves 86_369.4 s.
    assert_eq!(snapshot.text, "0d:23h:59m:29s");
}

#[test]
fn countdown_counts_down_to_expiry() {
    let config = session_config();
    let mut scheduler = SplashScheduler::from_config(&config);

    // Fast-forward boot by ticking every 200 ms until completion.
    let mut now = session_start();
    loop {
        if scheduler.tick_at(now).boot_completed {
            break;
        }
        now += Duration::milliseconds(200);
    }

    // Walk per-second passes across the final seconds before the target.
    let target = scheduler.countdown_target();
    let mut last_text = String::new();
    let mut expired_at = None;
    let mut probe = target - Duration::seconds(10);
    while probe <= target {
        let result = scheduler.tick_at(probe);
        if let Some(snapshot) = result.countdown {
            if expired_at.is_none() && snapshot.expired {
                expired_at = Some(probe);
            }
            last_text = snapshot.text;
        }
        probe += Duration::seconds(1);
    }

    assert_eq!(expired_at, Some(target));
    assert_eq!(last_text, "0d:0h:0m:0s");
}

#[test]
fn scheduler_reports_sleep_hints_for_the_host() {
    let config = session_config();
    let mut scheduler = SplashScheduler::from_config(&config);
    let now = session_start();

    let first = scheduler.tick_at(now);
    assert_eq!(first.next_due_in, Some(std::time::Duration::from_millis(200)));

    // A pass between cadence points still reports the remaining wait.
    let between = scheduler.tick_at(now + Duration::milliseconds(50));
    assert_eq!(
        between.next_due_in,
        Some(std::time::Duration::from_millis(150))
    );
}
