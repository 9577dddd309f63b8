use std::fs::File;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use sentinel_core::ActivityEvent;

use crate::error::GeneratorError;

/// The simulated workforce: user id and role.
const USERS: [(&str, &str); 3] = [
    ("emp01", "employee"),
    ("emp02", "intern"),
    ("emp03", "admin"),
];

const ACTIONS: [&str; 3] = ["login", "read", "download"];

/// The day all synthetic activity falls on.
const LOG_DATE: (i32, u32, u32) = (2026, 1, 10);

fn resources_for(role: &str) -> &'static [&'static str] {
    match role {
        "intern" => &["public_docs"],
        "employee" => &["project_docs"],
        _ => &["public_docs", "project_docs", "confidential_reports", "payroll.zip"],
    }
}

/// Shape of a synthetic log.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Number of random rows, before the injected suspicious ones.
    pub count: usize,
    /// Seed for reproducible output. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { count: 50, seed: None }
    }
}

/// Generate one day of activity: `count` random in-profile rows followed by
/// three injected suspicious rows (off-hours access to resources the roles
/// have no business with), so a scan over the output always has signal.
pub fn generate_events(config: &GeneratorConfig) -> Vec<ActivityEvent> {
    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (year, month, day) = LOG_DATE;
    let midnight = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("log date is valid");

    let mut events: Vec<ActivityEvent> = (0..config.count)
        .map(|_| {
            let (user, role) = USERS[rng.gen_range(0..USERS.len())];
            let action = *ACTIONS.choose(&mut rng).expect("actions are non-empty");
            let resources = resources_for(role);
            let resource = *resources.choose(&mut rng).expect("resources are non-empty");
            let minute = rng.gen_range(0..24 * 60);
            ActivityEvent {
                timestamp: midnight + chrono::Duration::minutes(minute),
                user: user.to_owned(),
                role: role.to_owned(),
                resource: resource.to_owned(),
                action: action.to_owned(),
            }
        })
        .collect();

    events.extend(injected_events(midnight));
    events
}

/// The suspicious rows every generated log carries.
fn injected_events(midnight: NaiveDateTime) -> Vec<ActivityEvent> {
    let at = |hour: i64, minute: i64| midnight + chrono::Duration::minutes(hour * 60 + minute);
    vec![
        ActivityEvent {
            timestamp: at(2, 47),
            user: "emp02".to_owned(),
            role: "intern".to_owned(),
            resource: "payroll.zip".to_owned(),
            action: "download".to_owned(),
        },
        ActivityEvent {
            timestamp: at(3, 10),
            user: "emp01".to_owned(),
            role: "employee".to_owned(),
            resource: "confidential_reports".to_owned(),
            action: "download".to_owned(),
        },
        ActivityEvent {
            timestamp: at(4, 20),
            user: "emp02".to_owned(),
            role: "intern".to_owned(),
            resource: "confidential_reports".to_owned(),
            action: "read".to_owned(),
        },
    ]
}

fn csv_error(path: &Path, source: csv::Error) -> GeneratorError {
    GeneratorError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Write events to `path` in the activity-log schema.
pub fn write_activity_log(path: &Path, events: &[ActivityEvent]) -> Result<(), GeneratorError> {
    let file = File::create(path).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["timestamp", "user", "role", "action", "resource"])
        .map_err(|source| csv_error(path, source))?;
    for event in events {
        writer
            .write_record([
                event.timestamp_string().as_str(),
                &event.user,
                &event.role,
                &event.action,
                &event.resource,
            ])
            .map_err(|source| csv_error(path, source))?;
    }
    writer.flush().map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = GeneratorConfig { count: 20, seed: Some(7) };
        assert_eq!(generate_events(&config), generate_events(&config));
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_events(&GeneratorConfig { count: 20, seed: Some(7) });
        let b = generate_events(&GeneratorConfig { count: 20, seed: Some(8) });
        assert_ne!(a, b);
    }

    #[test]
    fn suspicious_rows_are_always_injected() {
        let events = generate_events(&GeneratorConfig { count: 0, seed: Some(1) });
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].timestamp_string(), "2026-01-10 02:47");
        assert_eq!(events[0].resource, "payroll.zip");
        assert_eq!(events[2].user, "emp02");
    }

    #[test]
    fn random_rows_stay_in_profile() {
        let events = generate_events(&GeneratorConfig { count: 40, seed: Some(3) });
        for event in &events[..40] {
            assert!(resources_for(&event.role).contains(&event.resource.as_str()));
        }
    }
}
