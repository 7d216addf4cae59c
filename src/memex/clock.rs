use crate::error::{MemexError, Result};
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;

/// Environment variable consulted when no explicit zone is given.
pub const TZ_ENV_VAR: &str = "MEMEX_TZ";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
const DATE_FORMAT: &str = "%Y-%m-%d";
const BACKUP_FORMAT: &str = "%Y%m%d-%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Local,
    Named(Tz),
}

impl Zone {
    /// Pick the first configured zone: explicit flag, then environment, then settings.
    /// Falls back to the system zone when none is set.
    pub fn resolve(
        explicit: Option<&str>,
        env: Option<&str>,
        configured: Option<&str>,
    ) -> Result<Zone> {
        let chosen = [explicit, env, configured]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty());

        match chosen {
            Some(name) => {
                log::debug!("using timezone {}", name);
                name.parse::<Tz>()
                    .map(Zone::Named)
                    .map_err(|_| MemexError::InvalidTimezone(name.to_string()))
            }
            None => {
                log::debug!("using system timezone");
                Ok(Zone::Local)
            }
        }
    }
}

/// Source of "now" for document timestamps.
///
/// A frozen clock always reports the same instant, which keeps generated
/// files deterministic in tests.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    zone: Zone,
    frozen: Option<DateTime<Utc>>,
}

impl Clock {
    pub fn system(zone: Zone) -> Self {
        Self { zone, frozen: None }
    }

    pub fn frozen(at: DateTime<Utc>, zone: Zone) -> Self {
        Self {
            zone,
            frozen: Some(at),
        }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        let utc = self.frozen.unwrap_or_else(Utc::now);
        match self.zone {
            Zone::Local => utc.with_timezone(&Local).fixed_offset(),
            Zone::Named(tz) => utc.with_timezone(&tz).fixed_offset(),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS ±HHMM`, used for `date` and `last_update`.
pub fn timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `YYYY-MM-DD`, used as the filename prefix.
pub fn iso_date(at: &DateTime<FixedOffset>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// `YYYYmmdd-HHMMSS`, used as the backup suffix.
pub fn backup_stamp(at: &DateTime<FixedOffset>) -> String {
    at.format(BACKUP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 30, 23, 32, 16).unwrap()
    }

    #[test]
    fn explicit_zone_wins() {
        let zone = Zone::resolve(Some("Asia/Tokyo"), Some("UTC"), Some("Europe/Paris")).unwrap();
        assert_eq!(zone, Zone::Named(chrono_tz::Asia::Tokyo));
    }

    #[test]
    fn env_beats_settings() {
        let zone = Zone::resolve(None, Some("UTC"), Some("Europe/Paris")).unwrap();
        assert_eq!(zone, Zone::Named(chrono_tz::UTC));
    }

    #[test]
    fn settings_used_when_nothing_else() {
        let zone = Zone::resolve(None, Some("  "), Some("Africa/Abidjan")).unwrap();
        assert_eq!(zone, Zone::Named(chrono_tz::Africa::Abidjan));
    }

    #[test]
    fn falls_back_to_system_zone() {
        assert_eq!(Zone::resolve(None, None, None).unwrap(), Zone::Local);
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let err = Zone::resolve(Some("Mars/Olympus"), None, None).unwrap_err();
        assert!(matches!(err, MemexError::InvalidTimezone(name) if name == "Mars/Olympus"));
    }

    #[test]
    fn formats_in_the_chosen_zone() {
        let clock = Clock::frozen(instant(), Zone::Named(chrono_tz::Asia::Tokyo));
        let now = clock.now();
        assert_eq!(timestamp(&now), "2025-08-31 08:32:16 +0900");
        assert_eq!(iso_date(&now), "2025-08-31");
        assert_eq!(backup_stamp(&now), "20250831-083216");
    }

    #[test]
    fn utc_offset_is_rendered_without_colon() {
        let clock = Clock::frozen(instant(), Zone::Named(chrono_tz::UTC));
        assert_eq!(timestamp(&clock.now()), "2025-08-30 23:32:16 +0000");
    }
}
