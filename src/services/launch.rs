// src/services/launch.rs

//! Coming-soon gating and the launch countdown.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::models::{SiteConfig, SiteSettings};

/// Days ahead used as a countdown target when no launch date parses.
const DEFAULT_COUNTDOWN_DAYS: i64 = 60;

/// Naive date-time layouts, read as UTC.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parse a launch date.
///
/// Accepts RFC 3339 timestamps, naive date-times with or without seconds
/// (`T` or space separated, taken as UTC) and dates as `YYYY-MM-DD` or
/// `YYYYMMDD` (midnight UTC).
pub fn parse_launch_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Whether `iso` names an instant after `now`. Absent or unparseable dates
/// are never in the future.
pub fn launch_is_in_future(iso: Option<&str>, now: DateTime<Utc>) -> bool {
    iso.and_then(parse_launch_date).is_some_and(|launch| launch > now)
}

/// Launch date in effect: the CMS value when non-empty, else the config one.
pub fn effective_launch_date<'a>(
    settings_launch: Option<&'a str>,
    site: &'a SiteConfig,
) -> Option<&'a str> {
    settings_launch
        .filter(|d| !d.trim().is_empty())
        .or(site.launch_date.as_deref())
        .filter(|d| !d.trim().is_empty())
}

pub fn should_show_coming_soon(
    settings_launch: Option<&str>,
    site: &SiteConfig,
    now: DateTime<Utc>,
) -> bool {
    if site.bypass_coming_soon {
        return false;
    }
    launch_is_in_future(effective_launch_date(settings_launch, site), now)
}

/// Instant the countdown runs to.
pub fn countdown_target(launch: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    launch
        .and_then(parse_launch_date)
        .unwrap_or_else(|| now + Duration::days(DEFAULT_COUNTDOWN_DAYS))
}

/// Time remaining until launch, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub done: bool,
}

impl Countdown {
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total = (target - now).num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            done: total == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
}

/// Social links for the coming-soon page and footer.
pub fn social_links(settings: Option<&SiteSettings>) -> Vec<SocialLink> {
    let pick = |value: Option<&String>, fallback: &str| {
        value
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };
    vec![
        SocialLink {
            label: "Instagram",
            href: pick(settings.and_then(|s| s.instagram_url.as_ref()), "https://instagram.com"),
        },
        SocialLink {
            label: "LinkedIn",
            href: pick(settings.and_then(|s| s.linkedin_url.as_ref()), "https://linkedin.com"),
        },
        SocialLink {
            label: "WhatsApp",
            href: pick(settings.and_then(|s| s.whatsapp_url.as_ref()), "https://wa.me/"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn site(launch: Option<&str>, bypass: bool) -> SiteConfig {
        SiteConfig {
            launch_date: launch.map(str::to_string),
            bypass_coming_soon: bypass,
            base_url: None,
        }
    }

    #[test]
    fn test_parse_launch_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_launch_date("2030-01-01"), Some(midnight));
        assert_eq!(parse_launch_date("2030-01-01T00:00:00Z"), Some(midnight));
        assert_eq!(parse_launch_date("2030-01-01T02:00:00+02:00"), Some(midnight));
        assert_eq!(parse_launch_date("2030-01-01T00:00:00"), Some(midnight));
        assert_eq!(parse_launch_date("2030-01-01 00:00:00"), Some(midnight));
        assert_eq!(parse_launch_date("2030-01-01T00:00"), Some(midnight));
        assert_eq!(parse_launch_date("2030-01-01 00:00"), Some(midnight));
        assert_eq!(parse_launch_date("20300101"), Some(midnight));
        assert_eq!(
            parse_launch_date("2030-01-01 09:30:15"),
            Some(Utc.with_ymd_and_hms(2030, 1, 1, 9, 30, 15).unwrap())
        );
        assert_eq!(parse_launch_date("next spring"), None);
        assert_eq!(parse_launch_date(""), None);
    }

    #[test]
    fn test_launch_is_in_future() {
        assert!(launch_is_in_future(Some("2030-01-01"), now()));
        assert!(!launch_is_in_future(Some("2020-01-01"), now()));
        assert!(!launch_is_in_future(Some("garbage"), now()));
        assert!(!launch_is_in_future(None, now()));
        assert!(launch_is_in_future(Some("2030-01-01 00:00:00"), now()));
        assert!(launch_is_in_future(Some("20300101"), now()));
    }

    #[test]
    fn test_settings_launch_date_wins() {
        let config = site(Some("2020-01-01"), false);
        assert!(should_show_coming_soon(Some("2030-01-01"), &config, now()));
        assert!(!should_show_coming_soon(Some(""), &config, now()));

        let future_config = site(Some("2030-01-01"), false);
        assert!(should_show_coming_soon(None, &future_config, now()));
    }

    #[test]
    fn test_bypass_flag_wins() {
        let config = site(Some("2030-01-01"), true);
        assert!(!should_show_coming_soon(Some("2030-01-01"), &config, now()));
    }

    #[test]
    fn test_countdown_until() {
        let target = now() + Duration::days(2) + Duration::hours(3) + Duration::seconds(65);
        let countdown = Countdown::until(target, now());
        assert_eq!(
            countdown,
            Countdown {
                days: 2,
                hours: 3,
                minutes: 1,
                seconds: 5,
                done: false
            }
        );
    }

    #[test]
    fn test_countdown_past_is_done_and_zero() {
        let countdown = Countdown::until(now() - Duration::days(1), now());
        assert!(countdown.done);
        assert_eq!((countdown.days, countdown.hours, countdown.minutes, countdown.seconds), (0, 0, 0, 0));
    }

    #[test]
    fn test_countdown_target_fallback() {
        assert_eq!(countdown_target(Some("bad"), now()), now() + Duration::days(60));
        assert_eq!(
            countdown_target(Some("2030-01-01"), now()),
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_social_links_fallbacks() {
        let settings = SiteSettings {
            instagram_url: Some("https://instagram.com/org".to_string()),
            linkedin_url: Some("  ".to_string()),
            ..SiteSettings::default()
        };
        let links = social_links(Some(&settings));
        assert_eq!(links[0].href, "https://instagram.com/org");
        assert_eq!(links[1].href, "https://linkedin.com");
        assert_eq!(links[2].href, "https://wa.me/");
        assert_eq!(social_links(None)[0].href, "https://instagram.com");
    }
}
