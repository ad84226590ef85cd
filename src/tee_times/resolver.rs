//! Tee-time selection and UTC target derivation

use chrono::{DateTime, Datelike, Timelike, Utc};
use tracing::{info, warn};

use crate::error::AppError;
use crate::tee_times::models::{ResolvedTarget, TeeTimeDocument, TeeTimeRecord};

/// Selects the applicable tee time from the document and derives the UTC
/// date/hour target from it.
///
/// Selection order:
/// 1. `nextTee` with a timestamp strictly later than `now`
/// 2. `nextTee` whenever its timestamp is present at all, even if stale
/// 3. `todayTee` with a timestamp present
///
/// The `now` instant is injected so callers and tests get deterministic
/// behavior; the binary passes `Utc::now()`.
///
/// # Returns
/// * `Ok(ResolvedTarget)` - UTC date/hour tokens plus the selected record
/// * `Err(AppError)` - No usable tee time, or the selected timestamp is invalid
pub fn resolve(doc: &TeeTimeDocument, now: DateTime<Utc>) -> Result<ResolvedTarget, AppError> {
    let selected = select_tee(doc, now).ok_or(AppError::NoUsableTeeTime)?;
    derive_target(selected)
}

/// Applies the selection policy without touching the timestamp contents
/// beyond the future/past check. A `nextTee` with an unparseable timestamp is
/// still selected here; derivation rejects it afterwards. It never falls
/// through to `todayTee`.
fn select_tee(doc: &TeeTimeDocument, now: DateTime<Utc>) -> Option<&TeeTimeRecord> {
    if let Some(next) = &doc.next_tee
        && let Some(when) = &next.when_iso
    {
        match parse_instant(when) {
            Ok(instant) if instant > now => {
                info!("Selected nextTee at {}", instant.format("%Y-%m-%dT%H:%MZ"));
            }
            Ok(instant) => {
                warn!(
                    "nextTee at {} is not in the future, using it anyway",
                    instant.format("%Y-%m-%dT%H:%MZ")
                );
            }
            Err(_) => {}
        }
        return Some(next);
    }

    if let Some(today) = &doc.today_tee
        && today.when_iso.is_some()
    {
        info!("No nextTee present, falling back to todayTee");
        return Some(today);
    }

    None
}

/// Parses an ISO-8601 timestamp into a UTC instant. Offsets other than `Z`
/// are accepted and normalized to UTC.
fn parse_instant(when_iso: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(when_iso)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::timestamp_parse_error(format!("{when_iso} ({e})")))
}

/// Derives the zero-padded UTC tokens from the selected record. The
/// `dateISO`/`timeHHMM` display hints are deliberately not consulted.
fn derive_target(tee: &TeeTimeRecord) -> Result<ResolvedTarget, AppError> {
    let when = tee.when_iso.as_deref().ok_or(AppError::NoUsableTeeTime)?;
    let instant = parse_instant(when)?;

    Ok(ResolvedTarget {
        utc_date: format!(
            "{:04}{:02}{:02}",
            instant.year(),
            instant.month(),
            instant.day()
        ),
        utc_hour: format!("{:02}", instant.hour()),
        source_tee: tee.clone(),
    })
}
