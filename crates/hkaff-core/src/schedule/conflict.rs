//! Conflict detection between selected screenings.
//!
//! Screenings occupy half-open `[start, end)` intervals. Any positive
//! overlap makes a pair impossible to attend regardless of venue; a tight
//! turnaround between venues only earns a warning. Conflicts are advisory:
//! nothing is blocked or auto-removed.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::Selection;

/// How bad a conflict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictSeverity {
    /// The intervals overlap; the viewer cannot attend both.
    #[serde(rename = "impossible")]
    Impossible,
    /// No overlap, but the turnaround between different venues is tight.
    #[serde(rename = "warning")]
    Warning,
}

/// An advisory conflict between two selections.
///
/// `overlap_minutes` carries the overlap for an impossible pair (rounded
/// up, so a sub-minute overlap still reads as 1) and the gap for a warning
/// pair (rounded down); the severity disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub screening_id_a: String,
    pub screening_id_b: String,
    pub overlap_minutes: i64,
    pub severity: ConflictSeverity,
}

/// Tunable conflict rules.
///
/// The defaults (30 minutes, exemption on) are product decisions; they can
/// be overridden from the `[conflicts]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPolicy {
    /// Minimum gap between screenings at different venues before a
    /// warning is raised.
    pub min_turnaround_minutes: i64,
    /// Skip the turnaround warning when both screenings share a venue.
    pub same_venue_exempt: bool,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self {
            min_turnaround_minutes: 30,
            same_venue_exempt: true,
        }
    }
}

/// Classify every unordered pair of selections.
///
/// Output order is deterministic: pairs are visited with selections
/// ordered by (start time, screening id), so re-running on the same
/// selection set yields the same list.
pub(crate) fn detect(selections: &[Selection], policy: &ConflictPolicy) -> Vec<Conflict> {
    let mut ordered: Vec<&Selection> = selections.iter().collect();
    ordered.sort_by(|a, b| {
        a.screening_snapshot
            .start_datetime
            .cmp(&b.screening_snapshot.start_datetime)
            .then_with(|| a.screening_id.cmp(&b.screening_id))
    });

    let mut conflicts = Vec::new();
    for (i, earlier) in ordered.iter().enumerate() {
        for later in &ordered[i + 1..] {
            if let Some(conflict) = classify(earlier, later, policy) {
                conflicts.push(conflict);
            }
        }
    }
    conflicts
}

/// Classify one pair, `earlier` starting no later than `later`.
fn classify(earlier: &Selection, later: &Selection, policy: &ConflictPolicy) -> Option<Conflict> {
    let a = &earlier.screening_snapshot;
    let b = &later.screening_snapshot;

    // Half-open intervals: ending exactly when the other starts is not an
    // overlap, it is a zero gap. Classification compares the raw duration;
    // any positive overlap is fatal, even one shorter than a minute.
    let overlap_end = a.end_datetime().min(b.end_datetime());
    let overlap_start = a.start_datetime.max(b.start_datetime);
    let overlap = overlap_end - overlap_start;

    if overlap > Duration::zero() {
        return Some(Conflict {
            screening_id_a: earlier.screening_id.clone(),
            screening_id_b: later.screening_id.clone(),
            // Round up so the displayed overlap stays positive.
            overlap_minutes: (overlap.num_seconds() + 59) / 60,
            severity: ConflictSeverity::Impossible,
        });
    }

    let gap = b.start_datetime - a.end_datetime();
    let same_venue = a.venue_id == b.venue_id;
    if gap < Duration::minutes(policy.min_turnaround_minutes)
        && !(same_venue && policy.same_venue_exempt)
    {
        return Some(Conflict {
            screening_id_a: earlier.screening_id.clone(),
            screening_id_b: later.screening_id.clone(),
            overlap_minutes: gap.num_minutes(),
            severity: ConflictSeverity::Warning,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::super::tests::{film, screening};
    use super::*;
    use chrono::Utc;

    fn selection(id: &str, venue_id: &str, start: &str, minutes: u32) -> Selection {
        Selection {
            screening_id: id.to_string(),
            added_at: Utc::now(),
            film_snapshot: film("film-1"),
            screening_snapshot: screening(id, venue_id, start, minutes),
        }
    }

    fn detect_default(selections: &[Selection]) -> Vec<Conflict> {
        detect(selections, &ConflictPolicy::default())
    }

    #[test]
    fn overlapping_screenings_are_impossible_regardless_of_venue() {
        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let b = selection("screening-2", "venue-2", "2025-03-14T20:00:00", 120);
        let conflicts = detect_default(&[a, b]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Impossible);
        assert_eq!(conflicts[0].overlap_minutes, 60);

        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let b = selection("screening-2", "venue-1", "2025-03-14T20:00:00", 120);
        let conflicts = detect_default(&[a, b]);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Impossible);
    }

    #[test]
    fn sub_minute_overlap_is_still_impossible() {
        // 19:00-21:00 vs a 20:59:30 start: the true overlap is 30 seconds.
        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let b = selection("screening-2", "venue-1", "2025-03-14T20:59:30", 100);
        let conflicts = detect_default(&[a.clone(), b]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Impossible);
        assert_eq!(conflicts[0].overlap_minutes, 1);

        // Different venues: still impossible, never downgraded to a warning.
        let b_other = selection("screening-2", "venue-2", "2025-03-14T20:59:30", 100);
        let conflicts = detect_default(&[a, b_other]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Impossible);
        assert_eq!(conflicts[0].overlap_minutes, 1);
    }

    #[test]
    fn tight_turnaround_between_venues_is_a_warning() {
        // 19:00-21:00 then 21:15 start: 15-minute gap
        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let c = selection("screening-3", "venue-2", "2025-03-14T21:15:00", 105);
        let conflicts = detect_default(&[a, c]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Warning);
        assert_eq!(conflicts[0].overlap_minutes, 15);
    }

    #[test]
    fn same_venue_exempts_the_turnaround_warning() {
        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let c = selection("screening-3", "venue-1", "2025-03-14T21:15:00", 105);
        assert!(detect_default(&[a, c]).is_empty());
    }

    #[test]
    fn comfortable_gap_is_no_conflict() {
        // 45-minute gap, different venues
        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let d = selection("screening-4", "venue-2", "2025-03-14T21:45:00", 90);
        assert!(detect_default(&[a, d]).is_empty());
    }

    #[test]
    fn back_to_back_is_a_gap_not_an_overlap() {
        // Half-open intervals: 19:00-21:00 then 21:00 start.
        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let b = selection("screening-2", "venue-2", "2025-03-14T21:00:00", 90);
        let conflicts = detect_default(&[a.clone(), b]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].severity, ConflictSeverity::Warning);
        assert_eq!(conflicts[0].overlap_minutes, 0);

        // Same venue: no warning even at zero gap.
        let b_same = selection("screening-2", "venue-1", "2025-03-14T21:00:00", 90);
        assert!(detect_default(&[a, b_same]).is_empty());
    }

    #[test]
    fn threshold_is_policy_driven() {
        let a = selection("screening-1", "venue-1", "2025-03-14T19:00:00", 120);
        let c = selection("screening-3", "venue-2", "2025-03-14T21:15:00", 105);
        let strict = ConflictPolicy {
            min_turnaround_minutes: 10,
            same_venue_exempt: true,
        };
        assert!(detect(&[a.clone(), c.clone()], &strict).is_empty());

        let no_exemption = ConflictPolicy {
            min_turnaround_minutes: 30,
            same_venue_exempt: false,
        };
        let same_venue = selection("screening-3", "venue-1", "2025-03-14T21:15:00", 105);
        assert_eq!(detect(&[a, same_venue], &no_exemption).len(), 1);
    }

    #[test]
    fn pairs_are_reported_in_start_order() {
        let late = selection("screening-9", "venue-1", "2025-03-14T20:00:00", 120);
        let early = selection("screening-1", "venue-2", "2025-03-14T19:00:00", 120);
        let mid = selection("screening-5", "venue-3", "2025-03-14T19:30:00", 120);
        let conflicts = detect_default(&[late, early, mid]);
        assert_eq!(conflicts.len(), 3);
        assert_eq!(conflicts[0].screening_id_a, "screening-1");
        assert_eq!(conflicts[0].screening_id_b, "screening-5");
        assert_eq!(conflicts[1].screening_id_a, "screening-1");
        assert_eq!(conflicts[1].screening_id_b, "screening-9");
        assert_eq!(conflicts[2].screening_id_a, "screening-5");
        assert_eq!(conflicts[2].screening_id_b, "screening-9");
    }
}
