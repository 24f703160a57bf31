//! Attendance history filtering and tallies.

use crate::models::{AttendanceRecord, AttendanceStatus, StatusFilter};

/// Records that pass the filter, in their original order.
pub fn filter_records(records: &[AttendanceRecord], filter: StatusFilter) -> Vec<&AttendanceRecord> {
    records.iter().filter(|r| filter.matches(r.status)).collect()
}

/// Count of each status across a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.present + self.absent + self.late
    }

    /// Share of classes attended (late counts as attended), as a percentage.
    pub fn attendance_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.present + self.late) as f64 * 100.0 / total as f64
    }

    /// Number of records a filter tab would show.
    pub fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.total(),
            StatusFilter::Present => self.present,
            StatusFilter::Absent => self.absent,
            StatusFilter::Late => self.late,
        }
    }
}

pub fn status_counts(records: &[AttendanceRecord]) -> StatusCounts {
    records.iter().fold(StatusCounts::default(), |mut acc, r| {
        match r.status {
            AttendanceStatus::Present => acc.present += 1,
            AttendanceStatus::Absent => acc.absent += 1,
            AttendanceStatus::Late => acc.late += 1,
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_all_filter_is_identity() {
        let records = mock::attendance_records();
        let filtered = filter_records(&records, StatusFilter::All);
        assert_eq!(filtered.len(), records.len());
        assert!(filtered.iter().zip(&records).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_status_filters_keep_only_matches() {
        let records = mock::attendance_records();
        let present = filter_records(&records, StatusFilter::Present);
        assert_eq!(present.len(), 3);
        assert!(present.iter().all(|r| r.status == AttendanceStatus::Present));

        let absent = filter_records(&records, StatusFilter::Absent);
        assert_eq!(absent.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);

        let late = filter_records(&records, StatusFilter::Late);
        assert_eq!(late.iter().map(|r| r.id).collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_counts_and_rate() {
        let counts = status_counts(&mock::attendance_records());
        assert_eq!(
            counts,
            StatusCounts {
                present: 3,
                absent: 1,
                late: 1
            }
        );
        assert_eq!(counts.for_filter(StatusFilter::All), 5);
        assert!((counts.attendance_rate() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_rate_is_zero() {
        assert_eq!(status_counts(&[]).attendance_rate(), 0.0);
    }
}
