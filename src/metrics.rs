use serde::Serialize;

use crate::model::{FeeStatus, Payment, PaymentRequest, Student};

/// Round-half-up to a whole percent. Cards display whole numbers only.
fn percent_of(numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 {
        return 0;
    }
    let pct = 100.0 * (numerator as f64) / (denominator as f64);
    (pct + 0.5).floor() as i64
}

/// Attendance percentage for a student card. Zero when no classes have
/// been scheduled yet; may exceed 100 for inconsistent input, which is
/// not validated here.
pub fn attendance_rate(student: &Student) -> i64 {
    percent_of(student.attended_classes, student.total_classes)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCompletion {
    pub percent: i64,
    /// Raw paid/total ratio for progress-bar width.
    pub fill_ratio: f64,
}

pub fn request_completion(request: &PaymentRequest) -> RequestCompletion {
    let percent = percent_of(request.paid_count, request.students_count);
    let fill_ratio = if request.students_count > 0 {
        (request.paid_count as f64) / (request.students_count as f64)
    } else {
        0.0
    };
    RequestCompletion { percent, fill_ratio }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTotals {
    pub collected: i64,
    pub outstanding: i64,
}

/// Collected and outstanding rupee totals across all requests. Integer
/// arithmetic throughout, so summation order cannot change the result.
pub fn revenue_totals(requests: &[PaymentRequest]) -> RevenueTotals {
    let collected = requests.iter().map(|r| r.amount * r.paid_count).sum();
    let outstanding = requests
        .iter()
        .map(|r| r.amount * (r.students_count - r.paid_count))
        .sum();
    RevenueTotals {
        collected,
        outstanding,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStatusCounts {
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Summary-row counts on the students screen. Unknown statuses count
/// toward none of the buckets.
pub fn fee_status_counts(students: &[Student]) -> FeeStatusCounts {
    let mut counts = FeeStatusCounts {
        paid: 0,
        pending: 0,
        overdue: 0,
    };
    for s in students {
        match s.payment_status {
            FeeStatus::Paid => counts.paid += 1,
            FeeStatus::Pending => counts.pending += 1,
            FeeStatus::Overdue => counts.overdue += 1,
            FeeStatus::Other(_) => {}
        }
    }
    counts
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Sentinel chip value that disables a categorical filter.
pub const FILTER_ALL: &str = "All";

/// Search on name or parent name (case-insensitive, query deliberately
/// not trimmed) ANDed with the class chip. The chip match is a plain
/// case-sensitive substring of the class label, so "Grade 10" matches
/// "Grade 10 - Mathematics". Input order is preserved.
pub fn filter_students<'a>(
    students: &'a [Student],
    search_query: &str,
    class_filter: &str,
) -> Vec<&'a Student> {
    let query = search_query.to_lowercase();
    students
        .iter()
        .filter(|s| {
            let matches_search =
                contains_ci(&s.name, &query) || contains_ci(&s.parent_name, &query);
            let matches_class =
                class_filter == FILTER_ALL || s.class_label.contains(class_filter);
            matches_search && matches_class
        })
        .collect()
}

/// Title search ANDed with an exact-status chip.
pub fn filter_requests<'a>(
    requests: &'a [PaymentRequest],
    search_query: &str,
    status_filter: &str,
) -> Vec<&'a PaymentRequest> {
    let query = search_query.to_lowercase();
    requests
        .iter()
        .filter(|r| {
            let matches_search = contains_ci(&r.title, &query);
            let matches_status =
                status_filter == FILTER_ALL || r.status.label() == status_filter;
            matches_search && matches_status
        })
        .collect()
}

/// The recent-payments tab has no chip dimension, only search.
pub fn filter_payments<'a>(payments: &'a [Payment], search_query: &str) -> Vec<&'a Payment> {
    let query = search_query.to_lowercase();
    payments
        .iter()
        .filter(|p| contains_ci(&p.student_name, &query) || contains_ci(&p.request_title, &query))
        .collect()
}
