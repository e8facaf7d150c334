/// Outcome counts of one scan-and-enroll pass over the loan records.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct SweepSummaryDto {
    pub scanned: usize,
    pub newly_listed: usize,
    pub already_listed: usize,
    pub failed: usize,
}
