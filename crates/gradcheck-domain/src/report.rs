use gradcheck_types::{AuditReport, CourseCode};

#[derive(Clone, Debug)]
pub struct AuditOutcome {
    pub report: AuditReport,
    /// Completed codes absent from the catalog, in ascending order.
    pub unrecognized_courses: Vec<CourseCode>,
}
