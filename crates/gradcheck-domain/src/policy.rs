/// Degree-wide minimum used when no policy source provides one.
pub const DEFAULT_MIN_TOTAL_CREDITS: u32 = 127;

/// Program policies consulted by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditPolicy {
    pub min_total_credits: u32,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            min_total_credits: DEFAULT_MIN_TOTAL_CREDITS,
        }
    }
}

impl AuditPolicy {
    pub fn with_min_total_credits(min_total_credits: u32) -> Self {
        Self { min_total_credits }
    }
}
