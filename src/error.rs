use thiserror::Error;

/// Input problems detected while scoring offices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid referral count {count} for office {office_id} in {year_month}")]
    InvalidReferralCount {
        office_id: String,
        year_month: String,
        count: i64,
    },
}

impl ScoringError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }
}
