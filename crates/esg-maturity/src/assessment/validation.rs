use super::domain::{AssessmentData, Topic};
use super::error::ValidationError;

pub(crate) const MIN_RATING: u8 = 1;
pub(crate) const MAX_RATING: u8 = 5;

/// Check one rating. Zero is "not answered", never the worst score.
pub(crate) fn check_rating(topic: Topic, value: u8) -> Result<u8, ValidationError> {
    if value == 0 {
        return Err(ValidationError::UnansweredRating {
            field: topic.path(),
        });
    }

    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(ValidationError::RatingOutOfRange {
            field: topic.path(),
            value,
        });
    }

    Ok(value)
}

/// Reject a submission before any scoring happens.
pub fn validate(data: &AssessmentData) -> Result<(), ValidationError> {
    for (field, value) in data.company_profile.fields() {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingProfileField { field });
        }
    }

    for (topic, value) in data.ratings() {
        check_rating(topic, value)?;
    }

    if !data.maturity.certifications.is_consistent() {
        return Err(ValidationError::ConflictingCertifications);
    }

    Ok(())
}
