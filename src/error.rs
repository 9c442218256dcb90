use thiserror::Error;

/// Malformed input records. A profile error is fatal to a whole scoring run;
/// a posting error only excludes that posting from the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("profile name is required")]
    MissingName,
    #[error("profile must list at least one skill")]
    NoSkills,
    #[error("posting {id}: title is required")]
    EmptyTitle { id: String },
    #[error("posting {id}: company is required")]
    EmptyCompany { id: String },
}

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("dimension weights must sum to 100, got {sum}")]
    BadWeights { sum: u32 },
    #[error("unknown configuration option: {key}")]
    UnknownOption { key: String },
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_posting() {
        let err = ValidationError::EmptyTitle { id: "job-17".into() };
        assert!(err.to_string().contains("job-17"));
    }

    #[test]
    fn config_error_reports_offending_sum() {
        let err = ConfigError::BadWeights { sum: 95 };
        assert!(err.to_string().contains("95"));
    }
}
