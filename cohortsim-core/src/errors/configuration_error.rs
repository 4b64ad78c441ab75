/// Semantically invalid model configuration.
///
/// Detection is best-effort: the simulators themselves do not validate
/// monetization inputs, so negative values propagate unless the caller
/// validates first.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("retention point table is empty")]
    EmptyPointTable,

    #[error("retention point table has {available} point(s), extrapolation needs {required}")]
    InsufficientPoints { available: usize, required: usize },

    #[error("invalid retention day {day}: days start at 1")]
    InvalidDay { day: u32 },

    #[error("retention day {day} appears more than once")]
    DuplicateDay { day: u32 },

    #[error("invalid {field} = {value}: {reason}")]
    InvalidParameter {
        field: String,
        value: f64,
        reason: String,
    },

    #[error("retention point table is not monotone: day {day} ({fraction}) rises above day {previous_day} ({previous_fraction})")]
    NonMonotoneTable {
        previous_day: u32,
        previous_fraction: f64,
        day: u32,
        fraction: f64,
    },

    #[error("variant {variant} references unknown source {source_name}")]
    UnknownSource {
        variant: String,
        source_name: String,
    },

    #[error("invalid sale window: start day {start_day}, end day {end_day}")]
    InvalidSaleWindow { start_day: u32, end_day: u32 },
}

impl ConfigurationError {
    /// Build an [`ConfigurationError::InvalidParameter`] for a named field.
    pub fn invalid(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }
}
