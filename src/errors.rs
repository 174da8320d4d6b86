use thiserror::Error;

#[derive(Debug, Error)]
pub enum TariffError {
    /// A column name that does not parse as a time of day is fatal to
    /// rate-table construction: defaulting the slot would silently misprice it.
    #[error("column {label:?} cannot be parsed as a time of day")]
    MalformedSlotLabel {
        label: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
