use chrono::NaiveDate;
use thiserror::Error;

/// 新增住宿紀錄時的驗證錯誤，全部都可由使用者修正後重試
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Unknown villa: {name}")]
    UnknownVilla { name: String },

    #[error("Invalid date for {field}: {value}")]
    InvalidDate { field: String, value: String },

    #[error("Departure {end} is before arrival {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Stay falls outside {villa} availability ({from} to {until})")]
    OutsideAvailability {
        villa: String,
        from: NaiveDate,
        until: NaiveDate,
    },

    #[error("At least one adult is required, got {adults}")]
    InvalidGuestCount { adults: u32 },

    #[error("{villa} cannot fit {requested} more guests ({remaining} spots remaining)")]
    CapacityExceeded {
        villa: String,
        requested: u64,
        remaining: u32,
    },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    /// 表單上顯示給使用者的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingField { field } => format!("Please fill in the {} field", field),
            Self::UnknownVilla { name } => format!("\"{}\" is not one of our villas", name),
            Self::InvalidDate { field, value } => {
                format!("\"{}\" is not a valid date for {}", value, field)
            }
            Self::InvalidDateRange { .. } => {
                "The departure date must not be before the arrival date".to_string()
            }
            Self::OutsideAvailability { villa, .. } => {
                format!("The selected dates are outside the {} booking window", villa)
            }
            Self::InvalidGuestCount { .. } => "Every party needs at least one adult".to_string(),
            Self::CapacityExceeded { villa, .. } => format!("{} is full for this party", villa),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingField { field } => format!("Provide a value for '{}'", field),
            Self::UnknownVilla { .. } => "Choose a villa from the catalog".to_string(),
            Self::InvalidDate { .. } => "Use the YYYY-MM-DD date format".to_string(),
            Self::InvalidDateRange { .. } => "Pick a departure on or after the arrival".to_string(),
            Self::OutsideAvailability { from, until, .. } => {
                format!("Pick dates between {} and {}", from, until)
            }
            Self::InvalidGuestCount { .. } => "Set the number of adults to 1 or more".to_string(),
            Self::CapacityExceeded { remaining, .. } => format!(
                "Reduce the party to {} guests or choose another villa",
                remaining
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TrackerError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read file: {}", e),
            Self::TomlError(e) => format!("The TOML file is malformed: {}", e),
            Self::SerializationError(e) => format!("Could not serialize output: {}", e),
            Self::ConfigError { message } => message.clone(),
            Self::MissingConfigError { field } => format!("'{}' is required", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            Self::Validation(e) => e.user_friendly_message(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that the path exists and is readable".to_string(),
            Self::TomlError(_) => "Fix the TOML syntax and try again".to_string(),
            Self::SerializationError(_) => "Retry without --json".to_string(),
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Review the villa catalog configuration".to_string()
            }
            Self::Validation(e) => e.recovery_suggestion(),
        }
    }

    /// 依錯誤種類決定 CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
