use thiserror::Error;

// =============================================================================
// Queue errors
// =============================================================================

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is empty")]
    Empty,
}

// =============================================================================
// Input validation errors
// =============================================================================

/// Rejection of user-supplied input before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: the name can only contain letters and spaces.")]
    InvalidName { value: String },

    #[error("Error: the name cannot be empty.")]
    EmptyName,

    #[error("Error: the address cannot be empty.")]
    EmptyAddress,

    #[error("Error: the phone must be a number.")]
    PhoneNotNumeric { value: String },

    #[error("Error: the phone must have at least {min} digits.")]
    PhoneTooShort { value: String, min: usize },

    #[error("Error: the option must be a number.")]
    MenuNotNumeric { value: String },
}

// =============================================================================
// Registry errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("The name '{name}' already exists.")]
    DuplicateName { name: String },

    #[error("Error: maximum number of customers reached ({max}).")]
    CapacityReached { max: usize },

    #[error("Customer '{name}' not found.")]
    NotFound { name: String },
}

impl RegistryError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    Invalid { field: String, reason: String },

    #[error("Invalid seed customer '{name}': {source}")]
    Seed {
        name: String,
        #[source]
        source: RegistryError,
    },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
