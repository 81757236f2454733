pub(crate) mod config;
pub use config::{AppConfig, ConfigError, SearchSettings};

pub(crate) mod field;
pub use field::{FieldName, FieldNameError, MAX_FIELD_NAME_LENGTH};

pub(crate) mod matching;
pub use matching::{CaseMatching, MatchMode};

pub(crate) mod record;
pub use record::Record;
