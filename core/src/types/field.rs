use nutype::nutype;

pub const MAX_FIELD_NAME_LENGTH: usize = 128;

/// Name of a record field inspected by a search.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_FIELD_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FieldName(String);
