//! `skip_serializing_if` predicates for optional request fields.

pub fn is_zero(value: &u64) -> bool {
    *value == 0
}

pub fn is_false(value: &bool) -> bool {
    !*value
}
