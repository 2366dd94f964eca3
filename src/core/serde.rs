/*!
 * Serde Helpers
 * Skip-serializing predicates and field defaults for the wire format
 */

use std::collections::BTreeMap;

/// Skip serializing if value is default
#[inline]
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    value == &T::default()
}

/// Skip serializing if String is empty
#[inline]
pub fn is_empty_string(value: &String) -> bool {
    value.is_empty()
}

/// Skip serializing if map is empty
#[inline]
pub fn is_empty_map<K, V>(value: &BTreeMap<K, V>) -> bool {
    value.is_empty()
}

/// Skip serializing if Vec is empty
#[inline]
pub fn is_empty_vec<T>(value: &Vec<T>) -> bool {
    value.is_empty()
}

/// Skip serializing the default instance count
#[inline]
pub const fn is_one_u32(value: &u32) -> bool {
    *value == 1
}

/// Wire default for `instances`
#[inline]
pub const fn default_instances() -> u32 {
    1
}
