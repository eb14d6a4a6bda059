/// All store-assigned record identifiers are positive 64-bit integers.
/// Zero marks a record that has not been persisted yet.
pub type DbId = i64;
