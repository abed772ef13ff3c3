use crate::form::FieldSpec;

pub const ZIP_FIELD: &str = "zip";
pub const ADDRESS_FIELD: &str = "address";
pub const ADDRESS_MORE_FIELD: &str = "address_more";

/// Editable profile fields and their display labels, in form order.
pub const PROFILE_FIELDS: [(&str, &str); 5] = [
    ("name", "이름"),
    ("contact", "연락처"),
    (ZIP_FIELD, "우편번호"),
    (ADDRESS_FIELD, "주소"),
    (ADDRESS_MORE_FIELD, "상세주소"),
];

/// Every profile field is required before saving.
pub fn profile_fields() -> Vec<FieldSpec> {
    PROFILE_FIELDS
        .iter()
        .map(|(key, label)| FieldSpec::required(*key, *label))
        .collect()
}
