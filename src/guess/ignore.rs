use crate::field::FieldDescriptor;

/// Marks the field as ignored when its samples carry no content at all.
///
/// A field is ignored when every sample is blank, every sample is empty, or
/// every sample is the null marker. An already ignored field is never
/// un-ignored here.
pub fn guess_ignore(field: &mut FieldDescriptor) {
    let Some(samples) = field.samples() else {
        return;
    };

    let all_blank = samples
        .iter()
        .all(|sample| sample.as_deref().is_none_or(|text| text.trim().is_empty()));
    let all_empty = samples
        .iter()
        .all(|sample| sample.as_deref().is_none_or(str::is_empty));
    let all_null = samples
        .iter()
        .all(|sample| sample.as_deref().is_some_and(|text| field.is_null_marker(text)));

    if all_blank || all_empty || all_null {
        field.ignore = true;
    }
}
