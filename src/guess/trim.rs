use crate::field::{FieldDescriptor, TrimPolicy};

/// Derives the trim policy from surrounding whitespace and trims every sample in place.
///
/// Does nothing when the field has no sample collection. Samples trimmed by an
/// earlier call keep the policy decided back then, so guessing twice agrees.
pub fn guess_trim_type(field: &mut FieldDescriptor) {
    if field.samples_trimmed() {
        return;
    }
    let Some(samples) = field.samples_mut() else {
        return;
    };
    let mut spaces_before = false;
    let mut spaces_after = false;

    for sample in samples.iter_mut().flatten() {
        spaces_before |= sample.starts_with(char::is_whitespace);
        spaces_after |= sample.ends_with(char::is_whitespace);
        let trimmed = sample.trim();
        if trimmed.len() != sample.len() {
            *sample = trimmed.to_string();
        }
    }

    let mut policy = TrimPolicy::NONE;
    if spaces_before {
        policy |= TrimPolicy::LEFT;
    }
    if spaces_after {
        policy |= TrimPolicy::RIGHT;
    }
    field.trim_policy = policy;
    field.mark_samples_trimmed();
}
