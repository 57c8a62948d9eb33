//! Final field assembly: singular/plural collapsing.

use tracing::warn;

use crate::value::{Fields, Value};

/// Collapse every declared `(singular, plural)` family.
///
/// Values from both keys are merged in order and deduplicated. One distinct
/// value ends up under the singular key, two or more under the plural key as
/// a sequence. The other key is always absent afterwards. Fields outside any
/// family pass through untouched.
pub fn assemble(mut fields: Fields, plurals: &[(String, String)]) -> Fields {
    for (singular, plural) in plurals {
        let mut values: Vec<u32> = Vec::new();
        for key in [singular, plural] {
            match fields.remove(key) {
                None => {}
                Some(Value::Int(n)) => values.push(n),
                Some(Value::Seq(seq)) => values.extend(seq),
                Some(other) => warn!(field = %key, value = ?other, "dropping non-numeric value"),
            }
        }

        let mut seen = Vec::with_capacity(values.len());
        values.retain(|n| {
            if seen.contains(n) {
                false
            } else {
                seen.push(*n);
                true
            }
        });

        match values.as_slice() {
            [] => {}
            [one] => {
                fields.insert(singular.clone(), *one);
            }
            _ => {
                fields.insert(plural.clone(), values);
            }
        }
    }
    fields
}
