//! Field store: current value of every declared field.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{FieldKind, FieldValue, FormSchema, ScalarValue};

/// Field store errors. Both indicate a caller bug, not a user condition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field '{field}' is declared {declared}, not {attempted}")]
    UnknownFieldKind {
        field: String,
        declared: FieldKind,
        attempted: FieldKind,
    },

    #[error("Field '{0}' is not declared in the form schema")]
    UndeclaredField(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Debug, Clone)]
struct Slot {
    value: FieldValue,
    /// Set once the field has been written, even with an empty value
    touched: bool,
}

/// Values of every field declared by a schema.
#[derive(Debug, Clone)]
pub struct FieldStore {
    slots: HashMap<String, Slot>,
}

impl FieldStore {
    /// Create a store with every schema field at its empty default.
    pub fn new(schema: &FormSchema) -> Self {
        let slots = schema
            .fields()
            .map(|f| {
                (
                    f.name.clone(),
                    Slot {
                        value: f.kind.empty_value(),
                        touched: false,
                    },
                )
            })
            .collect();
        Self { slots }
    }

    /// Overwrite a text or flag field.
    pub fn set_scalar(&mut self, name: &str, value: ScalarValue) -> FieldResult<()> {
        let slot = self.slot_mut(name)?;
        let declared = slot.value.kind();
        if declared != value.kind() {
            return Err(FieldError::UnknownFieldKind {
                field: name.to_string(),
                declared,
                attempted: value.kind(),
            });
        }

        slot.value = value.into();
        slot.touched = true;
        Ok(())
    }

    /// Insert or remove one item of a multi field.
    ///
    /// Inserting a present item and removing an absent one are no-ops.
    pub fn toggle_multi(&mut self, name: &str, item: &str, present: bool) -> FieldResult<()> {
        let slot = self.slot_mut(name)?;
        match &mut slot.value {
            FieldValue::Multi(set) => {
                if present {
                    set.insert(item);
                } else {
                    set.remove(item);
                }
                slot.touched = true;
                Ok(())
            }
            other => Err(FieldError::UnknownFieldKind {
                field: name.to_string(),
                declared: other.kind(),
                attempted: FieldKind::Multi,
            }),
        }
    }

    /// Current value, or `None` if the name is not declared.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.slots.get(name).map(|slot| &slot.value)
    }

    /// Whether the field has been written since the session began.
    pub fn is_touched(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|slot| slot.touched)
    }

    /// Emptiness as seen by the validation gate.
    ///
    /// Text is empty when it has no characters, a multi field when it has no
    /// items, and a flag until it has been explicitly set. Undeclared names
    /// count as empty.
    pub fn is_empty(&self, name: &str) -> bool {
        match self.slots.get(name) {
            Some(Slot {
                value: FieldValue::Text(s),
                ..
            }) => s.is_empty(),
            Some(Slot {
                value: FieldValue::Multi(set),
                ..
            }) => set.is_empty(),
            Some(Slot {
                value: FieldValue::Flag(_),
                touched,
            }) => !touched,
            None => true,
        }
    }

    fn slot_mut(&mut self, name: &str) -> FieldResult<&mut Slot> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| FieldError::UndeclaredField(name.to_string()))
    }
}
