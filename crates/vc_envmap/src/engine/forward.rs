use alloc::string::String;
use alloc::vec::Vec;

use super::Walker;
use super::lookup::get_env_string;
use super::plan::{FieldPlan, Frame};
use crate::error::{ElementError, EnvError, ScalarError};
use crate::ops::{ArrayShape, EnvStruct, ListShape, PointerShape, ShapeMut, parse_bool};
use crate::{Dynamic, EnvShape, EnvSource};

impl<S: EnvSource + ?Sized> Walker<'_, S> {
    /// Populates `target` from the source.
    pub(crate) fn parse_value(
        &self,
        target: &mut dyn EnvShape,
        frame: Frame<'_>,
    ) -> Result<(), EnvError> {
        match target.shape_mut() {
            ShapeMut::Struct(record) => self.parse_struct(record, frame),
            ShapeMut::Pointer(pointer) => self.parse_pointer(pointer, frame),
            ShapeMut::Array(array) => self.parse_array(array, frame),
            ShapeMut::List(list) => self.parse_list(list, frame),
            ShapeMut::Map { type_name } => Err(unsupported(frame.key(), type_name)),
            leaf => {
                let key = frame.key();
                let text = self.env_string(&key, frame)?;
                self.assign_leaf(leaf, key, text)
            }
        }
    }

    #[inline]
    fn env_string(&self, key: &str, frame: Frame<'_>) -> Result<String, EnvError> {
        get_env_string(self.source, key, frame, self.config.allow_empty())
    }

    fn parse_struct(&self, record: &mut dyn EnvStruct, frame: Frame<'_>) -> Result<(), EnvError> {
        for index in 0..record.field_len() {
            let Some(info) = record.field_info(index) else {
                continue;
            };
            let Some(field) = record.field_at_mut(index) else {
                continue;
            };
            let Some(plan) = FieldPlan::new(self.config, info, field.shape_kind(), frame.prefix)
            else {
                continue;
            };

            self.parse_value(field, plan.frame(frame.direct))?;
        }
        Ok(())
    }

    fn parse_pointer(
        &self,
        pointer: &mut dyn PointerShape,
        frame: Frame<'_>,
    ) -> Result<(), EnvError> {
        if !self.config.zero_before_write()
            && let Some(pointee) = pointer.pointee_mut()
        {
            return self.parse_value(pointee, frame);
        }

        pointer.populate_fresh(&mut |pointee: &mut dyn EnvShape| self.parse_value(pointee, frame))
    }

    fn parse_array(&self, array: &mut dyn ArrayShape, frame: Frame<'_>) -> Result<(), EnvError> {
        let key = frame.key();
        let text = self.env_string(&key, frame)?;

        let parts = self.config.split(&text);
        let capacity = array.capacity();
        if parts.len() > capacity {
            return Err(EnvError::SizeExceeded {
                key,
                capacity,
                len: parts.len(),
            });
        }

        if self.replaces_sequence(&text) {
            array.reset();
        }

        let mut errors = Vec::new();
        for (index, part) in parts.iter().enumerate() {
            if let Some(item) = array.item_mut(index)
                && let Err(error) = self.parse_value(item, Frame::element(part))
            {
                errors.push(ElementError::new(index, error));
            }
        }

        collect_elements(key, errors)
    }

    fn parse_list(&self, list: &mut dyn ListShape, frame: Frame<'_>) -> Result<(), EnvError> {
        let key = frame.key();
        let text = self.env_string(&key, frame)?;

        let parts = self.config.split(&text);

        if self.replaces_sequence(&text) {
            log::debug!("`{key}` replaces the existing sequence");
            list.clear();
        }

        let mut errors = Vec::new();
        for (index, part) in parts.iter().enumerate() {
            while list.len() <= index {
                list.push_default();
            }
            if let Some(item) = list.item_mut(index)
                && let Err(error) = self.parse_value(item, Frame::element(part))
            {
                errors.push(ElementError::new(index, error));
            }
        }

        collect_elements(key, errors)
    }

    /// Sequences are zeroed before their elements are written, or merged into otherwise.
    #[inline]
    fn replaces_sequence(&self, text: &str) -> bool {
        self.config.zero_before_write() || (text.is_empty() && self.config.allow_empty())
    }

    /// Stores `text` into a leaf, or its zero value when empty text is allowed.
    fn assign_leaf(&self, leaf: ShapeMut<'_>, key: String, text: String) -> Result<(), EnvError> {
        let zero = text.is_empty() && self.config.allow_empty();

        match leaf {
            ShapeMut::Bool(value) => {
                *value = if zero {
                    false
                } else {
                    parse_bool(&text).map_err(|source| coercion(key, text, "bool", source))?
                };
            }
            ShapeMut::Int(mut number) => {
                if zero {
                    number.set_zero();
                } else if let Err(source) = number.assign_text(&text) {
                    return Err(coercion(key, text, number.type_name(), source));
                }
            }
            ShapeMut::Uint(mut number) => {
                if zero {
                    number.set_zero();
                } else if let Err(source) = number.assign_text(&text) {
                    return Err(coercion(key, text, number.type_name(), source));
                }
            }
            ShapeMut::Float(mut number) => {
                if zero {
                    number.set_zero();
                } else if let Err(source) = number.assign_text(&text) {
                    return Err(coercion(key, text, number.type_name(), source));
                }
            }
            ShapeMut::String(value) => *value = text,
            ShapeMut::Dynamic(value) => *value = Dynamic::Text(text),
            ShapeMut::Opaque(value) => {
                // Opaque leaves have no known zero and keep their value.
                if !zero && let Err(source) = value.assign_text(&text) {
                    let expected = value.type_name();
                    return Err(coercion(key, text, expected, ScalarError::Opaque(source)));
                }
            }
            ShapeMut::Map { type_name } => return Err(unsupported(key, type_name)),
            ShapeMut::Struct(_) | ShapeMut::Pointer(_) | ShapeMut::Array(_) | ShapeMut::List(_) => {
                // Containers are dispatched by `parse_value` and never reach here.
            }
        }
        Ok(())
    }
}

#[inline]
fn coercion(key: String, text: String, expected: &'static str, source: ScalarError) -> EnvError {
    EnvError::Coercion {
        key,
        text,
        expected,
        source,
    }
}

pub(super) fn unsupported(key: String, type_name: &'static str) -> EnvError {
    log::warn!("`{key}`: map type `{type_name}` is not supported");
    EnvError::Unsupported { key, type_name }
}

#[inline]
fn collect_elements(key: String, errors: Vec<ElementError>) -> Result<(), EnvError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EnvError::Elements { key, errors })
    }
}
