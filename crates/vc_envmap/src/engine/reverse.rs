use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::Walker;
use super::forward::unsupported;
use super::plan::{FieldPlan, Frame};
use crate::EnvShape;
use crate::error::EnvError;
use crate::info::ShapeKind;
use crate::ops::{EnvStruct, ShapeRef};

impl<S: ?Sized> Walker<'_, S> {
    /// Appends one `KEY=value` line per visited location of `value` to `out`.
    ///
    /// The source is never read.
    pub(crate) fn marshal_value(
        &self,
        value: &dyn EnvShape,
        frame: Frame<'_>,
        out: &mut String,
    ) -> Result<(), EnvError> {
        match value.shape_ref() {
            ShapeRef::Struct(record) => self.marshal_struct(record, frame, out),
            ShapeRef::Pointer(pointer) => match pointer.pointee() {
                Some(pointee) => self.marshal_value(pointee, frame, out),
                None => Ok(()),
            },
            ShapeRef::Array(array) => {
                let key = frame.key();
                let items = (0..array.capacity()).filter_map(|index| array.item(index));
                let text = self.join_items(items, &key)?;
                push_line(out, &key, &text);
                Ok(())
            }
            ShapeRef::List(list) => {
                let key = frame.key();
                let items = (0..list.len()).filter_map(|index| list.item(index));
                let text = self.join_items(items, &key)?;
                push_line(out, &key, &text);
                Ok(())
            }
            ShapeRef::Map { type_name } => Err(unsupported(frame.key(), type_name)),
            leaf => {
                let key = frame.key();
                let text = render_text(leaf).map_err(|kind| EnvError::NotRenderable {
                    key: key.clone(),
                    kind,
                })?;
                push_line(out, &key, &text);
                Ok(())
            }
        }
    }

    fn marshal_struct(
        &self,
        record: &dyn EnvStruct,
        frame: Frame<'_>,
        out: &mut String,
    ) -> Result<(), EnvError> {
        for index in 0..record.field_len() {
            let (Some(info), Some(field)) = (record.field_info(index), record.field_at(index)) else {
                continue;
            };
            let Some(plan) = FieldPlan::new(self.config, info, field.shape_kind(), frame.prefix)
            else {
                continue;
            };

            self.marshal_value(field, plan.frame(frame.direct), out)?;
        }
        Ok(())
    }

    fn join_items<'v>(
        &self,
        items: impl Iterator<Item = &'v dyn EnvShape>,
        key: &str,
    ) -> Result<String, EnvError> {
        let parts = items
            .map(|item| {
                render_text(item.shape_ref()).map_err(|kind| EnvError::NotRenderable {
                    key: key.into(),
                    kind,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.config.join(&parts))
    }
}

/// Renders a leaf as text, an absent pointee renders as `""`.
///
/// Returns the offending kind for locations that have no single-text form.
fn render_text(view: ShapeRef<'_>) -> Result<String, ShapeKind> {
    Ok(match view {
        ShapeRef::Bool(value) => value.to_string(),
        ShapeRef::Int(number) => number.to_string(),
        ShapeRef::Uint(number) => number.to_string(),
        ShapeRef::Float(number) => number.to_string(),
        ShapeRef::String(value) => value.clone(),
        ShapeRef::Dynamic(value) => value.to_string(),
        ShapeRef::Opaque(value) => value.render_text(),
        ShapeRef::Pointer(pointer) => match pointer.pointee() {
            Some(pointee) => return render_text(pointee.shape_ref()),
            None => String::new(),
        },
        other @ (ShapeRef::Array(_)
        | ShapeRef::List(_)
        | ShapeRef::Struct(_)
        | ShapeRef::Map { .. }) => return Err(other.kind()),
    })
}

#[inline]
fn push_line(out: &mut String, key: &str, text: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::render_text;
    use crate::info::ShapeKind;
    use crate::source::EmptySource;
    use crate::{Dynamic, EnvConfig, EnvParser, EnvShape};

    fn marshal<T: EnvShape>(config: EnvConfig, value: &T) -> String {
        EnvParser::with_source(config, EmptySource).marshal(value).unwrap()
    }

    #[test]
    fn scalars_render_with_display() {
        let config = || EnvConfig::new().with_key_prefix("K");
        assert_eq!(marshal(config(), &true), "K=true\n");
        assert_eq!(marshal(config(), &-12_i8), "K=-12\n");
        assert_eq!(marshal(config(), &0.1_f64), "K=0.1\n");
        assert_eq!(marshal(config(), &1.5_f32), "K=1.5\n");
        assert_eq!(marshal(config(), &String::from("a b")), "K=a b\n");
        assert_eq!(marshal(config(), &Dynamic::Unset), "K=\n");
    }

    #[test]
    fn pointers() {
        assert_eq!(marshal(EnvConfig::new(), &None::<u8>), "");
        assert_eq!(marshal(EnvConfig::new(), &Some(3_u8)), "=3\n");
        assert_eq!(render_text(Some(Some(4_u8)).shape_ref()).unwrap(), "4");
    }

    #[test]
    fn sequences_use_join_fn() {
        let config = EnvConfig::new()
            .with_key_prefix("L")
            .with_join_fn(|parts: &[String]| parts.join(";"));
        assert_eq!(marshal(config, &vec![1, 2, 3]), "L=1;2;3\n");
        assert_eq!(marshal(EnvConfig::new(), &[Some(1), None]), "=1,\n");
        assert_eq!(marshal(EnvConfig::new(), &Vec::<i32>::new()), "=\n");
    }

    #[test]
    fn nested_sequences_are_not_renderable() {
        let err = EnvParser::with_source(EnvConfig::new(), EmptySource)
            .marshal(&vec![vec![1]])
            .unwrap_err();
        match err {
            crate::EnvError::NotRenderable { kind, .. } => assert_eq!(kind, ShapeKind::List),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn maps_are_rejected() {
        let err = EnvParser::with_source(EnvConfig::new(), EmptySource)
            .marshal(&BTreeMap::<String, i32>::new())
            .unwrap_err();
        assert!(err.is_unsupported());
    }
}
