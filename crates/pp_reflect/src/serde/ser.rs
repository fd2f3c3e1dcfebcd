use core::fmt::Display;

use serde_core::ser::{Error, SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use super::MAX_SERIALIZE_DEPTH;

use crate::value::{Composite, ListRef, Value};

#[inline]
fn depth_error<E: Error>(type_name: impl Display) -> E {
    E::custom(format_args!(
        "`{type_name}` is nested deeper than {MAX_SERIALIZE_DEPTH} levels, the graph may be cyclic"
    ))
}

/// Serializes a value found `depth` containers below the root.
struct ValueSerializer<'a> {
    value: &'a Value,
    depth: usize,
}

impl Serialize for ValueSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Str(value) => serializer.serialize_str(value),
            Value::Struct(composite) => CompositeSerializer {
                composite,
                depth: self.depth,
            }
            .serialize(serializer),
            Value::Object(object) => CompositeSerializer {
                composite: &object.borrow(),
                depth: self.depth,
            }
            .serialize(serializer),
            Value::List(list) => ListSerializer {
                list,
                depth: self.depth,
            }
            .serialize(serializer),
        }
    }
}

struct CompositeSerializer<'a> {
    composite: &'a Composite,
    depth: usize,
}

impl Serialize for CompositeSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.depth >= MAX_SERIALIZE_DEPTH {
            return Err(depth_error(self.composite.type_name()));
        }

        let fields = self.composite.fields();
        let mut state = serializer.serialize_map(None)?;
        for (name, value) in fields {
            state.serialize_entry(
                name,
                &ValueSerializer {
                    value,
                    depth: self.depth + 1,
                },
            )?;
        }
        state.end()
    }
}

struct ListSerializer<'a> {
    list: &'a ListRef,
    depth: usize,
}

impl Serialize for ListSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.depth >= MAX_SERIALIZE_DEPTH {
            return Err(depth_error(format_args!("list<{}>", self.list.element())));
        }

        let items = self.list.borrow();
        let mut state = serializer.serialize_seq(Some(items.len()))?;
        for value in items.iter() {
            state.serialize_element(&ValueSerializer {
                value,
                depth: self.depth + 1,
            })?;
        }
        state.end()
    }
}

impl Serialize for Value {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ValueSerializer {
            value: self,
            depth: 0,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use super::MAX_SERIALIZE_DEPTH;

    use crate::access::PathAccess;
    use crate::info::{MemberInfo, TypeInfo, ValueType, Visibility};
    use crate::registry::TypeRegistry;
    use crate::value::{ListRef, Value};

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                TypeInfo::value_type("Point")
                    .with_member(MemberInfo::field("x", ValueType::Int))
                    .with_member(MemberInfo::field("y", ValueType::Int)),
            )
            .unwrap();
        registry
            .register(
                TypeInfo::object("Shape")
                    .with_member(MemberInfo::field("name", ValueType::Str))
                    .with_member(MemberInfo::field("origin", ValueType::struct_of("Point")))
                    .with_member(MemberInfo::field(
                        "corners",
                        ValueType::list_of(ValueType::struct_of("Point")),
                    ))
                    .with_member(MemberInfo::field("parent", ValueType::object_of("Shape")))
                    .with_member(
                        MemberInfo::field("cache", ValueType::Any)
                            .with_visibility(Visibility::Private),
                    )
                    .with_member(MemberInfo::property(
                        "area",
                        ValueType::Float,
                        |_| Value::Float(1.0),
                        None,
                    )),
            )
            .unwrap();
        registry
    }

    #[test]
    fn scalars() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::Int(-3)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&Value::Float(0.5)).unwrap(), "0.5");
        assert_eq!(serde_json::to_string(&Value::from("hi")).unwrap(), "\"hi\"");
    }

    #[test]
    fn containers() {
        let registry = registry();
        let shape = registry.instantiate("Shape").unwrap();
        shape.set_path("name", "tri").unwrap();
        shape.set_path("origin.x", 2).unwrap();

        let point = registry.instantiate("Point").unwrap();
        let corners = ListRef::from_values(ValueType::struct_of("Point"), [point]).unwrap();
        shape.set_path("corners", corners).unwrap();

        assert_eq!(
            serde_json::to_string(&shape).unwrap(),
            r#"{"name":"tri","origin":{"x":2,"y":0},"corners":[{"x":0,"y":0}],"parent":null,"cache":null}"#
        );
    }

    #[test]
    fn cycles_are_bounded() {
        let registry = registry();
        let shape = registry.instantiate("Shape").unwrap();
        shape.set_path("parent", shape.clone()).unwrap();

        let err = serde_json::to_string(&shape).unwrap_err().to_string();
        let expected = format!("nested deeper than {MAX_SERIALIZE_DEPTH} levels");
        assert!(err.contains(&expected), "{err}");

        shape.set_path("parent", Value::Null).unwrap();
    }
}
