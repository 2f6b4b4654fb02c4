use crate::argument::{ArgKind, ArgumentSpec, DefaultValue};
use crate::command::CommandSpec;
use crate::parse_result::ParsedResult;
use crate::value::Value;
use ::serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use ::serde::{Serialize, Serializer};

// Value
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::None => serializer.serialize_none(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Str(value) => serializer.serialize_str(value),
            Value::Path(value) => serializer.serialize_str(&value.to_string_lossy()),
            Value::List(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

// ParsedResult
impl Serialize for ParsedResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ArgumentSpec
impl Serialize for ArgumentSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let kind = match self.get_kind() {
            ArgKind::Positional => "positional",
            ArgKind::Optional => "optional",
        };

        let default = match self.get_default() {
            Some(DefaultValue::Raw(values)) if values.len() == 1 => Value::from(values[0].as_str()),
            Some(DefaultValue::Raw(values)) => Value::from(values.clone()),
            Some(DefaultValue::Typed(value)) => value.clone(),
            None => Value::None,
        };

        let mut state = serializer.serialize_struct("ArgumentSpec", 8)?;
        state.serialize_field("name", self.get_name())?;
        state.serialize_field("kind", kind)?;
        state.serialize_field("aliases", &self.get_aliases().collect::<Vec<&String>>())?;
        state.serialize_field("min_values", &self.get_arity().min())?;
        state.serialize_field("max_values", &self.get_arity().max())?;
        state.serialize_field("default", &default)?;
        state.serialize_field("choices", self.get_choices())?;
        state.serialize_field("help", &self.get_help())?;
        state.end()
    }
}

// CommandSpec
impl Serialize for CommandSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CommandSpec", 3)?;
        state.serialize_field("name", self.get_name())?;
        state.serialize_field("description", &self.get_description())?;
        state.serialize_field("args", self.get_args())?;
        state.end()
    }
}
