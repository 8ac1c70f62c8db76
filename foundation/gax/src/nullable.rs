use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request field that can be left out, sent as JSON `null`, or sent with a value.
///
/// Use it with `#[serde(default, skip_serializing_if = "Nullable::is_unset")]` so that `Unset`
/// fields are omitted. `Null` is how a PATCH request clears a field on the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Nullable<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            Nullable::Unset | Nullable::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        })
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::nullable::Nullable;

    #[derive(serde::Serialize, serde::Deserialize, Default, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Patch {
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        notes: Nullable<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<i32>,
    }

    #[test]
    fn test_serialize() {
        let unset = Patch::default();
        assert_eq!(json!({}), serde_json::to_value(&unset).unwrap());

        let null = Patch {
            notes: Nullable::Null,
            count: Some(0),
        };
        assert_eq!(json!({"notes": null, "count": 0}), serde_json::to_value(&null).unwrap());

        let value = Patch {
            notes: "memo".to_string().into(),
            count: None,
        };
        assert_eq!(json!({"notes": "memo"}), serde_json::to_value(&value).unwrap());
    }

    #[test]
    fn test_deserialize() {
        let v: Patch = serde_json::from_value(json!({})).unwrap();
        assert!(v.notes.is_unset());
        let v: Patch = serde_json::from_value(json!({"notes": null})).unwrap();
        assert!(v.notes.is_null());
        let v: Patch = serde_json::from_value(json!({"notes": "memo", "count": 0})).unwrap();
        assert_eq!(Some(&"memo".to_string()), v.notes.as_ref());
        assert_eq!(Some(0), v.count);
    }
}
