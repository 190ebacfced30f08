use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Identity of any row that lives on the backend.
///
/// Wire decoding accepts numbers, numeric strings, `null` and the client-side
/// sentinels `"new"` / `"temp"`. `Unsaved` is written back as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntityId {
    #[default]
    Unsaved,
    Saved(i64),
}

impl EntityId {
    pub fn saved(&self) -> Option<i64> {
        match self {
            EntityId::Saved(id) => Some(*id),
            EntityId::Unsaved => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, EntityId::Saved(_))
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Saved(id)
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            EntityId::Saved(id) => serializer.serialize_i64(*id),
            EntityId::Unsaved => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match Option::<RawId>::deserialize(deserializer)? {
            None => Ok(EntityId::Unsaved),
            Some(RawId::Number(id)) => Ok(EntityId::Saved(id)),
            Some(RawId::Text(text)) => {
                let text = text.trim();
                match text {
                    "" | "new" | "temp" => Ok(EntityId::Unsaved),
                    _ => text
                        .parse::<i64>()
                        .map(EntityId::Saved)
                        .map_err(|_| de::Error::custom(format!("invalid entity id: {text}"))),
                }
            }
        }
    }
}

/// Like the `EntityId` decoder, but any non-numeric text id (client-generated
/// keys such as `"ts-1712345"`) reads as `Unsaved` instead of failing.
pub fn lenient_entity_id<'de, D>(deserializer: D) -> Result<EntityId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_i64().map_or(EntityId::Unsaved, EntityId::Saved),
        Some(serde_json::Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_or(EntityId::Unsaved, EntityId::Saved),
        _ => EntityId::Unsaved,
    })
}
