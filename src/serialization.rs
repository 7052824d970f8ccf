use super::{Name, RelatedName};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Cow;

#[derive(serde::Serialize)]
struct NameView<'a> {
    common: &'a str,
    file_as: Cow<'a, str>,
    surname: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    forename: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    generation: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    relator: Option<&'a str>,
}

impl<'a> NameView<'a> {
    fn new(name: &'a Name, relator: Option<&'a str>) -> NameView<'a> {
        NameView {
            common: name.common(),
            file_as: name.file_as(),
            surname: name.surname(),
            forename: name.forename(),
            generation: name.generation(),
            relator,
        }
    }
}

fn is_empty(s: &&str) -> bool {
    s.is_empty()
}

// The derived fields (`common`, `file_as`) are ignored on the way in; the
// constructors recompute them.
#[derive(serde::Deserialize)]
struct NameRecord {
    #[serde(default)]
    surname: String,
    #[serde(default)]
    forename: String,
    #[serde(default)]
    generation: String,
}

impl NameRecord {
    fn into_name(self) -> super::Result<Name> {
        if self.forename.is_empty() && self.generation.is_empty() {
            if self.surname.is_empty() {
                Ok(Name::EMPTY)
            } else {
                Name::one_part(&self.surname)
            }
        } else if self.generation.is_empty() {
            Name::two_part(&self.forename, &self.surname)
        } else {
            // With no forename this fails, naming the blank argument
            Name::three_part(&self.forename, &self.surname, &self.generation)
        }
    }
}

#[derive(serde::Deserialize)]
struct RelatedNameRecord {
    #[serde(flatten)]
    name: NameRecord,
    relator: String,
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NameView::new(self, None).serialize(serializer)
    }
}

impl Serialize for RelatedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NameView::new(self.name(), Some(self.relator())).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Name, D::Error> {
        NameRecord::deserialize(deserializer)?
            .into_name()
            .map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for RelatedName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RelatedName, D::Error> {
        let record = RelatedNameRecord::deserialize(deserializer)?;
        let name = record.name.into_name().map_err(de::Error::custom)?;
        RelatedName::new(name, &record.relator).map_err(de::Error::custom)
    }
}
