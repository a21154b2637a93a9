use std::fmt;

use bitflags::bitflags;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

bitflags! {
    /// Categorical exclusion hints: whole kinds of native symbols dropped from
    /// the generated bindings, independent of their names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ExclusionHints: u8 {
        const FUNCTIONS = 1 << 0;
        const ENUMS = 1 << 1;
        const STRUCTS = 1 << 2;
        const UNIONS = 1 << 3;
        const TYPEDEFS = 1 << 4;
        const MACROS = 1 << 5;
        const VARIABLES = 1 << 6;
    }
}

/// The wire names for each hint, in declaration order.
const HINT_NAMES: &[(ExclusionHints, &str)] = &[
    (ExclusionHints::FUNCTIONS, "functions"),
    (ExclusionHints::ENUMS, "enums"),
    (ExclusionHints::STRUCTS, "structs"),
    (ExclusionHints::UNIONS, "unions"),
    (ExclusionHints::TYPEDEFS, "typedefs"),
    (ExclusionHints::MACROS, "macros"),
    (ExclusionHints::VARIABLES, "variables"),
];

impl ExclusionHints {
    /// Parse a single wire name into its hint flag.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        HINT_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(flag, _)| *flag)
    }

    /// The wire names of every hint set in this value, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        HINT_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// Describes which native symbols a scraper job omits from its bindings.
///
/// Exclusion is the union of both parts: a symbol is excluded when its name
/// appears in [`identifiers`](Self::identifiers) or when its kind is covered
/// by [`hints`](Self::hints).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Excludes {
    /// Symbols excluded by exact name.
    pub identifiers: Vec<String>,

    /// Symbol kinds excluded wholesale.
    pub hints: ExclusionHints,
}

impl Excludes {
    /// Whether a symbol with the given name and kind should be excluded.
    pub fn matches(&self, name: &str, kind: ExclusionHints) -> bool {
        self.hints.intersects(kind) || self.identifiers.iter().any(|id| id == name)
    }
}

// The document form is either the canonical object
// `{"identifiers": [...], "hints": [...]}` or a bare array of identifier
// strings. Saving always emits the canonical object.

impl Serialize for Excludes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("identifiers", &self.identifiers)?;
        map.serialize_entry("hints", &self.hints.names())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Excludes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExcludesVisitor)
    }
}

struct ExcludesVisitor;

impl<'de> Visitor<'de> for ExcludesVisitor {
    type Value = Excludes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of identifiers or an object with \"identifiers\" and \"hints\"")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut identifiers = Vec::new();
        while let Some(id) = seq.next_element::<String>()? {
            identifiers.push(id);
        }
        Ok(Excludes {
            identifiers,
            hints: ExclusionHints::empty(),
        })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut identifiers = None;
        let mut hints = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "identifiers" => {
                    if identifiers.is_some() {
                        return Err(de::Error::duplicate_field("identifiers"));
                    }
                    identifiers = Some(map.next_value::<Vec<String>>()?);
                }
                "hints" => {
                    if hints.is_some() {
                        return Err(de::Error::duplicate_field("hints"));
                    }
                    let names = map.next_value::<Vec<String>>()?;
                    let mut set = ExclusionHints::empty();
                    for name in &names {
                        set |= ExclusionHints::from_wire_name(name).ok_or_else(|| {
                            de::Error::custom(format_args!("unknown exclusion hint: {name:?}"))
                        })?;
                    }
                    hints = Some(set);
                }
                other => {
                    return Err(de::Error::unknown_field(other, &["identifiers", "hints"]));
                }
            }
        }
        Ok(Excludes {
            identifiers: identifiers.unwrap_or_default(),
            hints: hints.unwrap_or_default(),
        })
    }
}
