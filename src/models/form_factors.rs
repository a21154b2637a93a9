use std::fmt;

use bitflags::bitflags;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The packaging/runtime targets a pipeline stage can run under.
    ///
    /// A configuration that omits its `mode` key gets `None` at the model
    /// level; the consuming stage treats that as "just [`BUILD_TIME`]".
    ///
    /// [`BUILD_TIME`]: FormFactors::BUILD_TIME
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FormFactors: u8 {
        /// Source generation at build time.
        const BUILD_TIME = 1 << 0;
        /// Reflection-based generation at runtime.
        const REFLECTION = 1 << 1;
    }
}

const FORM_FACTOR_NAMES: &[(FormFactors, &str)] = &[
    (FormFactors::BUILD_TIME, "buildTime"),
    (FormFactors::REFLECTION, "reflection"),
];

impl FormFactors {
    /// Parse a single wire name into its form-factor flag.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        FORM_FACTOR_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(flag, _)| *flag)
    }

    /// The wire names of every form factor set in this value.
    pub fn names(self) -> Vec<&'static str> {
        FORM_FACTOR_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

// The `mode` key accepts a single form-factor name or an array of names.
// Saving always emits the array form.

impl Serialize for FormFactors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

impl<'de> Deserialize<'de> for FormFactors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FormFactorsVisitor)
    }
}

struct FormFactorsVisitor;

impl<'de> Visitor<'de> for FormFactorsVisitor {
    type Value = FormFactors;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a form factor name or an array of form factor names")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        FormFactors::from_wire_name(value)
            .ok_or_else(|| de::Error::custom(format_args!("unknown form factor: {value:?}")))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = FormFactors::empty();
        while let Some(name) = seq.next_element::<String>()? {
            set |= FormFactors::from_wire_name(&name).ok_or_else(|| {
                de::Error::custom(format_args!("unknown form factor: {name:?}"))
            })?;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_string_form() {
        let factors: FormFactors = serde_json::from_str(r#""reflection""#).unwrap();
        assert_eq!(factors, FormFactors::REFLECTION);
    }

    #[test]
    fn test_array_form() {
        let factors: FormFactors =
            serde_json::from_str(r#"["buildTime", "reflection"]"#).unwrap();
        assert_eq!(factors, FormFactors::all());
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!(serde_json::from_str::<FormFactors>(r#""jit""#).is_err());
        assert!(serde_json::from_str::<FormFactors>(r#"["jit"]"#).is_err());
    }

    #[test]
    fn test_round_trip() {
        let factors = FormFactors::BUILD_TIME | FormFactors::REFLECTION;
        let json = serde_json::to_string(&factors).unwrap();
        assert_eq!(json, r#"["buildTime","reflection"]"#);

        let loaded: FormFactors = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, factors);
    }
}
