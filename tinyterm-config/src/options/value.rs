//! Dynamically typed option values for name-addressed access.

use std::fmt;

use crate::config::Config;
use crate::error::ConfigError;
use crate::types::{Colour, TriState};

use super::def::{Field, OptionDef, OptionType};
use super::table;

/// An option value detached from any snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Bool(bool),
    Int(i32),
    Colour(Colour),
}

impl OptionValue {
    pub fn value_type(&self) -> OptionType {
        match self {
            OptionValue::String(_) => OptionType::String,
            OptionValue::Bool(_) => OptionType::Bool,
            OptionValue::Int(_) => OptionType::Int,
            OptionValue::Colour(_) => OptionType::Colour,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            OptionValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_colour(&self) -> Option<Colour> {
        match self {
            OptionValue::Colour(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(s) => f.write_str(s),
            OptionValue::Bool(b) => write!(f, "{}", u8::from(*b)),
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Colour(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value)
    }
}

impl From<Colour> for OptionValue {
    fn from(value: Colour) -> Self {
        OptionValue::Colour(value)
    }
}

impl Config {
    /// Read an option's value through its descriptor.
    ///
    /// A legacy boolean that is still unset reads as its effective value.
    pub fn value(&self, def: &OptionDef) -> OptionValue {
        match def.field {
            Field::String(get, _) => OptionValue::String(get(self).clone()),
            Field::Bool(get, _) => OptionValue::Bool(*get(self)),
            Field::TriState(get, _, unset) => {
                OptionValue::Bool(get(self).as_bool().unwrap_or_else(|| unset(self)))
            }
            Field::Int(get, _) => OptionValue::Int(*get(self)),
            Field::Colour(get, _) => OptionValue::Colour(*get(self)),
        }
    }

    /// Write an option's value through its descriptor.
    pub fn set_value(&mut self, def: &OptionDef, value: OptionValue) -> Result<(), ConfigError> {
        match (def.field, value) {
            (Field::String(..), OptionValue::String(s)) if s.contains(['\r', '\n']) => {
                return Err(ConfigError::MultiLineValue(def.name.to_string()));
            }
            (Field::String(_, get_mut), OptionValue::String(s)) => *get_mut(self) = s,
            (Field::Bool(_, get_mut), OptionValue::Bool(b)) => *get_mut(self) = b,
            (Field::TriState(_, get_mut, _), OptionValue::Bool(b)) => *get_mut(self) = TriState::from(b),
            (Field::Int(_, get_mut), OptionValue::Int(i)) => *get_mut(self) = i,
            (Field::Colour(_, get_mut), OptionValue::Colour(c)) => *get_mut(self) = c,
            (_, value) => {
                return Err(ConfigError::TypeMismatch {
                    option: def.name.to_string(),
                    expected: def.value_type(),
                    got: value.value_type(),
                });
            }
        }
        Ok(())
    }

    /// Read an option by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<OptionValue, ConfigError> {
        let def = table::find(name).ok_or_else(|| ConfigError::UnknownOption(name.to_string()))?;
        Ok(self.value(def))
    }

    /// Write an option by name (case-insensitive).
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<(), ConfigError> {
        let def = table::find(name).ok_or_else(|| ConfigError::UnknownOption(name.to_string()))?;
        self.set_value(def, value.into())
    }
}
