//! Option descriptors and typed field locators.

use std::fmt;

use crate::config::Config;
use crate::types::{Colour, TriState};

/// Value type of an option as seen by the rc file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    String,
    Bool,
    Int,
    Colour,
}

impl OptionType {
    pub fn name(self) -> &'static str {
        match self {
            OptionType::String => "string",
            OptionType::Bool => "boolean",
            OptionType::Int => "integer",
            OptionType::Colour => "colour",
        }
    }
}

/// Location of an option's value inside a [`Config`].
///
/// Each variant carries a shared and a mutable accessor for one field of the
/// matching Rust type, so a descriptor can never point at a field of the
/// wrong type.
#[derive(Clone, Copy)]
pub enum Field {
    String(fn(&Config) -> &String, fn(&mut Config) -> &mut String),
    Bool(fn(&Config) -> &bool, fn(&mut Config) -> &mut bool),
    /// Boolean with a legacy unset state; reads and writes as a boolean.
    /// The third accessor gives the value an unset field stands for.
    TriState(
        fn(&Config) -> &TriState,
        fn(&mut Config) -> &mut TriState,
        fn(&Config) -> bool,
    ),
    Int(fn(&Config) -> &i32, fn(&mut Config) -> &mut i32),
    Colour(fn(&Config) -> &Colour, fn(&mut Config) -> &mut Colour),
}

impl Field {
    pub fn value_type(&self) -> OptionType {
        match self {
            Field::String(..) => OptionType::String,
            Field::Bool(..) | Field::TriState(..) => OptionType::Bool,
            Field::Int(..) => OptionType::Int,
            Field::Colour(..) => OptionType::Colour,
        }
    }
}

/// Static description of one configurable setting.
#[derive(Clone, Copy)]
pub struct OptionDef {
    /// Name used in the rc file, matched case-insensitively
    pub name: &'static str,
    pub field: Field,
    /// Input-only legacy name: accepted on load, never written
    pub compat: bool,
}

impl OptionDef {
    pub const fn new(name: &'static str, field: Field) -> Self {
        Self {
            name,
            field,
            compat: false,
        }
    }

    pub const fn compat(name: &'static str, field: Field) -> Self {
        Self {
            name,
            field,
            compat: true,
        }
    }

    pub fn value_type(&self) -> OptionType {
        self.field.value_type()
    }
}

impl fmt::Debug for OptionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDef")
            .field("name", &self.name)
            .field("type", &self.value_type())
            .field("compat", &self.compat)
            .finish()
    }
}
