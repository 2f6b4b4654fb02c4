use crate::arity::Arity;
use crate::converter::{Converter, StringConverter};
use crate::error::ValidationError;
use crate::value::Value;
use linked_hash_set::LinkedHashSet;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// How an argument is identified on the command line.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ArgKind {
    /// Identified by its position.
    Positional,
    /// Identified by an alias such as `-v` or `--verbose`.
    Optional,
}

/// The value used when an argument is not given.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DefaultValue {
    /// Raw strings, passed through the argument converter when applied.
    Raw(Vec<String>),
    /// A value used as is.
    Typed(Value),
}

/// Declares one accepted command-line argument.
///
/// # Example
/// ```
/// use argspec::{ArgumentSpec, Arity};
/// use argspec::converter;
///
/// let size = ArgumentSpec::option("size")
///     .alias("-s")
///     .alias("--size")
///     .converter(converter::size())
///     .default("1MB");
///
/// assert_eq!(size.get_arity(), Arity::ExactlyOne);
/// assert!(size.has_alias("-s"));
/// ```
#[derive(Clone)]
pub struct ArgumentSpec {
    name: String,
    aliases: LinkedHashSet<String>,
    kind: ArgKind,
    arity: Arity,
    default: Option<DefaultValue>,
    choices: Vec<String>,
    converter: Rc<dyn Converter>,
    is_required: bool,
    help: Option<String>,
    metavar: Option<String>,
}

impl ArgumentSpec {
    fn new(name: String, kind: ArgKind) -> Self {
        ArgumentSpec {
            name,
            aliases: LinkedHashSet::new(),
            kind,
            arity: Arity::ExactlyOne,
            default: None,
            choices: vec![],
            converter: Rc::new(StringConverter),
            is_required: false,
            help: None,
            metavar: None,
        }
    }

    /// Constructs a new positional argument that takes exactly 1 value.
    pub fn positional<S: Into<String>>(name: S) -> Self {
        Self::new(name.into(), ArgKind::Positional)
    }

    /// Constructs a new optional argument that takes exactly 1 value.
    ///
    /// Optional arguments need at least one alias.
    pub fn option<S: Into<String>>(name: S) -> Self {
        Self::new(name.into(), ArgKind::Optional)
    }

    /// Constructs a new on/off optional argument.
    pub fn flag<S: Into<String>>(name: S) -> Self {
        Self::option(name).arity(Arity::Flag)
    }

    /// Returns the canonical name of this argument.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns an `Iterator` over the aliases of this argument.
    pub fn get_aliases(&self) -> impl ExactSizeIterator<Item = &'_ String> {
        self.aliases.iter()
    }

    /// Returns the kind of this argument.
    pub fn get_kind(&self) -> ArgKind {
        self.kind
    }

    /// Returns the number of values this argument takes.
    pub fn get_arity(&self) -> Arity {
        self.arity
    }

    /// Returns the default value or `None` if not set.
    pub fn get_default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// Returns the allowed values or a 0-length slice if any value is allowed.
    pub fn get_choices(&self) -> &[String] {
        self.choices.as_slice()
    }

    /// Returns the `Converter` of this argument.
    pub fn get_converter(&self) -> &dyn Converter {
        self.converter.as_ref()
    }

    /// Returns the help message of this argument.
    pub fn get_help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns the name used for the values in the help message.
    pub fn get_metavar(&self) -> String {
        match &self.metavar {
            Some(metavar) => metavar.clone(),
            None if !self.choices.is_empty() => format!("{{{}}}", self.choices.join(",")),
            None if self.is_positional() => self.name.clone(),
            None => self.name.to_uppercase(),
        }
    }

    /// Returns `true` if this is a positional argument.
    pub fn is_positional(&self) -> bool {
        self.kind == ArgKind::Positional
    }

    /// Returns `true` if this argument is a flag.
    pub fn is_flag(&self) -> bool {
        self.arity == Arity::Flag
    }

    /// Returns `true` if parsing fails when this argument is absent and has no default.
    pub fn is_required(&self) -> bool {
        match self.kind {
            ArgKind::Positional => !self.arity.is_optional(),
            ArgKind::Optional => self.is_required,
        }
    }

    pub(crate) fn is_marked_required(&self) -> bool {
        self.is_required
    }

    /// Returns `true` if this argument contains the specified alias.
    pub fn has_alias<S: AsRef<str>>(&self, alias: S) -> bool {
        self.aliases.contains(alias.as_ref())
    }

    /// Returns the name shown in error messages, `-m/--mode` or `source`.
    pub fn display_name(&self) -> String {
        if self.aliases.is_empty() {
            self.name.clone()
        } else {
            self.aliases
                .iter()
                .cloned()
                .collect::<Vec<String>>()
                .join("/")
        }
    }

    /// Adds a new alias to this argument, for example `-v` or `--verbose`.
    pub fn alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.aliases.insert(alias.into());
        self
    }

    /// Sets the number of values this argument takes.
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Sets the default value of this argument, converted when applied.
    pub fn default<S: ToString>(self, value: S) -> Self {
        self.defaults(vec![value])
    }

    /// Sets the default values of this argument, converted when applied.
    pub fn defaults<S, I>(mut self, values: I) -> Self
    where
        S: ToString,
        I: IntoIterator<Item = S>,
    {
        let values = values
            .into_iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>();

        self.default = Some(DefaultValue::Raw(values));
        self
    }

    /// Sets an already typed default value for this argument.
    pub fn default_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.default = Some(DefaultValue::Typed(value.into()));
        self
    }

    /// Restricts the accepted raw values to the given set.
    pub fn choices<S, I>(mut self, values: I) -> Self
    where
        S: ToString,
        I: IntoIterator<Item = S>,
    {
        self.choices = values.into_iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets the `Converter` of this argument, by default values are kept as strings.
    pub fn converter<C: Converter + 'static>(mut self, converter: C) -> Self {
        self.converter = Rc::new(converter);
        self
    }

    /// Specify if this optional argument is required, by default is `false`.
    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    /// Sets the help message of this argument.
    ///
    /// `{default}` in the message is replaced by the default value.
    pub fn help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the name used for the values in the help message.
    pub fn metavar<S: Into<String>>(mut self, metavar: S) -> Self {
        self.metavar = Some(metavar.into());
        self
    }

    /// Checks a raw value against the choices and passes it to the converter.
    pub fn convert(&self, raw: &str) -> Result<Value, ValidationError> {
        if !self.choices.is_empty() && !self.choices.iter().any(|s| s == raw) {
            let choices = self
                .choices
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<String>>()
                .join(", ");

            return Err(ValidationError::new(format!(
                "invalid choice (choose from {})",
                choices
            )));
        }

        log::trace!("converting `{}` with `{}` for `{}`", raw, self.converter.name(), self.name);
        self.converter.convert(raw)
    }
}

impl Debug for ArgumentSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentSpec")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("kind", &self.kind)
            .field("arity", &self.arity)
            .field("default", &self.default)
            .field("choices", &self.choices)
            .field("converter", &self.converter.name())
            .field("is_required", &self.is_required)
            .finish()
    }
}

impl Eq for ArgumentSpec {}

impl PartialEq for ArgumentSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
