use crate::argument::{ArgKind, ArgumentSpec, DefaultValue};
use crate::arity::Arity;
use crate::error::{Error, Result};
use crate::value::Value;

/// The set of arguments accepted by a program.
///
/// Entries are kept in declaration order, which is the order positional values are assigned.
///
/// # Example
/// ```
/// use argspec::{ArgumentSpec, Arity, CommandSpec};
///
/// let mut spec = CommandSpec::new("copy");
/// spec.define(ArgumentSpec::positional("source")).unwrap();
/// spec.define(ArgumentSpec::positional("destination").arity(Arity::ZeroOrOne)).unwrap();
///
/// // Nothing can follow an optional positional
/// assert!(spec.define(ArgumentSpec::positional("mode")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CommandSpec {
    name: String,
    description: Option<String>,
    args: Vec<ArgumentSpec>,
}

impl CommandSpec {
    /// Constructs a new empty `CommandSpec` for the program with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        CommandSpec {
            name: name.into(),
            description: None,
            args: Vec::new(),
        }
    }

    /// Returns the program name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the description of the program or `None` if not set.
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns all the declared arguments in declaration order.
    pub fn get_args(&self) -> &[ArgumentSpec] {
        self.args.as_slice()
    }

    /// Returns an `Iterator` over the positional arguments.
    pub fn positionals(&self) -> impl Iterator<Item = &ArgumentSpec> + '_ {
        self.args.iter().filter(|a| a.is_positional())
    }

    /// Returns an `Iterator` over the optional arguments.
    pub fn options(&self) -> impl Iterator<Item = &ArgumentSpec> + '_ {
        self.args.iter().filter(|a| !a.is_positional())
    }

    /// Returns an `Iterator` over every alias of every optional argument.
    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.options()
            .flat_map(|a| a.get_aliases())
            .map(|s| s.as_str())
    }

    /// Returns the argument with the given name or `None` if not found.
    pub fn get<S: AsRef<str>>(&self, name: S) -> Option<&ArgumentSpec> {
        self.args.iter().find(|a| a.get_name() == name.as_ref())
    }

    /// Returns the optional argument with the given alias or `None` if not found.
    pub fn get_by_alias<S: AsRef<str>>(&self, alias: S) -> Option<&ArgumentSpec> {
        self.options().find(|a| a.has_alias(alias.as_ref()))
    }

    /// Returns `true` if there is an argument with the given name.
    pub fn contains<S: AsRef<str>>(&self, name: S) -> bool {
        self.get(name).is_some()
    }

    /// Sets the description of the program.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a new argument, same as `define` but can be chained.
    pub fn arg(mut self, arg: ArgumentSpec) -> Result<Self> {
        self.define(arg)?;
        Ok(self)
    }

    /// Registers a new argument.
    ///
    /// # Error
    /// Returns a `Configuration` error if the argument conflicts with a declared one or
    /// its own declaration is inconsistent, for example:
    /// - The name or one of the aliases is already declared.
    /// - A positional is declared after a positional taking 0 or 1, or 0 or more values.
    /// - The default value doesn't fit the arity, the choices or the converter.
    pub fn define(&mut self, arg: ArgumentSpec) -> Result<()> {
        let name = arg.get_name();

        if name.trim().is_empty() {
            return Err(config_error("argument name cannot be blank"));
        }

        if self.contains(name) {
            return Err(config_error(format!("argument `{}` is already declared", name)));
        }

        match arg.get_kind() {
            ArgKind::Positional => self.check_positional(&arg)?,
            ArgKind::Optional => self.check_optional(&arg)?,
        }

        if arg.is_flag() && !arg.get_choices().is_empty() {
            return Err(config_error(format!("flag `{}` cannot have choices", name)));
        }

        check_default(&arg)?;

        log::debug!("declared argument `{}` ({:?}, {})", name, arg.get_kind(), arg.get_arity());
        self.args.push(arg);
        Ok(())
    }

    fn check_positional(&self, arg: &ArgumentSpec) -> Result<()> {
        let name = arg.get_name();

        if arg.get_aliases().len() > 0 {
            return Err(config_error(format!(
                "positional argument `{}` cannot have aliases",
                name
            )));
        }

        if arg.is_flag() {
            return Err(config_error(format!(
                "positional argument `{}` cannot be a flag",
                name
            )));
        }

        if arg.is_marked_required() {
            return Err(config_error(format!(
                "positional argument `{}` cannot be marked as required",
                name
            )));
        }

        // Only the last positional may be left empty, otherwise values are ambiguous
        if let Some(previous) = self.positionals().find(|a| a.get_arity().is_optional()) {
            return Err(config_error(format!(
                "positional argument `{}` cannot follow `{}`, which takes {}",
                name,
                previous.get_name(),
                previous.get_arity()
            )));
        }

        Ok(())
    }

    fn check_optional(&self, arg: &ArgumentSpec) -> Result<()> {
        let name = arg.get_name();

        if arg.get_aliases().len() == 0 {
            return Err(config_error(format!(
                "optional argument `{}` needs at least one alias",
                name
            )));
        }

        for alias in arg.get_aliases() {
            if alias.trim().is_empty() || alias.contains(char::is_whitespace) {
                return Err(config_error(format!(
                    "invalid alias `{}` for `{}`",
                    alias, name
                )));
            }

            if let Some(other) = self.get_by_alias(alias) {
                return Err(config_error(format!(
                    "alias `{}` of `{}` is already used by `{}`",
                    alias,
                    name,
                    other.get_name()
                )));
            }
        }

        Ok(())
    }
}

fn check_default(arg: &ArgumentSpec) -> Result<()> {
    let name = arg.get_name();
    let arity = arg.get_arity();

    match arg.get_default() {
        None => Ok(()),
        Some(DefaultValue::Typed(value)) => {
            let fits = match value {
                Value::None => true,
                Value::Bool(_) => arity == Arity::Flag,
                Value::List(_) => arity.is_multiple(),
                _ => arity.takes_values() && !arity.is_multiple(),
            };

            if fits {
                Ok(())
            } else {
                Err(config_error(format!(
                    "default value `{}` of `{}` doesn't fit {}",
                    value, name, arity
                )))
            }
        }
        Some(DefaultValue::Raw(values)) => {
            if arg.is_flag() {
                return Err(config_error(format!(
                    "flag `{}` can only have a boolean default",
                    name
                )));
            }

            if !arity.takes(values.len()) {
                return Err(config_error(format!(
                    "invalid default value count for `{}`, expected {} but was {}",
                    name,
                    arity,
                    values.len()
                )));
            }

            for value in values {
                arg.convert(value).map_err(|error| {
                    config_error(format!(
                        "invalid default value `{}` for `{}`: {}",
                        value, name, error
                    ))
                })?;
            }

            Ok(())
        }
    }
}

fn config_error<S: Into<String>>(message: S) -> Error {
    Error::Configuration(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter;
    use crate::error::ErrorKind;

    fn kind_of(result: Result<()>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    #[test]
    fn define_test() {
        let spec = CommandSpec::new("app")
            .arg(ArgumentSpec::positional("source"))
            .unwrap()
            .arg(ArgumentSpec::flag("verbose").alias("-v").alias("--verbose"))
            .unwrap()
            .arg(ArgumentSpec::option("mode").alias("-m").choices(["auto", "manual"]))
            .unwrap();

        assert_eq!(spec.get_args().len(), 3);
        assert_eq!(spec.positionals().count(), 1);
        assert_eq!(spec.options().count(), 2);
        assert_eq!(spec.get_by_alias("-v").unwrap().get_name(), "verbose");
        assert_eq!(spec.get_by_alias("--verbose").unwrap().get_name(), "verbose");
        assert!(spec.get_by_alias("--mode").is_none());
        assert_eq!(spec.aliases().collect::<Vec<_>>(), vec!["-v", "--verbose", "-m"]);
    }

    #[test]
    fn duplicated_name_test() {
        let mut spec = CommandSpec::new("app");
        spec.define(ArgumentSpec::positional("source")).unwrap();
        assert_eq!(
            kind_of(spec.define(ArgumentSpec::option("source").alias("--source"))),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn duplicated_alias_test() {
        let mut spec = CommandSpec::new("app");
        spec.define(ArgumentSpec::flag("verbose").alias("-v")).unwrap();

        let error = spec
            .define(ArgumentSpec::flag("version").alias("-v"))
            .unwrap_err();

        assert_eq!(
            error,
            Error::Configuration("alias `-v` of `version` is already used by `verbose`".to_owned())
        );
    }

    #[test]
    fn optional_positional_must_be_last_test() {
        let mut spec = CommandSpec::new("app");
        spec.define(ArgumentSpec::positional("files").arity(Arity::ZeroOrMore))
            .unwrap();

        assert_eq!(
            kind_of(spec.define(ArgumentSpec::positional("destination"))),
            ErrorKind::Configuration
        );

        // Options can still be declared
        assert!(spec.define(ArgumentSpec::flag("verbose").alias("-v")).is_ok());
    }

    #[test]
    fn one_or_more_positional_can_be_followed_test() {
        let mut spec = CommandSpec::new("app");
        spec.define(ArgumentSpec::positional("files").arity(Arity::OneOrMore))
            .unwrap();
        assert!(spec.define(ArgumentSpec::positional("destination")).is_ok());
    }

    #[test]
    fn invalid_declaration_test() {
        let mut spec = CommandSpec::new("app");

        assert!(spec.define(ArgumentSpec::positional("  ")).is_err());
        assert!(spec.define(ArgumentSpec::option("size")).is_err());
        assert!(spec.define(ArgumentSpec::positional("a").alias("-a")).is_err());
        assert!(spec.define(ArgumentSpec::positional("b").arity(Arity::Flag)).is_err());
        assert!(spec.define(ArgumentSpec::positional("c").required(true)).is_err());
        assert!(spec
            .define(ArgumentSpec::flag("d").alias("-d").choices(["x"]))
            .is_err());
        assert!(spec.define(ArgumentSpec::option("e").alias("--e f")).is_err());
        assert!(spec.get_args().is_empty());
    }

    #[test]
    fn invalid_default_test() {
        let mut spec = CommandSpec::new("app");

        assert!(spec
            .define(ArgumentSpec::option("mode").alias("-m").choices(["auto"]).default("x"))
            .is_err());
        assert!(spec
            .define(
                ArgumentSpec::option("size")
                    .alias("-s")
                    .converter(converter::size())
                    .default("1XB")
            )
            .is_err());
        assert!(spec
            .define(ArgumentSpec::option("file").alias("-f").defaults(["a", "b"]))
            .is_err());
        assert!(spec
            .define(ArgumentSpec::flag("verbose").alias("-v").default("true"))
            .is_err());
        assert!(spec
            .define(ArgumentSpec::option("name").alias("-n").default_value(vec!["a"]))
            .is_err());
        assert!(spec.get_args().is_empty());
    }

    #[test]
    fn valid_default_test() {
        let mut spec = CommandSpec::new("app");

        assert!(spec
            .define(
                ArgumentSpec::option("size")
                    .alias("-s")
                    .converter(converter::size())
                    .default("1MB")
            )
            .is_ok());
        assert!(spec
            .define(
                ArgumentSpec::option("files")
                    .alias("--files")
                    .arity(Arity::ZeroOrMore)
                    .default_value(Vec::<String>::new())
            )
            .is_ok());
        assert!(spec
            .define(ArgumentSpec::flag("color").alias("--color").default_value(true))
            .is_ok());
    }
}
