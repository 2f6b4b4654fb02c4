use crate::argument::ArgumentSpec;
use crate::command::CommandSpec;
use crate::error::{Error, Result};
use crate::suggestion::{SingleSuggestionProvider, SuggestionProvider};
use std::fmt::{Debug, Formatter};

/// Provides the command declaration and the values used for a command-line parsing.
pub struct Context {
    spec: CommandSpec,
    option_marker: char,
    assign_op: char,
    help: bool,
    suggestions: Option<Box<dyn SuggestionProvider>>,
}

impl Context {
    /// Constructs a new `Context` with the default configuration:
    /// `-` option marker, `=` assign operator, built-in help and suggestions.
    ///
    /// # Error
    /// Returns a `Configuration` error if the declared aliases are invalid,
    /// see `ContextBuilder::build`.
    pub fn new(spec: CommandSpec) -> Result<Self> {
        ContextBuilder::new(spec).build()
    }

    /// Returns a `ContextBuilder` for the given command.
    pub fn builder(spec: CommandSpec) -> ContextBuilder {
        ContextBuilder::new(spec)
    }

    /// Returns the `CommandSpec` used by this context.
    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Returns the `char` that starts every option alias.
    pub fn option_marker(&self) -> char {
        self.option_marker
    }

    /// Returns the `char` that attaches a value to an option, as in `--size=1MB`.
    pub fn assign_op(&self) -> char {
        self.assign_op
    }

    /// Returns the token ending the options, every value after it is positional.
    pub fn end_of_options(&self) -> String {
        format!("{0}{0}", self.option_marker)
    }

    /// Returns the built-in help aliases, empty if help is disabled.
    pub fn help_aliases(&self) -> Vec<String> {
        if self.help {
            vec![
                format!("{}h", self.option_marker),
                format!("{0}{0}help", self.option_marker),
            ]
        } else {
            vec![]
        }
    }

    /// Returns `true` if the value is a built-in help alias.
    pub fn is_help(&self, value: &str) -> bool {
        self.help_aliases().iter().any(|s| s == value)
    }

    /// Returns the `SuggestionProvider` used by this context or `None` if not set.
    pub fn suggestions(&self) -> Option<&dyn SuggestionProvider> {
        self.suggestions.as_deref()
    }

    /// Returns `true` if the value starts with the option marker,
    /// the marker alone is a positional value.
    pub fn is_option_prefixed(&self, value: &str) -> bool {
        value.starts_with(self.option_marker) && value.chars().count() > 1
    }

    /// Returns the optional argument with the given alias or `None` if not found.
    pub fn get_by_alias(&self, alias: &str) -> Option<&ArgumentSpec> {
        self.spec.get_by_alias(alias)
    }

    /// Returns `true` if the value is a negative number like `-5` or `-1.5`.
    pub fn is_negative_number(&self, value: &str) -> bool {
        value.starts_with('-') && value[1..].parse::<f64>().map_or(false, |n| n.is_finite())
    }

    /// Returns `true` if any alias looks like a negative number,
    /// in that case negative numbers are treated as options.
    pub fn has_negative_number_aliases(&self) -> bool {
        self.spec.aliases().any(|s| self.is_negative_number(s))
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("spec", &self.spec)
            .field("option_marker", &self.option_marker)
            .field("assign_op", &self.assign_op)
            .field("help", &self.help)
            .field("suggestions", &self.suggestions.is_some())
            .finish()
    }
}

/// A builder for a `Context`.
pub struct ContextBuilder {
    spec: CommandSpec,
    option_marker: Option<char>,
    assign_op: Option<char>,
    help: bool,
    suggestions: Option<Box<dyn SuggestionProvider>>,
}

impl ContextBuilder {
    /// Constructs a new `ContextBuilder` with help and suggestions enabled.
    pub fn new(spec: CommandSpec) -> Self {
        ContextBuilder {
            spec,
            option_marker: None,
            assign_op: None,
            help: true,
            suggestions: Some(Box::new(SingleSuggestionProvider)),
        }
    }

    /// Sets the `char` that starts every option alias, the default is `-`.
    pub fn option_marker(mut self, value: char) -> Self {
        self.option_marker = Some(value);
        self
    }

    /// Sets the `char` that attaches a value to an option, the default is `=`.
    pub fn assign_op(mut self, value: char) -> Self {
        self.assign_op = Some(value);
        self
    }

    /// Specify if `-h` and `--help` are recognised, by default is `true`.
    pub fn help(mut self, enable: bool) -> Self {
        self.help = enable;
        self
    }

    /// Sets the `SuggestionProvider` used for unknown options.
    pub fn suggestions(mut self, suggestions: impl SuggestionProvider + 'static) -> Self {
        self.suggestions = Some(Box::new(suggestions));
        self
    }

    /// Disables the suggestions for unknown options.
    pub fn no_suggestions(mut self) -> Self {
        self.suggestions = None;
        self
    }

    /// Constructs the `Context`.
    ///
    /// # Error
    /// Returns a `Configuration` error if:
    /// - An alias doesn't start with the option marker or is the marker alone.
    /// - An alias contains the assign operator.
    /// - An alias collides with the built-in help.
    pub fn build(self) -> Result<Context> {
        let context = Context {
            spec: self.spec,
            option_marker: self.option_marker.unwrap_or('-'),
            assign_op: self.assign_op.unwrap_or('='),
            help: self.help,
            suggestions: self.suggestions,
        };

        let end_of_options = context.end_of_options();

        for arg in context.spec.options() {
            for alias in arg.get_aliases() {
                if !context.is_option_prefixed(alias) || *alias == end_of_options {
                    return Err(Error::Configuration(format!(
                        "alias `{}` of `{}` must start with `{}` followed by a name",
                        alias,
                        arg.get_name(),
                        context.option_marker
                    )));
                }

                if alias.contains(context.assign_op) {
                    return Err(Error::Configuration(format!(
                        "alias `{}` of `{}` cannot contain `{}`",
                        alias,
                        arg.get_name(),
                        context.assign_op
                    )));
                }

                if context.is_help(alias) {
                    return Err(Error::Configuration(format!(
                        "alias `{}` of `{}` is used by the built-in help",
                        alias,
                        arg.get_name()
                    )));
                }
            }
        }

        Ok(context)
    }
}
