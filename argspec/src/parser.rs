use crate::argument::{ArgumentSpec, DefaultValue};
use crate::arity::Arity;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::help;
use crate::parse_result::ParsedResult;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::value::Value;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::iter::Peekable;

/// A command-line argument parser.
///
/// Parsing is done in 2 passes:
/// 1. Classify the tokens, options take their values and the rest goes to the positionals.
/// 2. Apply the defaults and convert every value, the first error stops the parse.
///
/// # Example
/// ```
/// use argspec::{ArgumentSpec, Arity, CommandSpec, Context, Parser, Value};
///
/// let spec = CommandSpec::new("app")
///     .arg(ArgumentSpec::positional("source")).unwrap()
///     .arg(ArgumentSpec::option("files").alias("--files").arity(Arity::ZeroOrMore)).unwrap();
///
/// let context = Context::new(spec).unwrap();
/// let result = Parser.parse(&context, vec!["src", "--files", "a.txt", "b.txt"]).unwrap();
///
/// assert_eq!(result.get_str("source"), Some("src"));
/// assert_eq!(result.get("files"), Some(&Value::from(vec!["a.txt", "b.txt"])));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Parser;

impl Parser {
    /// Parses the given arguments, the executable path must not be included.
    ///
    /// # Error
    /// - `UnknownArgument` if an option matches no alias.
    /// - `MissingArgument` if a required argument or the values of an option are missing.
    /// - `UnexpectedArgument` if there is more positional values than expected.
    /// - `InvalidValue` if a value is not a valid choice or the converter rejects it.
    /// - `DisplayHelp` if the built-in help was requested.
    pub fn parse<S, I>(&self, context: &Context, args: I) -> Result<ParsedResult>
    where
        S: Borrow<str>,
        I: IntoIterator<Item = S>,
    {
        let tokens = Tokenizer.tokenize(context, args)?;
        let mut iterator = tokens.into_iter().peekable();
        let mut option_values: HashMap<&str, Vec<String>> = HashMap::new();
        let mut positional_values = Vec::new();

        while let Some(token) = iterator.next() {
            match token {
                Token::Opt(alias) => {
                    let arg = context.get_by_alias(&alias).ok_or_else(|| {
                        Error::UnknownArgument {
                            token: alias.clone(),
                            suggestion: None,
                        }
                    })?;

                    let values = take_option_values(arg, &mut iterator)?;
                    if option_values.insert(arg.get_name(), values).is_some() {
                        log::debug!("`{}` was given more than once, last one wins", alias);
                    }
                }
                Token::Help => {
                    return Err(Error::DisplayHelp(help::help_message(context)));
                }
                // Only follows an option, which takes it
                Token::Attached(value) | Token::Arg(value) => positional_values.push(value),
                Token::EOO => {}
            }
        }

        let mut raw_values = assign_positionals(context, positional_values)?;
        raw_values.extend(option_values);

        let mut values = BTreeMap::new();

        for arg in context.spec().get_args() {
            let value = match raw_values.remove(arg.get_name()) {
                Some(raw) => convert_values(arg, &raw)?,
                None => absent_value(arg)?,
            };

            values.insert(arg.get_name().to_owned(), value);
        }

        log::debug!("parsed {} arguments", values.len());
        Ok(ParsedResult::new(values))
    }
}

type Tokens = Peekable<std::vec::IntoIter<Token>>;

// Takes the values that follows an option, up to its max number of values
fn take_option_values(arg: &ArgumentSpec, iterator: &mut Tokens) -> Result<Vec<String>> {
    let arity = arg.get_arity();
    let mut values = Vec::new();

    if let Some(Token::Attached(_)) = iterator.peek() {
        if let Some(Token::Attached(value)) = iterator.next() {
            if arity == Arity::Flag {
                return Err(Error::InvalidValue {
                    argument: arg.display_name(),
                    value,
                    message: "flag takes no value".to_owned(),
                });
            }

            values.push(value);
        }

        return Ok(values);
    }

    while values.len() < arity.max_or_default() {
        match iterator.peek() {
            Some(Token::Arg(_)) => {
                if let Some(Token::Arg(value)) = iterator.next() {
                    values.push(value);
                }
            }
            _ => break,
        }
    }

    if arity.takes(values.len()) {
        Ok(values)
    } else {
        Err(Error::MissingArgument {
            argument: arg.display_name(),
            message: missing_values_message(arity),
        })
    }
}

fn missing_values_message(arity: Arity) -> String {
    match arity {
        Arity::OneOrMore => "expected at least one value".to_owned(),
        Arity::ExactlyOne => "expected one value".to_owned(),
        _ => format!("expected {}", arity),
    }
}

// Assigns the values to the positionals in declaration order, each positional takes as many
// values as possible while leaving enough for the min number of values of the next ones.
fn assign_positionals(
    context: &Context,
    values: Vec<String>,
) -> Result<HashMap<&str, Vec<String>>> {
    let positionals = context.spec().positionals().collect::<Vec<&ArgumentSpec>>();
    let mut result = HashMap::new();
    let mut values = values.into_iter();

    for (index, arg) in positionals.iter().copied().enumerate() {
        let reserved = positionals[index + 1..]
            .iter()
            .map(|a| a.get_arity().min())
            .sum::<usize>();

        // When there are not enough values the first positionals are filled first
        let arity = arg.get_arity();
        let count = values
            .len()
            .saturating_sub(reserved)
            .max(arity.min())
            .min(arity.max_or_default())
            .min(values.len());

        if count > 0 {
            let taken = values.by_ref().take(count).collect::<Vec<String>>();
            result.insert(arg.get_name(), taken);
        }
    }

    let rest = values.collect::<Vec<String>>();
    if !rest.is_empty() {
        return Err(Error::UnexpectedArgument { tokens: rest });
    }

    Ok(result)
}

// Converts the given raw values into the shape of the argument arity
fn convert_values(arg: &ArgumentSpec, raw: &[String]) -> Result<Value> {
    let convert = |value: &String| {
        arg.convert(value).map_err(|error| Error::InvalidValue {
            argument: arg.display_name(),
            value: value.clone(),
            message: error.message().to_owned(),
        })
    };

    let arity = arg.get_arity();

    if arity == Arity::Flag {
        Ok(Value::Bool(true))
    } else if arity.is_multiple() {
        raw.iter()
            .map(convert)
            .collect::<Result<Vec<Value>>>()
            .map(Value::List)
    } else {
        match raw.first() {
            Some(value) => convert(value),
            None => Ok(Value::None),
        }
    }
}

fn absent_value(arg: &ArgumentSpec) -> Result<Value> {
    match arg.get_default() {
        Some(DefaultValue::Typed(value)) => {
            log::debug!("`{}` takes its default value", arg.get_name());
            Ok(value.clone())
        }
        Some(DefaultValue::Raw(raw)) => {
            log::debug!("`{}` takes its default value", arg.get_name());
            convert_values(arg, raw)
        }
        None if arg.is_required() => Err(Error::MissingArgument {
            argument: arg.display_name(),
            message: "is required".to_owned(),
        }),
        None => Ok(match arg.get_arity() {
            Arity::Flag => Value::Bool(false),
            Arity::ZeroOrMore => Value::List(vec![]),
            _ => Value::None,
        }),
    }
}
