use crate::context::Context;
use crate::error::{Error, Result};
use crate::token::Token;
use std::borrow::Borrow;

/// Classifies raw command-line arguments into `Token`s.
///
/// A value is an option if it starts with the option marker and matches a known alias,
/// everything else is a value. Values after the `end of options` are never options.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Converts to tokens the given arguments.
    ///
    /// # Error
    /// Returns an `UnknownArgument` error for an option prefixed value that matches no alias.
    pub fn tokenize<S, I>(&self, context: &Context, args: I) -> Result<Vec<Token>>
    where
        S: Borrow<str>,
        I: IntoIterator<Item = S>,
    {
        let end_of_options = context.end_of_options();
        let negative_numbers_are_options = context.has_negative_number_aliases();
        let mut iterator = args.into_iter();
        let mut tokens = Vec::new();

        while let Some(arg) = iterator.next() {
            let value: &str = arg.borrow();

            if value == end_of_options {
                tokens.push(Token::EOO);
                // The rest is considered values
                tokens.extend(iterator.by_ref().map(|s| Token::Arg(s.borrow().to_owned())));
                break;
            }

            let is_value = !context.is_option_prefixed(value)
                || (!negative_numbers_are_options && context.is_negative_number(value));

            if is_value {
                tokens.push(Token::Arg(value.to_owned()));
            } else {
                classify_option(context, value, &mut tokens)?;
            }
        }

        log::debug!("classified {} tokens", tokens.len());
        Ok(tokens)
    }
}

fn classify_option(context: &Context, value: &str, tokens: &mut Vec<Token>) -> Result<()> {
    if context.get_by_alias(value).is_some() {
        tokens.push(Token::Opt(value.to_owned()));
        return Ok(());
    }

    if context.is_help(value) {
        tokens.push(Token::Help);
        return Ok(());
    }

    // `--size=1MB`
    if let Some((alias, attached)) = value.split_once(context.assign_op()) {
        if context.get_by_alias(alias).is_some() {
            tokens.push(Token::Opt(alias.to_owned()));
            tokens.push(Token::Attached(attached.to_owned()));
            return Ok(());
        }
    }

    // `-s1MB`, only for single character aliases that take values
    let mut chars = value.chars();
    if let (Some(marker), Some(c)) = (chars.next(), chars.next()) {
        let attached = chars.as_str();
        if c != marker && !attached.is_empty() {
            let alias = format!("{}{}", marker, c);
            let takes_values = context
                .get_by_alias(&alias)
                .map_or(false, |arg| arg.get_arity().takes_values());

            if takes_values {
                tokens.push(Token::Opt(alias));
                tokens.push(Token::Attached(attached.to_owned()));
                return Ok(());
            }
        }
    }

    Err(unknown_argument(context, value))
}

fn unknown_argument(context: &Context, value: &str) -> Error {
    let name = value
        .split_once(context.assign_op())
        .map_or(value, |(name, _)| name);

    let suggestion = context.suggestions().and_then(|provider| {
        let help_aliases = context.help_aliases();
        let source = context
            .spec()
            .aliases()
            .chain(help_aliases.iter().map(|s| s.as_str()))
            .collect::<Vec<&str>>();

        provider.suggestion_for(name, &source)
    });

    Error::UnknownArgument {
        token: value.to_owned(),
        suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentSpec;
    use crate::arity::Arity;
    use crate::command::CommandSpec;
    use crate::command_line::split_args;
    use crate::error::ErrorKind;

    fn context() -> Context {
        let spec = CommandSpec::new("app")
            .arg(ArgumentSpec::positional("source"))
            .unwrap()
            .arg(ArgumentSpec::flag("verbose").alias("-v").alias("--verbose"))
            .unwrap()
            .arg(ArgumentSpec::option("size").alias("-s").alias("--size"))
            .unwrap()
            .arg(
                ArgumentSpec::option("files")
                    .alias("--files")
                    .arity(Arity::ZeroOrMore),
            )
            .unwrap();

        Context::new(spec).unwrap()
    }

    fn tokenize(value: &str) -> Result<Vec<Token>> {
        Tokenizer.tokenize(&context(), split_args(value))
    }

    fn opt(s: &str) -> Token {
        Token::Opt(s.to_owned())
    }

    fn arg(s: &str) -> Token {
        Token::Arg(s.to_owned())
    }

    fn attached(s: &str) -> Token {
        Token::Attached(s.to_owned())
    }

    #[test]
    fn tokenize_options_test() {
        assert_eq!(tokenize("--verbose").unwrap(), vec![opt("--verbose")]);
        assert_eq!(tokenize("-v src").unwrap(), vec![opt("-v"), arg("src")]);
        assert_eq!(
            tokenize("src --files a.txt b.txt").unwrap(),
            vec![arg("src"), opt("--files"), arg("a.txt"), arg("b.txt")]
        );
    }

    #[test]
    fn tokenize_attached_test() {
        assert_eq!(
            tokenize("--size=500KB").unwrap(),
            vec![opt("--size"), attached("500KB")]
        );
        assert_eq!(
            tokenize("-s=500KB").unwrap(),
            vec![opt("-s"), attached("500KB")]
        );
        assert_eq!(
            tokenize("-s500KB").unwrap(),
            vec![opt("-s"), attached("500KB")]
        );
        assert_eq!(tokenize("--size=").unwrap(), vec![opt("--size"), attached("")]);
    }

    #[test]
    fn tokenize_end_of_options_test() {
        assert_eq!(
            tokenize("-v -- --files -s").unwrap(),
            vec![opt("-v"), Token::EOO, arg("--files"), arg("-s")]
        );
        assert_eq!(tokenize("-- --").unwrap(), vec![Token::EOO, arg("--")]);
    }

    #[test]
    fn tokenize_values_test() {
        assert_eq!(tokenize("-").unwrap(), vec![arg("-")]);
        assert_eq!(tokenize("-5 -1.5").unwrap(), vec![arg("-5"), arg("-1.5")]);
        assert_eq!(tokenize("\"a b\"").unwrap(), vec![arg("a b")]);
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn tokenize_help_test() {
        assert_eq!(tokenize("-h").unwrap(), vec![Token::Help]);
        assert_eq!(tokenize("src --help").unwrap(), vec![arg("src"), Token::Help]);
    }

    #[test]
    fn tokenize_unknown_test() {
        let error = tokenize("--fils a.txt").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
        assert_eq!(
            error,
            Error::UnknownArgument {
                token: "--fils".to_owned(),
                suggestion: Some("--files".to_owned()),
            }
        );

        // A flag cannot take an attached value
        assert!(tokenize("-vx").is_err());
        assert!(tokenize("--unknown=1").is_err());
        assert!(tokenize("-x").is_err());
    }

    #[test]
    fn negative_number_alias_test() {
        let spec = CommandSpec::new("app")
            .arg(ArgumentSpec::flag("one").alias("-1"))
            .unwrap();
        let context = Context::new(spec).unwrap();

        assert_eq!(
            Tokenizer.tokenize(&context, vec!["-1"]).unwrap(),
            vec![opt("-1")]
        );
        assert!(Tokenizer.tokenize(&context, vec!["-5"]).is_err());
    }
}
