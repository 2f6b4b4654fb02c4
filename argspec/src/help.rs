use crate::argument::{ArgumentSpec, DefaultValue};
use crate::arity::Arity;
use crate::context::Context;
pub use crate::help::indented_writer::*;

/// Column where the argument help messages start.
const HELP_COLUMN: usize = 24;

/// Returns the full help message of the command: usage, description and arguments.
///
/// Example output:
/// ```text
/// usage: app [-h] [-v] [-s SIZE] source
///
/// Process some files
///
/// positional arguments:
///   source                source directory
///
/// options:
///   -h, --help            show this help message and exit
///   -v, --verbose         print debug information
///   -s SIZE, --size SIZE  maximum size (default: 1MB)
/// ```
pub fn help_message(context: &Context) -> String {
    let spec = context.spec();
    let mut writer = IndentedWriter::new();

    writer.writeln(usage_message(context));

    if let Some(description) = spec.get_description() {
        writer.writeln("");
        writer.writeln(description);
    }

    if spec.positionals().next().is_some() {
        writer.section("positional arguments:", |w| {
            for arg in spec.positionals() {
                write_entry(w, arg.get_metavar(), arg);
            }
        });
    }

    let help_aliases = context.help_aliases();
    if !help_aliases.is_empty() || spec.options().next().is_some() {
        writer.section("options:", |w| {
            if !help_aliases.is_empty() {
                write_columns(
                    w,
                    help_aliases.join(", "),
                    Some("show this help message and exit"),
                );
            }

            for arg in spec.options() {
                write_entry(w, option_invocation(arg), arg);
            }
        });
    }

    writer.into_string()
}

/// Returns the usage line of the command, for example `usage: app [-h] [-v] source`.
pub fn usage_message(context: &Context) -> String {
    let spec = context.spec();
    let mut parts = vec![format!("usage: {}", spec.get_name())];

    if let Some(help) = context.help_aliases().first() {
        parts.push(format!("[{}]", help));
    }

    for arg in spec.options() {
        let alias = arg.get_aliases().next().map_or(arg.get_name(), |s| s.as_str());
        let usage = match arg_values_usage(arg) {
            Some(values) => format!("{} {}", alias, values),
            None => alias.to_owned(),
        };

        if arg.is_required() {
            parts.push(usage);
        } else {
            parts.push(format!("[{}]", usage));
        }
    }

    for arg in spec.positionals() {
        if let Some(values) = arg_values_usage(arg) {
            parts.push(values);
        }
    }

    parts.join(" ")
}

/// Returns the default value of the argument as shown in the help messages.
pub fn default_display(arg: &ArgumentSpec) -> String {
    match arg.get_default() {
        Some(DefaultValue::Raw(values)) => values.join(" "),
        Some(DefaultValue::Typed(value)) => value.to_string(),
        None => match arg.get_arity() {
            Arity::Flag => "false".to_owned(),
            Arity::ZeroOrMore => "[]".to_owned(),
            _ => "None".to_owned(),
        },
    }
}

// `[FILES ...]`, `SIZE`...
fn arg_values_usage(arg: &ArgumentSpec) -> Option<String> {
    let metavar = arg.get_metavar();
    match arg.get_arity() {
        Arity::Flag => None,
        Arity::ExactlyOne => Some(metavar),
        Arity::ZeroOrOne => Some(format!("[{}]", metavar)),
        Arity::ZeroOrMore => Some(format!("[{} ...]", metavar)),
        Arity::OneOrMore => Some(format!("{0} [{0} ...]", metavar)),
    }
}

// `-s SIZE, --size SIZE`
fn option_invocation(arg: &ArgumentSpec) -> String {
    let values = arg_values_usage(arg);

    arg.get_aliases()
        .map(|alias| match &values {
            Some(values) => format!("{} {}", alias, values),
            None => alias.clone(),
        })
        .collect::<Vec<String>>()
        .join(", ")
}

fn write_entry(writer: &mut IndentedWriter, invocation: String, arg: &ArgumentSpec) {
    let help = arg
        .get_help()
        .map(|help| help.replace("{default}", &default_display(arg)));

    write_columns(writer, invocation, help.as_deref());
}

fn write_columns(writer: &mut IndentedWriter, invocation: String, help: Option<&str>) {
    let indent = writer.current_indent_width();

    match help {
        None => writer.writeln(invocation),
        // Too long, the help goes in the next line
        Some(help) if indent + invocation.len() + 2 > HELP_COLUMN => {
            writer.writeln(invocation);
            writer.writeln(format!("{}{}", " ".repeat(HELP_COLUMN - indent), help));
        }
        Some(help) => {
            let padding = HELP_COLUMN - indent - invocation.len();
            writer.writeln(format!("{}{}{}", invocation, " ".repeat(padding), help));
        }
    }
}

mod indented_writer {
    use std::borrow::Borrow;

    /// A writer with indentation.
    ///
    /// # Example
    /// ```rust
    /// use argspec::help::IndentedWriter;
    ///
    /// let mut writer = IndentedWriter::new();
    /// writer.writeln("options:");
    /// writer.indented(|w| w.writeln("-v, --verbose"));
    ///
    /// assert_eq!("options:\n  -v, --verbose\n", writer.into_string());
    /// ```
    #[derive(Debug, Clone)]
    pub struct IndentedWriter {
        buffer: String,
        current_indent: usize,
        indent: String,
    }

    impl IndentedWriter {
        /// Constructs a new `IndentedWriter` that indents with 2 spaces.
        #[inline]
        pub fn new() -> Self {
            Self::with_indent(" ".repeat(2))
        }

        /// Constructs a new `IndentedWriter` with the specified spacing.
        #[inline]
        pub fn with_indent(indent: String) -> Self {
            assert!(!indent.is_empty(), "indent cannot be empty");

            IndentedWriter {
                buffer: String::new(),
                current_indent: 0,
                indent,
            }
        }

        /// Returns the indentation level of this writer.
        pub fn current_indent(&self) -> usize {
            self.current_indent
        }

        /// Returns the number of characters written before each line.
        pub fn current_indent_width(&self) -> usize {
            self.current_indent * self.indent.len()
        }

        /// Returns a reference to this writer buffer.
        pub fn buffer(&self) -> &String {
            &self.buffer
        }

        /// Writes the value in the buffer with a `newline`.
        pub fn writeln<S: Borrow<str>>(&mut self, value: S) {
            let value = value.borrow();

            // Blank lines are not indented
            if !value.is_empty() {
                for _ in 0..self.current_indent {
                    self.buffer.push_str(self.indent.as_str());
                }
            }

            self.buffer.push_str(value);
            self.buffer.push('\n');
        }

        /// Increase the level of indentation and pass the writer to the `FnOnce`
        /// to allow writing with indentation.
        pub fn indented<F: FnOnce(&mut Self)>(&mut self, f: F) {
            self.current_indent += 1;
            f(self);
            self.current_indent -= 1;
        }

        /// Writes an empty line, the section name and the indented content.
        pub fn section<F: FnOnce(&mut Self)>(&mut self, name: &str, f: F) {
            self.writeln("");
            self.writeln(name);
            self.indented(f)
        }

        /// Gets the resulting `String` of this writer.
        #[inline]
        pub fn into_string(self) -> String {
            self.buffer
        }
    }

    impl Default for IndentedWriter {
        fn default() -> Self {
            IndentedWriter::new()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandSpec;

    fn context() -> Context {
        let spec = CommandSpec::new("app")
            .description("Process some files")
            .arg(ArgumentSpec::positional("source").help("source directory"))
            .unwrap()
            .arg(
                ArgumentSpec::positional("destination")
                    .arity(Arity::ZeroOrOne)
                    .default("default_value")
                    .help("destination (default: {default})"),
            )
            .unwrap()
            .arg(
                ArgumentSpec::option("files")
                    .alias("--files")
                    .arity(Arity::ZeroOrMore),
            )
            .unwrap()
            .arg(
                ArgumentSpec::flag("verbose")
                    .alias("-v")
                    .alias("--verbose")
                    .help("print debug information"),
            )
            .unwrap()
            .arg(
                ArgumentSpec::option("mode")
                    .alias("-m")
                    .alias("--mode")
                    .choices(["auto", "manual"])
                    .default("auto")
                    .help("processing mode (default: {default})"),
            )
            .unwrap();

        Context::new(spec).unwrap()
    }

    #[test]
    fn usage_message_test() {
        assert_eq!(
            usage_message(&context()),
            "usage: app [-h] [--files [FILES ...]] [-v] [-m {auto,manual}] source [destination]"
        );
    }

    #[test]
    fn help_message_test() {
        let help = help_message(&context());
        let expected = "\
usage: app [-h] [--files [FILES ...]] [-v] [-m {auto,manual}] source [destination]

Process some files

positional arguments:
  source                source directory
  destination           destination (default: default_value)

options:
  -h, --help            show this help message and exit
  --files [FILES ...]
  -v, --verbose         print debug information
  -m {auto,manual}, --mode {auto,manual}
                        processing mode (default: auto)
";

        assert_eq!(help, expected);
    }

    #[test]
    fn help_disabled_test() {
        let spec = CommandSpec::new("app")
            .arg(ArgumentSpec::flag("verbose").alias("-v"))
            .unwrap();
        let context = Context::builder(spec).help(false).build().unwrap();

        assert_eq!(usage_message(&context), "usage: app [-v]");
        assert_eq!(help_message(&context), "usage: app [-v]\n\noptions:\n  -v\n");
    }

    #[test]
    fn default_display_test() {
        let size = ArgumentSpec::option("size").alias("-s").default("1MB");
        let files = ArgumentSpec::option("files")
            .alias("--files")
            .arity(Arity::ZeroOrMore)
            .defaults(["a.txt", "b.txt"]);

        assert_eq!(default_display(&size), "1MB");
        assert_eq!(default_display(&files), "a.txt b.txt");
        assert_eq!(default_display(&ArgumentSpec::flag("verbose")), "false");
        assert_eq!(default_display(&ArgumentSpec::positional("source")), "None");

        // Absent values without a default
        let no_files = ArgumentSpec::option("files")
            .alias("--files")
            .arity(Arity::ZeroOrMore);
        let required_files = ArgumentSpec::option("required_files")
            .alias("--required-files")
            .arity(Arity::OneOrMore);
        assert_eq!(default_display(&no_files), "[]");
        assert_eq!(default_display(&required_files), "None");
    }
}
