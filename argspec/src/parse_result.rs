use crate::error::{Error, Result};
use crate::value::{FromValue, Value};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::Path;

/// Represents the result of a parse operation
/// and provides a set of methods to query over the values.
///
/// Contains one value per declared argument, keyed by the argument name.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ParsedResult {
    values: BTreeMap<String, Value>,
}

impl ParsedResult {
    pub(crate) fn new(values: BTreeMap<String, Value>) -> Self {
        ParsedResult { values }
    }

    /// Returns the value of the argument with the given name, or `None` if not declared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` if an argument with the given name was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns `true` if the argument was declared and has a value other than `Value::None`.
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).map_or(false, |v| !v.is_none())
    }

    /// Converts the value of the argument into the specified type.
    ///
    /// # Error
    /// Returns a `Configuration` error if the argument is not declared or its value
    /// has another type, both are mistakes in the command declaration rather than in the input.
    ///
    /// # Example
    /// ```
    /// use argspec::{ArgumentSpec, CommandSpec, Context, Parser};
    ///
    /// let spec = CommandSpec::new("app")
    ///     .arg(ArgumentSpec::flag("verbose").alias("-v"))
    ///     .unwrap();
    ///
    /// let context = Context::new(spec).unwrap();
    /// let result = Parser.parse(&context, vec!["-v"]).unwrap();
    /// assert!(result.get_as::<bool>("verbose").unwrap());
    /// assert!(result.get_as::<String>("verbose").is_err());
    /// ```
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<T> {
        let value = self
            .get(name)
            .ok_or_else(|| Error::Configuration(format!("argument `{}` is not declared", name)))?;

        T::from_value(value).ok_or_else(|| {
            Error::Configuration(format!(
                "argument `{}` is not a {}: `{}`",
                name,
                T::type_name(),
                value
            ))
        })
    }

    /// Returns the string value of the argument or `None` if not a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_str())
    }

    /// Returns the integer value of the argument or `None` if not an integer.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|v| v.as_int())
    }

    /// Returns the path value of the argument or `None` if not a path.
    pub fn get_path(&self, name: &str) -> Option<&Path> {
        self.get(name).and_then(|v| v.as_path())
    }

    /// Returns the values of the argument or `None` if it doesn't take many values.
    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        self.get(name).and_then(|v| v.as_list())
    }

    /// Returns `true` if the argument is a flag that was set.
    pub fn get_flag(&self, name: &str) -> bool {
        self.get(name).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there is no arguments.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an `Iterator` over the names and values, sorted by name.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.values.iter(),
        }
    }
}

/// An `Iterator` over the values of a `ParsedResult`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ParsedResult {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result() -> ParsedResult {
        let mut values = BTreeMap::new();
        values.insert("source".to_owned(), Value::from("src"));
        values.insert("verbose".to_owned(), Value::Bool(true));
        values.insert("size".to_owned(), Value::Int(512000));
        values.insert("files".to_owned(), Value::from(vec!["a.txt", "b.txt"]));
        values.insert("required_files".to_owned(), Value::None);
        values.insert("target".to_owned(), Value::Path(PathBuf::from("out")));
        ParsedResult::new(values)
    }

    #[test]
    fn getters_test() {
        let result = result();

        assert_eq!(result.len(), 6);
        assert_eq!(result.get_str("source"), Some("src"));
        assert_eq!(result.get_int("size"), Some(512000));
        assert_eq!(result.get_path("target"), Some(Path::new("out")));
        assert_eq!(result.get_list("files").map(|v| v.len()), Some(2));
        assert!(result.get_flag("verbose"));
        assert!(!result.get_flag("source"));
        assert!(result.get_str("size").is_none());
    }

    #[test]
    fn presence_test() {
        let result = result();

        assert!(result.contains("required_files"));
        assert!(!result.is_present("required_files"));
        assert!(result.is_present("files"));
        assert!(!result.contains("mode"));
    }

    #[test]
    fn get_as_test() {
        let result = result();

        assert_eq!(result.get_as::<u64>("size").unwrap(), 512000);
        assert_eq!(
            result.get_as::<Vec<String>>("files").unwrap(),
            vec!["a.txt".to_owned(), "b.txt".to_owned()]
        );
        assert_eq!(
            result.get_as::<Option<Vec<String>>>("required_files").unwrap(),
            None
        );
        assert!(result.get_as::<bool>("size").is_err());
        assert!(result.get_as::<bool>("mode").is_err());
    }

    #[test]
    fn iter_test() {
        let result = result();
        let names = result.iter().map(|(name, _)| name).collect::<Vec<&str>>();

        assert_eq!(
            names,
            vec!["files", "required_files", "size", "source", "target", "verbose"]
        );
    }
}
