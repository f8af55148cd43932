//! Ordered query parameters.

use std::fmt;

/// Ordered query parameters sent with a request.
///
/// Setting a name that is already present replaces its value in place, so
/// the position of a parameter never changes once it has been added. The
/// paginator relies on this to overwrite `count` and `offset` between pages.
///
/// ```
/// use crowdtangle_rs::QueryParams;
///
/// let mut params = QueryParams::new()
///     .with("searchTerm", "rust")
///     .with("count", 10);
/// params.set("count", 100);
///
/// assert_eq!(params.get("count"), Some("100"));
/// assert_eq!(params.to_string(), "searchTerm=rust&count=100");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or overwrite a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(existing, _)| existing == name)?;
        Some(self.0.remove(index).1)
    }

    /// Iterate over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Owned name/value pairs, in order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0.clone()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut params: QueryParams = [("a", "1"), ("count", "5"), ("b", "2")].into_iter().collect();
        params.set("count", 100);
        params.set("offset", 200);

        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "count", "b", "offset"]);
        assert_eq!(params.get("count"), Some("100"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_remove() {
        let mut params = QueryParams::new().with("offset", 10);
        assert_eq!(params.remove("offset"), Some("10".to_string()));
        assert_eq!(params.remove("offset"), None);
        assert!(params.is_empty());
    }
}
