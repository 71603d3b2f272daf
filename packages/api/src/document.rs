//! `JsonPath` document handle
//!
//! Owns a root value and the options it is queried with. Every call to
//! [`JsonPath::find`] lexes the expression and evaluates it against the same
//! root, so a single handle can answer any number of queries.

use std::fmt;

use serde::Serialize;

use flowpath_engine::{CompiledPath, JsonPathConfig, JsonPathResult, ResultCollection, Value};

/// Queryable JSON document
#[derive(Clone)]
pub struct JsonPath {
    pub(crate) root: Value,
    pub(crate) config: JsonPathConfig,
    pub(crate) debug_enabled: bool,
}

impl JsonPath {
    /// Wrap `root` with default options (dynamic accessors disabled)
    #[must_use]
    pub fn new(root: impl Into<Value>) -> Self {
        Self::with_config(root, JsonPathConfig::default())
    }

    #[must_use]
    pub fn with_config(root: impl Into<Value>, config: JsonPathConfig) -> Self {
        Self {
            root: root.into(),
            config,
            debug_enabled: false,
        }
    }

    /// Construct from option bit flags such as [`flowpath_engine::ALLOW_DYNAMIC`]
    #[must_use]
    pub fn with_flags(root: impl Into<Value>, flags: u32) -> Self {
        Self::with_config(root, JsonPathConfig::from_flags(flags))
    }

    /// Parse `text` as JSON and wrap the result
    ///
    /// # Errors
    ///
    /// Returns an `InvalidJson` error when `text` is not valid JSON.
    pub fn from_json_str(text: &str) -> JsonPathResult<Self> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::new(parsed))
    }

    /// Snapshot any serializable host value and wrap it
    ///
    /// Struct fields become object members in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidJson` error when `value` cannot be represented as
    /// JSON, e.g. a map with non-string keys.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> JsonPathResult<Self> {
        let snapshot = serde_json::to_value(value)?;
        Ok(Self::new(snapshot))
    }

    /// Enable debug logging for queries made through this handle
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Evaluate `expression` against the root
    ///
    /// # Errors
    ///
    /// Returns a syntax error when the expression cannot be lexed and an
    /// unsupported-script error for `[(...)]` filters outside `@.length±N`.
    /// A path that matches nothing yields an empty collection instead.
    pub fn find(&self, expression: &str) -> JsonPathResult<ResultCollection<'_>> {
        let found = self
            .compile(expression)
            .and_then(|compiled| compiled.evaluate(&self.root, self.config));

        match &found {
            Ok(results) if self.debug_enabled => {
                log::debug!("JsonPath: '{expression}' matched {} values", results.len());
            }
            Err(error) => {
                log::debug!("JsonPath: '{expression}' failed: {error}");
            }
            Ok(_) => {}
        }

        found
    }

    /// Lex `expression` once for repeated evaluation
    ///
    /// # Errors
    ///
    /// Same syntax errors as [`JsonPath::find`].
    pub fn compile(&self, expression: &str) -> JsonPathResult<CompiledPath> {
        let compiled = CompiledPath::compile(expression)?;
        if self.debug_enabled {
            tracing::trace!(
                target: "flowpath::api",
                expression,
                tokens = compiled.tokens().len(),
                "compiled expression"
            );
        }
        Ok(compiled)
    }

    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> JsonPathConfig {
        self.config
    }
}

impl fmt::Debug for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonPath")
            .field("root", &self.root.type_name())
            .field("config", &self.config)
            .field("debug_enabled", &self.debug_enabled)
            .finish()
    }
}
