//! Regex-based `${...}` interpolation against a project model.
//!
//! Expressions are resolved from two ordered value sources:
//!
//! 1. the project properties, by exact name;
//! 2. the project descriptor, addressed through the `project.` and `pom.`
//!    prefixes (`${project.version}`, `${pom.parent.groupId}`).
//!
//! Resolved values are interpolated again, so properties may refer to other
//! properties. Interpolation is all-or-nothing: a single unresolvable
//! expression, a reference cycle, or a leftover `${` fails the whole text and
//! no partially substituted string is ever returned.

use super::ProjectDescriptor;
use crate::constants::{DESCRIPTOR_PREFIXES, MAX_INTERPOLATED_LENGTH};
use crate::coordinate::contains_placeholder;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Why an interpolation attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// No value source knows the expression.
    #[error("Unresolved expression '{expression}'")]
    Unresolved {
        /// The expression text between `${` and `}`
        expression: String,
    },

    /// The expression refers back to itself, directly or through other properties.
    #[error("Expression cycle detected at '{expression}'")]
    Cycle {
        /// The expression that was reached while already being resolved
        expression: String,
    },
}

fn expression_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{(.+?)\}").expect("expression pattern is valid"))
}

/// Interpolates text against a project's properties and descriptor.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use tiles_cli::project::ProjectDescriptor;
/// use tiles_cli::project::interpolation::Interpolator;
///
/// let descriptor = ProjectDescriptor::new("io.example", "consumer", "1.0.0");
/// let mut properties = HashMap::new();
/// properties.insert("revision".to_string(), "${project.version}-tiles".to_string());
///
/// let interpolator = Interpolator::new(&properties, &descriptor);
/// assert_eq!(interpolator.interpolate("${revision}").unwrap(), "1.0.0-tiles");
/// assert!(interpolator.interpolate("${missing}").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Interpolator<'a> {
    properties: &'a HashMap<String, String>,
    descriptor: &'a ProjectDescriptor,
}

impl<'a> Interpolator<'a> {
    /// Create an interpolator over the given value sources.
    pub const fn new(
        properties: &'a HashMap<String, String>,
        descriptor: &'a ProjectDescriptor,
    ) -> Self {
        Self {
            properties,
            descriptor,
        }
    }

    /// Substitute every `${...}` expression in `text`.
    ///
    /// # Errors
    ///
    /// - [`InterpolationError::Unresolved`] if any expression has no value, if
    ///   the substituted text still contains a `${` marker, or if it grows past
    ///   [`MAX_INTERPOLATED_LENGTH`]
    /// - [`InterpolationError::Cycle`] if properties refer to each other in a loop
    pub fn interpolate(&self, text: &str) -> Result<String, InterpolationError> {
        let mut resolving = Vec::new();
        let mut resolved = HashMap::new();
        let result = self.interpolate_with(text, &mut resolving, &mut resolved)?;

        if contains_placeholder(&result) {
            // e.g. an unterminated "${" that the pattern never matched
            return Err(InterpolationError::Unresolved {
                expression: result,
            });
        }

        Ok(result)
    }

    fn interpolate_with(
        &self,
        text: &str,
        resolving: &mut Vec<String>,
        resolved: &mut HashMap<String, String>,
    ) -> Result<String, InterpolationError> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for captures in expression_pattern().captures_iter(text) {
            let whole = captures.get(0).expect("capture group 0 is always present");
            let expression = &captures[1];

            let value = match resolved.get(expression) {
                Some(value) => value.clone(),
                None => {
                    let value = self.resolve_expression(expression, resolving, resolved)?;
                    resolved.insert(expression.to_string(), value.clone());
                    value
                }
            };

            output.push_str(&text[last..whole.start()]);
            output.push_str(&value);
            last = whole.end();

            if output.len() > MAX_INTERPOLATED_LENGTH {
                return Err(InterpolationError::Unresolved {
                    expression: expression.to_string(),
                });
            }
        }

        output.push_str(&text[last..]);
        Ok(output)
    }

    fn resolve_expression(
        &self,
        expression: &str,
        resolving: &mut Vec<String>,
        resolved: &mut HashMap<String, String>,
    ) -> Result<String, InterpolationError> {
        if resolving.iter().any(|active| active == expression) {
            return Err(InterpolationError::Cycle {
                expression: expression.to_string(),
            });
        }

        let raw = self.lookup(expression).ok_or_else(|| InterpolationError::Unresolved {
            expression: expression.to_string(),
        })?;

        resolving.push(expression.to_string());
        let value = self.interpolate_with(&raw, resolving, resolved)?;
        resolving.pop();

        Ok(value)
    }

    fn lookup(&self, expression: &str) -> Option<String> {
        if let Some(value) = self.properties.get(expression) {
            return Some(value.clone());
        }

        DESCRIPTOR_PREFIXES
            .iter()
            .find_map(|prefix| expression.strip_prefix(prefix))
            .and_then(|field| self.descriptor.field(field))
            .map(str::to_string)
    }
}
