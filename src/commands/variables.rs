use crate::Error;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Display;

/// Setters shared by every command that carries a variables document.
///
/// The gateway only accepts documents whose root is a JSON object, so each setter checks that
/// before the document is stored. Most commands stay on the same step; a command whose
/// document is required moves on to its next step instead.
pub trait VariablesCommand: Sized {
    /// The step reached once the document is set.
    type Output;

    /// Store an already validated document.
    fn with_variables_document(self, document: String) -> Self::Output;

    fn variables_from_string<S: Into<String>>(self, variables: S) -> Result<Self::Output, Error> {
        let document = variables.into();
        ensure_object(&document)?;
        Ok(self.with_variables_document(document))
    }

    fn variables_from_display<D: Display + ?Sized>(
        self,
        variables: &D,
    ) -> Result<Self::Output, Error> {
        self.variables_from_string(variables.to_string())
    }

    /// Serialize `variables` with serde; field attributes such as `skip_serializing_if` apply.
    fn variables_from_object<S: Serialize + ?Sized>(
        self,
        variables: &S,
    ) -> Result<Self::Output, Error> {
        let document = serialize_document(variables)?;
        Ok(self.with_variables_document(document))
    }

    fn variables_from_map(self, variables: &HashMap<String, Value>) -> Result<Self::Output, Error> {
        self.variables_from_object(variables)
    }
}

fn serialize_document<S: Serialize + ?Sized>(variables: &S) -> Result<String, Error> {
    let document = serde_json::to_string(variables)?;
    ensure_object(&document)?;
    Ok(document)
}

fn ensure_object(document: &str) -> Result<(), Error> {
    serde_json::from_str::<Map<String, Value>>(document)
        .map(|_| ())
        .map_err(|e| Error::InvalidVariables {
            document: document.to_string(),
            reason: e.to_string(),
        })
}
