//! Document parsing and resource identity extraction

use std::fmt;

use serde::Deserialize;
use serde_yaml::{Deserializer, Mapping, Value};

use crate::error::{FieldError, Result, SplitError};

/// Kind whose namespace defaults to its own name
const NAMESPACE_KIND: &str = "Namespace";

/// The (kind, name, namespace) triple used to name and deduplicate output files
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdentity {
    pub kind: String,
    pub name: String,
    pub namespace: String,
}

impl ResourceIdentity {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Extract the identity from a parsed document
    ///
    /// `kind` and `metadata.name` are required strings. `metadata.namespace` is
    /// required too, except for `Namespace` resources, which fall back to
    /// their own name.
    pub fn from_document(doc: &Mapping) -> std::result::Result<Self, FieldError> {
        let kind = required_str(doc.get("kind"), "kind")?;

        let metadata = match doc.get("metadata") {
            Some(Value::Mapping(metadata)) => metadata,
            Some(other) => {
                return Err(FieldError::wrong_type(
                    "metadata",
                    "mapping",
                    value_type(other),
                ));
            }
            None => return Err(FieldError::missing("metadata")),
        };

        let name = required_str(metadata.get("name"), "metadata.name")?;

        let namespace = match metadata.get("namespace") {
            Some(Value::String(namespace)) => namespace.clone(),
            _ if kind == NAMESPACE_KIND => name.clone(),
            Some(other) => {
                return Err(FieldError::wrong_type(
                    "metadata.namespace",
                    "string",
                    value_type(other),
                ));
            }
            None => return Err(FieldError::missing("metadata.namespace")),
        };

        Ok(Self {
            kind,
            name,
            namespace,
        })
    }

    /// Output file name: `<kind>__<name>__<namespace>.yaml`
    pub fn file_name(&self) -> String {
        format!("{}__{}__{}.yaml", self.kind, self.name, self.namespace)
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (a {} in namespace {})",
            self.name, self.kind, self.namespace
        )
    }
}

/// Parse one chunk into its top-level mapping
///
/// Only the first YAML document in the chunk is read; anything after a
/// further `---` inside the chunk is ignored. Returns `Ok(None)` for blank
/// documents: whitespace only, `null`, or an empty mapping. Any other
/// non-mapping top-level value is an error.
pub fn parse_document(index: usize, chunk: &[u8]) -> Result<Option<Mapping>> {
    if chunk.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let Some(document) = Deserializer::from_slice(chunk).next() else {
        return Ok(None);
    };
    let value =
        Value::deserialize(document).map_err(|source| SplitError::Parse { index, source })?;

    match value {
        Value::Null => Ok(None),
        Value::Mapping(doc) if doc.is_empty() => Ok(None),
        Value::Mapping(doc) => Ok(Some(doc)),
        other => Err(SplitError::NotAMapping {
            index,
            found: value_type(&other),
        }),
    }
}

fn required_str(
    value: Option<&Value>,
    field: &'static str,
) -> std::result::Result<String, FieldError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(FieldError::wrong_type(field, "string", value_type(other))),
        None => Err(FieldError::missing(field)),
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldProblem;

    fn doc(yaml: &str) -> Mapping {
        parse_document(1, yaml.as_bytes())
            .unwrap()
            .expect("document should not be blank")
    }

    #[test]
    fn test_identity_from_document() {
        let identity = ResourceIdentity::from_document(&doc(
            r#"
apiVersion: v1
kind: Pod
metadata:
  name: foo
  namespace: bar
"#,
        ))
        .unwrap();

        assert_eq!(identity, ResourceIdentity::new("Pod", "foo", "bar"));
        assert_eq!(identity.file_name(), "Pod__foo__bar.yaml");
    }

    #[test]
    fn test_namespace_defaults_to_own_name() {
        let identity = ResourceIdentity::from_document(&doc(
            r#"
apiVersion: v1
kind: Namespace
metadata:
  name: team-a
"#,
        ))
        .unwrap();

        assert_eq!(identity.namespace, "team-a");
        assert_eq!(identity.file_name(), "Namespace__team-a__team-a.yaml");
    }

    #[test]
    fn test_namespace_kind_ignores_non_string_namespace() {
        let identity = ResourceIdentity::from_document(&doc(
            "kind: Namespace\nmetadata:\n  name: team-a\n  namespace: 42\n",
        ))
        .unwrap();

        assert_eq!(identity.namespace, "team-a");
    }

    #[test]
    fn test_missing_kind() {
        let err = ResourceIdentity::from_document(&doc("metadata:\n  name: foo\n")).unwrap_err();
        assert_eq!(err, FieldError::missing("kind"));
    }

    #[test]
    fn test_kind_wrong_type() {
        let err = ResourceIdentity::from_document(&doc("kind: [Pod]\nmetadata:\n  name: foo\n"))
            .unwrap_err();
        assert_eq!(err.field, "kind");
        assert_eq!(
            err.problem,
            FieldProblem::WrongType {
                expected: "string",
                found: "sequence"
            }
        );
    }

    #[test]
    fn test_missing_metadata() {
        let err = ResourceIdentity::from_document(&doc("kind: Pod\n")).unwrap_err();
        assert_eq!(err, FieldError::missing("metadata"));

        let err = ResourceIdentity::from_document(&doc("kind: Pod\nmetadata: foo\n")).unwrap_err();
        assert_eq!(err.field, "metadata");
    }

    #[test]
    fn test_missing_name() {
        let err = ResourceIdentity::from_document(&doc("kind: Pod\nmetadata:\n  namespace: bar\n"))
            .unwrap_err();
        assert_eq!(err, FieldError::missing("metadata.name"));
    }

    #[test]
    fn test_missing_namespace() {
        let err = ResourceIdentity::from_document(&doc("kind: Pod\nmetadata:\n  name: foo\n"))
            .unwrap_err();
        assert_eq!(err, FieldError::missing("metadata.namespace"));
    }

    #[test]
    fn test_numeric_name_is_rejected() {
        let err = ResourceIdentity::from_document(&doc(
            "kind: Pod\nmetadata:\n  name: 123\n  namespace: bar\n",
        ))
        .unwrap_err();
        assert_eq!(
            err,
            FieldError::wrong_type("metadata.name", "string", "number")
        );
    }

    #[test]
    fn test_parse_blank_documents() {
        assert!(parse_document(1, b"").unwrap().is_none());
        assert!(parse_document(1, b"  \n\n").unwrap().is_none());
        assert!(parse_document(1, b"{}").unwrap().is_none());
        assert!(parse_document(1, b"~").unwrap().is_none());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_document(4, b"kind: [unterminated\n").unwrap_err();
        assert!(matches!(err, SplitError::Parse { index: 4, .. }));
    }

    #[test]
    fn test_parse_reads_first_document_only() {
        let doc = parse_document(1, b"kind: Pod\nmetadata:\n  name: a\n---\nkind: Service\n")
            .unwrap()
            .expect("document should not be blank");
        assert_eq!(doc.get("kind"), Some(&Value::String("Pod".into())));
    }

    #[test]
    fn test_parse_document_with_dangling_separator() {
        let doc = parse_document(1, b"kind: Pod\nmetadata:\n  name: a\n  namespace: ns\n---")
            .unwrap()
            .expect("document should not be blank");
        let identity = ResourceIdentity::from_document(&doc).unwrap();
        assert_eq!(identity.file_name(), "Pod__a__ns.yaml");
    }

    #[test]
    fn test_parse_separator_only_is_blank() {
        assert!(parse_document(1, b"---\n").unwrap().is_none());
    }

    #[test]
    fn test_parse_scalar_document() {
        let err = parse_document(2, b"just a string").unwrap_err();
        assert!(matches!(
            err,
            SplitError::NotAMapping {
                index: 2,
                found: "string"
            }
        ));
    }

    #[test]
    fn test_display() {
        let identity = ResourceIdentity::new("Service", "web", "prod");
        assert_eq!(identity.to_string(), "web (a Service in namespace prod)");
    }
}
