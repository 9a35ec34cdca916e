use serde::{Deserialize, Serialize};

use crate::FqName;

/// A constant annotation argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Boolean(bool),
    Int(i64),
    Double(f64),
    String(String),
    Enum { class: FqName, entry: String },
}

impl ConstValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

/// An annotation attached to a declaration or to a type occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub fq_name: FqName,
    /// Arguments in source order.
    pub arguments: Vec<(String, ConstValue)>,
}

impl Annotation {
    pub fn new(fq_name: impl Into<FqName>) -> Self {
        Self {
            fq_name: fq_name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: ConstValue) -> Self {
        self.arguments.push((name.into(), value));
        self
    }

    pub fn first_argument(&self) -> Option<&ConstValue> {
        self.arguments.first().map(|(_, value)| value)
    }
}

impl From<FqName> for Annotation {
    fn from(fq_name: FqName) -> Self {
        Self::new(fq_name)
    }
}

impl From<&str> for Annotation {
    fn from(fq_name: &str) -> Self {
        Self::new(fq_name)
    }
}

/// The annotation list of a declaration or type. Lookup is by fully-qualified name equality.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(Vec<Annotation>);

impl Annotations {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self(annotations)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.0.push(annotation);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.0.iter()
    }

    pub fn find(&self, fq_name: &str) -> Option<&Annotation> {
        self.0.iter().find(|annotation| annotation.fq_name == fq_name)
    }

    pub fn has(&self, fq_name: &str) -> bool {
        self.find(fq_name).is_some()
    }
}

impl FromIterator<Annotation> for Annotations {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Annotations {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
