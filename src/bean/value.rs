//! Borrowed and owned property values

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

use super::{object, Bean, CopyFrom};
use crate::module::Module;
use crate::{Result, SyndError};

/// A property value borrowed from a bean
///
/// Equality and hashing recurse into nested beans and modules through the
/// bean engine, so two values are equal when their whole subtrees are.
#[derive(Debug, Clone)]
pub enum PropertyValue<'a> {
    /// Unset property
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integral number (lengths, sizes, frequencies)
    Integer(i64),
    /// Floating point number, compared bitwise
    Float(f64),
    /// Text value
    Text(Cow<'a, str>),
    /// Point in time
    Date(DateTime<Utc>),
    /// Nested bean
    Bean(&'a dyn Bean),
    /// Extension module
    Module(&'a dyn Module),
    /// Ordered collection
    List(Vec<PropertyValue<'a>>),
}

impl<'a> PropertyValue<'a> {
    /// Nested bean, `Null` when absent
    pub fn bean<B: Bean>(value: Option<&'a B>) -> Self {
        match value {
            Some(bean) => PropertyValue::Bean(bean),
            None => PropertyValue::Null,
        }
    }

    /// List of nested beans
    pub fn beans<B: Bean>(values: &'a [B]) -> Self {
        PropertyValue::List(
            values
                .iter()
                .map(|bean| PropertyValue::Bean(bean as &dyn Bean))
                .collect(),
        )
    }

    /// Returns `true` for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Float(_) => "float",
            PropertyValue::Text(_) => "text",
            PropertyValue::Date(_) => "date",
            PropertyValue::Bean(_) => "bean",
            PropertyValue::Module(_) => "module",
            PropertyValue::List(_) => "list",
        }
    }
}

impl<'a> From<&'a str> for PropertyValue<'a> {
    fn from(value: &'a str) -> Self {
        PropertyValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<Option<&'a str>> for PropertyValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(PropertyValue::Null, PropertyValue::from)
    }
}

impl From<String> for PropertyValue<'_> {
    fn from(value: String) -> Self {
        PropertyValue::Text(Cow::Owned(value))
    }
}

impl From<bool> for PropertyValue<'_> {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue<'_> {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<Option<i64>> for PropertyValue<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(PropertyValue::Null, PropertyValue::Integer)
    }
}

impl From<Option<u32>> for PropertyValue<'_> {
    fn from(value: Option<u32>) -> Self {
        value.map_or(PropertyValue::Null, |v| PropertyValue::Integer(i64::from(v)))
    }
}

impl From<f64> for PropertyValue<'_> {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<Option<DateTime<Utc>>> for PropertyValue<'_> {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(PropertyValue::Null, PropertyValue::Date)
    }
}

impl<'a> From<&'a [String]> for PropertyValue<'a> {
    fn from(values: &'a [String]) -> Self {
        PropertyValue::List(values.iter().map(|v| PropertyValue::from(v.as_str())).collect())
    }
}

impl From<&[DateTime<Utc>]> for PropertyValue<'_> {
    fn from(values: &[DateTime<Utc>]) -> Self {
        PropertyValue::List(values.iter().copied().map(PropertyValue::Date).collect())
    }
}

impl PartialEq for PropertyValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyValue::Null, PropertyValue::Null) => true,
            (PropertyValue::Bool(a), PropertyValue::Bool(b)) => a == b,
            (PropertyValue::Integer(a), PropertyValue::Integer(b)) => a == b,
            (PropertyValue::Float(a), PropertyValue::Float(b)) => a.to_bits() == b.to_bits(),
            (PropertyValue::Text(a), PropertyValue::Text(b)) => a == b,
            (PropertyValue::Date(a), PropertyValue::Date(b)) => a == b,
            (PropertyValue::Bean(a), PropertyValue::Bean(b)) => object::equals(*a, *b),
            (PropertyValue::Module(a), PropertyValue::Module(b)) => object::equals(*a, *b),
            (PropertyValue::List(a), PropertyValue::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for PropertyValue<'_> {}

impl Hash for PropertyValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            PropertyValue::Null => {}
            PropertyValue::Bool(b) => b.hash(state),
            PropertyValue::Integer(i) => i.hash(state),
            PropertyValue::Float(f) => f.to_bits().hash(state),
            PropertyValue::Text(t) => t.hash(state),
            PropertyValue::Date(d) => d.hash(state),
            PropertyValue::Bean(bean) => object::hash(*bean, state),
            PropertyValue::Module(module) => object::hash(*module, state),
            PropertyValue::List(items) => items.hash(state),
        }
    }
}

/// An owned property value produced by a deep copy, ready to be assigned
#[derive(Debug)]
pub enum Value {
    /// Unset property
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Text value
    Text(String),
    /// Point in time
    Date(DateTime<Utc>),
    /// Freshly copied bean
    Bean(Box<dyn CopyFrom>),
    /// Freshly copied module
    Module(Box<dyn Module>),
    /// Ordered collection
    List(Vec<Value>),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::Bean(_) => "bean",
            Value::Module(_) => "module",
            Value::List(_) => "list",
        }
    }

    fn mismatch(self, property: &str, expected: &str) -> SyndError {
        SyndError::InvalidPropertyValue {
            property: property.to_string(),
            message: format!("expected {}, found {}", expected, self.kind()),
        }
    }

    fn into_items(self, property: &str) -> Result<Vec<Value>> {
        match self {
            Value::Null => Ok(Vec::new()),
            Value::List(items) => Ok(items),
            other => Err(other.mismatch(property, "list")),
        }
    }

    /// Optional text
    pub fn into_text(self, property: &str) -> Result<Option<String>> {
        match self {
            Value::Null => Ok(None),
            Value::Text(text) => Ok(Some(text)),
            other => Err(other.mismatch(property, "text")),
        }
    }

    /// Optional integer
    pub fn into_integer(self, property: &str) -> Result<Option<i64>> {
        match self {
            Value::Null => Ok(None),
            Value::Integer(i) => Ok(Some(i)),
            other => Err(other.mismatch(property, "integer")),
        }
    }

    /// Optional float
    pub fn into_float(self, property: &str) -> Result<Option<f64>> {
        match self {
            Value::Null => Ok(None),
            Value::Float(f) => Ok(Some(f)),
            other => Err(other.mismatch(property, "float")),
        }
    }

    /// Optional date
    pub fn into_date(self, property: &str) -> Result<Option<DateTime<Utc>>> {
        match self {
            Value::Null => Ok(None),
            Value::Date(date) => Ok(Some(date)),
            other => Err(other.mismatch(property, "date")),
        }
    }

    /// Optional bean of a concrete type
    pub fn into_bean<T: CopyFrom + 'static>(self, property: &str) -> Result<Option<T>> {
        match self {
            Value::Null => Ok(None),
            Value::Bean(bean) => {
                let found = bean.bean_name();
                bean.into_any()
                    .downcast::<T>()
                    .map(|b| Some(*b))
                    .map_err(|_| SyndError::InvalidPropertyValue {
                        property: property.to_string(),
                        message: format!("unexpected bean type {}", found),
                    })
            }
            other => Err(other.mismatch(property, "bean")),
        }
    }

    /// List of beans of a concrete type; `Null` becomes an empty list
    pub fn into_beans<T: CopyFrom + 'static>(self, property: &str) -> Result<Vec<T>> {
        let mut beans = Vec::new();
        for item in self.into_items(property)? {
            if let Some(bean) = item.into_bean(property)? {
                beans.push(bean);
            }
        }
        Ok(beans)
    }

    /// List of text values; `Null` becomes an empty list
    pub fn into_texts(self, property: &str) -> Result<Vec<String>> {
        let mut texts = Vec::new();
        for item in self.into_items(property)? {
            if let Some(text) = item.into_text(property)? {
                texts.push(text);
            }
        }
        Ok(texts)
    }

    /// List of dates; `Null` becomes an empty list
    pub fn into_dates(self, property: &str) -> Result<Vec<DateTime<Utc>>> {
        let mut dates = Vec::new();
        for item in self.into_items(property)? {
            if let Some(date) = item.into_date(property)? {
                dates.push(date);
            }
        }
        Ok(dates)
    }

    /// List of modules; `Null` becomes an empty list
    pub fn into_modules(self, property: &str) -> Result<Vec<Box<dyn Module>>> {
        let mut modules = Vec::new();
        for item in self.into_items(property)? {
            match item {
                Value::Module(module) => modules.push(module),
                Value::Null => {}
                other => return Err(other.mismatch(property, "module")),
            }
        }
        Ok(modules)
    }
}
