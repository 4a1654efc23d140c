//! Decoding of product creation input.
//!
//! Both the HTML form and the JSON API create products from the same four
//! fields. [`PRODUCT_FIELDS`] lists each field with its decoding rule and
//! default; a [`FieldSource`] knows how to read a rule from one input format.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::domain::types::{CategoryName, ProductName, ProductPrice, TypeConstraintError};

/// How a raw input field is turned into a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Free text.
    Text,
    /// Decimal number, accepted either as a number or as numeric text.
    Number,
    /// Boolean flag.
    Flag,
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

/// One row of the decoding table.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rule: FieldRule,
    /// Value used when the field is absent. `None` makes the field required.
    pub default: Option<FieldValue>,
}

pub const PRODUCT_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "name",
        rule: FieldRule::Text,
        default: None,
    },
    FieldSpec {
        name: "price",
        rule: FieldRule::Number,
        default: None,
    },
    FieldSpec {
        name: "category",
        rule: FieldRule::Text,
        default: None,
    },
    FieldSpec {
        name: "available",
        rule: FieldRule::Flag,
        default: Some(FieldValue::Flag(false)),
    },
];

#[derive(Debug, Error, PartialEq)]
pub enum ProductFormError {
    #[error("missing required field: {0}")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
    #[error("{0} must be a string")]
    NotText(&'static str),
    #[error("{0} must be a boolean")]
    NotFlag(&'static str),
    #[error("Product form validation failed: {0}")]
    Validation(String),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// An input format products can be decoded from.
pub trait FieldSource {
    /// Reads `spec` according to its rule. `Ok(None)` means the field is absent.
    fn read(&self, spec: &FieldSpec) -> Result<Option<FieldValue>, ProductFormError>;
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ProductFormError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ProductFormError::NotNumeric(field))
}

/// Form-encoded body of `POST /products/new`.
///
/// A checkbox is only submitted when ticked, so a flag reads as `true` when
/// the key is present whatever its value.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ProductForm(pub HashMap<String, String>);

impl FieldSource for ProductForm {
    fn read(&self, spec: &FieldSpec) -> Result<Option<FieldValue>, ProductFormError> {
        let Some(raw) = self.0.get(spec.name) else {
            return Ok(None);
        };
        let value = match spec.rule {
            FieldRule::Text => FieldValue::Text(raw.clone()),
            FieldRule::Number => FieldValue::Number(parse_number(spec.name, raw)?),
            FieldRule::Flag => FieldValue::Flag(true),
        };
        Ok(Some(value))
    }
}

/// JSON object body of `POST /api/products`.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ProductJson(pub Map<String, Value>);

impl FieldSource for ProductJson {
    fn read(&self, spec: &FieldSpec) -> Result<Option<FieldValue>, ProductFormError> {
        let raw = match self.0.get(spec.name) {
            None | Some(Value::Null) => return Ok(None),
            Some(raw) => raw,
        };
        let value = match (spec.rule, raw) {
            (FieldRule::Text, Value::String(s)) => FieldValue::Text(s.clone()),
            (FieldRule::Text, _) => return Err(ProductFormError::NotText(spec.name)),
            (FieldRule::Number, Value::Number(n)) => FieldValue::Number(
                n.as_f64().ok_or(ProductFormError::NotNumeric(spec.name))?,
            ),
            (FieldRule::Number, Value::String(s)) => {
                FieldValue::Number(parse_number(spec.name, s)?)
            }
            (FieldRule::Number, _) => return Err(ProductFormError::NotNumeric(spec.name)),
            (FieldRule::Flag, Value::Bool(b)) => FieldValue::Flag(*b),
            (FieldRule::Flag, _) => return Err(ProductFormError::NotFlag(spec.name)),
        };
        Ok(Some(value))
    }
}

/// Product fields after decoding, before domain validation.
#[derive(Debug, Default, Validate)]
pub struct ProductFields {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub category: String,
    pub available: bool,
}

impl ProductFields {
    /// Decodes every field of [`PRODUCT_FIELDS`] from `source`.
    pub fn decode<S: FieldSource>(source: &S) -> Result<Self, ProductFormError> {
        let mut fields = Self::default();
        for spec in &PRODUCT_FIELDS {
            let value = match source.read(spec)? {
                Some(value) => value,
                None => spec
                    .default
                    .clone()
                    .ok_or(ProductFormError::Missing(spec.name))?,
            };
            fields.assign(spec.name, value)?;
        }
        Ok(fields)
    }

    fn assign(&mut self, field: &'static str, value: FieldValue) -> Result<(), ProductFormError> {
        match (field, value) {
            ("name", FieldValue::Text(v)) => self.name = v,
            ("price", FieldValue::Number(v)) => self.price = v,
            ("category", FieldValue::Text(v)) => self.category = v,
            ("available", FieldValue::Flag(v)) => self.available = v,
            _ => return Err(ProductFormError::Missing(field)),
        }
        Ok(())
    }
}

impl TryFrom<ProductFields> for NewProduct {
    type Error = ProductFormError;

    fn try_from(value: ProductFields) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: ProductName::new(value.name)?,
            price: ProductPrice::new(value.price)?,
            category: CategoryName::new(value.category)?,
            available: value.available,
        })
    }
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        ProductFields::decode(&value)?.try_into()
    }
}

impl TryFrom<ProductJson> for NewProduct {
    type Error = ProductFormError;

    fn try_from(value: ProductJson) -> Result<Self, Self::Error> {
        ProductFields::decode(&value)?.try_into()
    }
}
