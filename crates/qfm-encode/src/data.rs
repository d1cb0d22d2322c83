//! Input vectors and their validation.
//!
//! Feature maps accept data in several forms: plain slices, `ndarray`
//! arrays of any dimensionality, and JSON values (as read from a config
//! file or the command line). Everything funnels through [`FeatureInput`]
//! so the type and shape checks live in one place.

use ndarray::{Array1, ArrayD, ArrayView1, ArrayViewD, Ix1, IxDyn};
use serde_json::Value;

use crate::error::ArgumentError;

/// Borrowed input data in one of the accepted forms.
#[derive(Debug, Clone)]
pub enum FeatureInput<'a> {
    /// A flat slice, always one-dimensional.
    Slice(&'a [f64]),
    /// An array of arbitrary dimensionality.
    Array(ArrayViewD<'a, f64>),
    /// An untyped JSON value.
    Json(&'a Value),
}

impl FeatureInput<'_> {
    /// Convert to an owned one-dimensional vector.
    ///
    /// Fails with a type error if the input is not a numeric array and
    /// with a shape error if it is not one-dimensional.
    pub fn to_vector(&self) -> Result<Array1<f64>, ArgumentError> {
        match self {
            FeatureInput::Slice(values) => Ok(Array1::from(values.to_vec())),
            FeatureInput::Array(view) => {
                let ndim = view.ndim();
                view.clone()
                    .into_dimensionality::<Ix1>()
                    .map(|v| v.to_owned())
                    .map_err(|_| ArgumentError::Dimension { ndim })
            }
            FeatureInput::Json(value) => {
                let array = json_to_array(value)?;
                let ndim = array.ndim();
                array
                    .into_dimensionality::<Ix1>()
                    .map_err(|_| ArgumentError::Dimension { ndim })
            }
        }
    }
}

/// Validate `input` against the configured qubit count.
pub fn validate_input(
    input: &FeatureInput<'_>,
    num_qubits: u32,
) -> Result<Array1<f64>, ArgumentError> {
    let x = input.to_vector()?;
    if x.len() != num_qubits as usize {
        return Err(ArgumentError::Length {
            num_qubits,
            len: x.len(),
        });
    }
    Ok(x)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert a (possibly nested) JSON array of numbers into an `ArrayD`.
fn json_to_array(value: &Value) -> Result<ArrayD<f64>, ArgumentError> {
    if !value.is_array() {
        return Err(ArgumentError::Type {
            found: json_kind(value).to_string(),
        });
    }

    // The shape is read off the first element at each level; every other
    // element is checked against it while flattening.
    let mut shape = vec![];
    let mut cursor = value;
    while let Value::Array(items) = cursor {
        shape.push(items.len());
        match items.first() {
            Some(first) => cursor = first,
            None => break,
        }
    }

    let mut flat = Vec::with_capacity(shape.iter().product());
    flatten_json(value, 0, &shape, &mut flat)?;

    ArrayD::from_shape_vec(IxDyn(&shape), flat)
        .map_err(|_| ArgumentError::Inhomogeneous { depth: 0 })
}

fn flatten_json(
    value: &Value,
    depth: usize,
    shape: &[usize],
    flat: &mut Vec<f64>,
) -> Result<(), ArgumentError> {
    match value {
        Value::Array(items) => {
            if depth >= shape.len() || items.len() != shape[depth] {
                return Err(ArgumentError::Inhomogeneous { depth });
            }
            for item in items {
                flatten_json(item, depth + 1, shape, flat)?;
            }
            Ok(())
        }
        Value::Number(n) => {
            if depth != shape.len() {
                return Err(ArgumentError::Inhomogeneous { depth });
            }
            let v = n.as_f64().ok_or_else(|| ArgumentError::Type {
                found: format!("non-finite number {n}"),
            })?;
            flat.push(v);
            Ok(())
        }
        other => Err(ArgumentError::Type {
            found: format!("array containing {}", json_kind(other)),
        }),
    }
}

impl<'a> From<&'a [f64]> for FeatureInput<'a> {
    fn from(values: &'a [f64]) -> Self {
        FeatureInput::Slice(values)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for FeatureInput<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        FeatureInput::Slice(values.as_slice())
    }
}

impl<'a> From<&'a Vec<f64>> for FeatureInput<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        FeatureInput::Slice(values.as_slice())
    }
}

impl<'a> From<ArrayView1<'a, f64>> for FeatureInput<'a> {
    fn from(view: ArrayView1<'a, f64>) -> Self {
        FeatureInput::Array(view.into_dyn())
    }
}

impl<'a> From<ArrayViewD<'a, f64>> for FeatureInput<'a> {
    fn from(view: ArrayViewD<'a, f64>) -> Self {
        FeatureInput::Array(view)
    }
}

impl<'a, D: ndarray::Dimension> From<&'a ndarray::Array<f64, D>> for FeatureInput<'a> {
    fn from(array: &'a ndarray::Array<f64, D>) -> Self {
        FeatureInput::Array(array.view().into_dyn())
    }
}

impl<'a> From<&'a Value> for FeatureInput<'a> {
    fn from(value: &'a Value) -> Self {
        FeatureInput::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};
    use serde_json::json;

    #[test]
    fn test_slice_and_vec() {
        let v = vec![0.5, 1.0];
        let x = validate_input(&FeatureInput::from(&v), 2).unwrap();
        assert_eq!(x, array![0.5, 1.0]);

        let x = validate_input(&FeatureInput::from(&[0.3]), 1).unwrap();
        assert_eq!(x.len(), 1);
    }

    #[test]
    fn test_two_dimensional_array_is_shape_error() {
        let data = Array2::<f64>::zeros((2, 2));
        let err = validate_input(&FeatureInput::from(&data), 2).unwrap_err();
        assert_eq!(err, ArgumentError::Dimension { ndim: 2 });
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_length_mismatch() {
        let data = array![1.0, 2.0, 3.0];
        let err = validate_input(&FeatureInput::from(&data), 2).unwrap_err();
        assert_eq!(
            err,
            ArgumentError::Length {
                num_qubits: 2,
                len: 3
            }
        );
    }

    #[test]
    fn test_json_vector() {
        let value = json!([0.5, 1, -2.25]);
        let x = validate_input(&FeatureInput::from(&value), 3).unwrap();
        assert_eq!(x, array![0.5, 1.0, -2.25]);
    }

    #[test]
    fn test_json_type_errors() {
        for value in [json!("0.5"), json!({"x": 1}), json!(0.5), json!(null)] {
            let err = validate_input(&FeatureInput::from(&value), 1).unwrap_err();
            assert!(err.is_type_error(), "{value} should be a type error");
        }

        let err = validate_input(&FeatureInput::from(&json!([1.0, "a"])), 2).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_json_shape_errors() {
        let nested = json!([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            validate_input(&FeatureInput::from(&nested), 2).unwrap_err(),
            ArgumentError::Dimension { ndim: 2 }
        );

        let ragged = json!([[1.0, 2.0], [3.0]]);
        assert_eq!(
            validate_input(&FeatureInput::from(&ragged), 2).unwrap_err(),
            ArgumentError::Inhomogeneous { depth: 1 }
        );

        let mixed = json!([1.0, [2.0]]);
        assert!(
            validate_input(&FeatureInput::from(&mixed), 2)
                .unwrap_err()
                .is_shape_error()
        );
    }

    #[test]
    fn test_empty_json_array() {
        let empty = json!([]);
        assert_eq!(
            validate_input(&FeatureInput::from(&empty), 1).unwrap_err(),
            ArgumentError::Length {
                num_qubits: 1,
                len: 0
            }
        );
    }
}
