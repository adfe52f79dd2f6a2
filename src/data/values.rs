//! Conversion of netCDF variables and attributes into owned values.

use super::container::AttrValue;
use crate::error::{Result, ToolboxError};
use ndarray::{ArrayD, IxDyn};
use netcdf::types::{FloatType, IntType, NcVariableType};

/// Read a numeric variable into an `f64` array of the same shape.
pub(crate) fn read_variable_array(var: &netcdf::Variable<'_>, path: &str) -> Result<ArrayD<f64>> {
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let vartype = var.vartype();

    let from_vec = |v: Vec<f64>| -> Result<ArrayD<f64>> {
        ArrayD::from_shape_vec(IxDyn(&shape), v)
            .map_err(|e| ToolboxError::materialize(path, format!("invalid shape/data size: {}", e)))
    };
    let read_err = |e: netcdf::Error| ToolboxError::materialize(path, e.to_string());

    match vartype {
        NcVariableType::Float(FloatType::F64) => {
            let values: Vec<f64> = var.get_values(..).map_err(read_err)?;
            from_vec(values)
        }
        NcVariableType::Float(FloatType::F32) => {
            let values: Vec<f32> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(f64::from).collect())
        }
        NcVariableType::Int(IntType::I64) => {
            let values: Vec<i64> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(|x| x as f64).collect())
        }
        NcVariableType::Int(IntType::I32) => {
            let values: Vec<i32> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(f64::from).collect())
        }
        NcVariableType::Int(IntType::I16) => {
            let values: Vec<i16> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(f64::from).collect())
        }
        NcVariableType::Int(IntType::I8) => {
            let values: Vec<i8> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(f64::from).collect())
        }
        NcVariableType::Int(IntType::U64) => {
            let values: Vec<u64> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(|x| x as f64).collect())
        }
        NcVariableType::Int(IntType::U32) => {
            let values: Vec<u32> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(f64::from).collect())
        }
        NcVariableType::Int(IntType::U16) => {
            let values: Vec<u16> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(f64::from).collect())
        }
        NcVariableType::Int(IntType::U8) => {
            let values: Vec<u8> = var.get_values(..).map_err(read_err)?;
            from_vec(values.into_iter().map(f64::from).collect())
        }
        NcVariableType::Char | NcVariableType::String => Err(ToolboxError::materialize(
            path,
            "character/string data is not numeric",
        )),
        other => Err(ToolboxError::materialize(
            path,
            format!("unsupported variable type: {:?}", other),
        )),
    }
}

/// Convert a netCDF attribute into an [`AttrValue`].
pub(crate) fn attr_value(attr: &netcdf::Attribute<'_>) -> Result<AttrValue> {
    use netcdf::AttributeValue;

    let value = match attr.value()? {
        AttributeValue::Str(v) => AttrValue::Str(v),
        AttributeValue::Strs(v) => AttrValue::Strs(v),
        AttributeValue::Uchar(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Schar(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Ushort(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Short(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Uint(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Int(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Ulonglong(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Longlong(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Float(v) => AttrValue::Number(v.to_string()),
        AttributeValue::Double(v) => AttrValue::Number(v.to_string()),
        other => AttrValue::Number(format!("{:?}", other)),
    };
    Ok(value)
}
