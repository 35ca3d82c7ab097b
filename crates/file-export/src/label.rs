//! Ground-truth label sidecars in json, xml and xlsx.
//!
//! All three formats preserve sampling order: the json objects keep insertion
//! order, xml children appear in application order, and spreadsheet columns
//! run left to right in the same order.

use std::fs;
use std::path::Path;

use part_types::{FeatureRecord, LabelFormat, ParamValue, ShapeSpec};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rust_xlsxwriter::Workbook;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::LabelError;

/// Write the feature record of one machined part.
pub fn write_feature_label(
    record: &FeatureRecord,
    format: LabelFormat,
    path: &Path,
) -> Result<(), LabelError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    match format {
        LabelFormat::Json => fs::write(path, feature_json(record)?)?,
        LabelFormat::Xml => fs::write(path, feature_xml(record)?)?,
        LabelFormat::Excel => feature_xlsx(record, path)?,
    }
    Ok(())
}

/// Write the shape label of one standalone primitive.
pub fn write_shape_label(
    spec: &ShapeSpec,
    format: LabelFormat,
    path: &Path,
) -> Result<(), LabelError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    match format {
        LabelFormat::Json => fs::write(path, shape_json(spec)?)?,
        LabelFormat::Xml => fs::write(path, shape_xml(spec)?)?,
        LabelFormat::Excel => shape_xlsx(spec, path)?,
    }
    Ok(())
}

fn param_value(value: &ParamValue) -> Value {
    match value {
        ParamValue::Number(n) => Value::from(*n),
        ParamValue::Text(s) => Value::String(s.clone()),
    }
}

fn params_map(params: &[(String, ParamValue)]) -> Value {
    let mut map = Map::new();
    for (name, value) in params {
        map.insert(name.clone(), param_value(value));
    }
    Value::Object(map)
}

fn to_json_pretty(value: &Value) -> Result<Vec<u8>, LabelError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

fn feature_json(record: &FeatureRecord) -> Result<Vec<u8>, LabelError> {
    let mut root = Map::new();
    for (name, params) in record.iter() {
        root.insert(name.to_string(), params_map(params));
    }
    to_json_pretty(&Value::Object(root))
}

fn shape_json(spec: &ShapeSpec) -> Result<Vec<u8>, LabelError> {
    let mut root = Map::new();
    for (name, value) in spec.label_fields() {
        root.insert(name, param_value(&value));
    }
    to_json_pretty(&Value::Object(root))
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), LabelError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn feature_xml(record: &FeatureRecord) -> Result<Vec<u8>, LabelError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Start(BytesStart::new("PartFeatures")))?;
    for (name, params) in record.iter() {
        writer.write_event(Event::Start(BytesStart::new(name)))?;
        for (param, value) in params {
            write_text_element(&mut writer, param, &value.to_string())?;
        }
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("PartFeatures")))?;
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn shape_xml(spec: &ShapeSpec) -> Result<Vec<u8>, LabelError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Start(BytesStart::new("ShapeData")))?;
    write_text_element(&mut writer, "Type", spec.kind.name())?;
    for (name, value) in &spec.dimensions {
        write_text_element(&mut writer, name, &value.to_string())?;
    }
    writer.write_event(Event::End(BytesEnd::new("ShapeData")))?;
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// One spreadsheet column per record entry, in insertion order: the header
/// plus the parameter mapping as compact json cell text.
fn feature_columns(record: &FeatureRecord) -> Result<Vec<(String, String)>, LabelError> {
    record
        .iter()
        .map(|(name, params)| {
            Ok((name.to_string(), serde_json::to_string(&params_map(params))?))
        })
        .collect()
}

fn feature_xlsx(record: &FeatureRecord, path: &Path) -> Result<(), LabelError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, (header, cell)) in feature_columns(record)?.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string(0, col, header)?;
        worksheet.write_string(1, col, cell)?;
    }
    workbook.save(path)?;
    Ok(())
}

fn shape_xlsx(spec: &ShapeSpec, path: &Path) -> Result<(), LabelError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, (name, value)) in spec.label_fields().iter().enumerate() {
        let col = col as u16;
        worksheet.write_string(0, col, name)?;
        match value {
            ParamValue::Number(n) => worksheet.write_number(1, col, *n)?,
            ParamValue::Text(s) => worksheet.write_string(1, col, s)?,
        };
    }
    workbook.save(path)?;
    Ok(())
}
