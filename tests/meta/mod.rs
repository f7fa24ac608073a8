// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::{anyhow, bail, Result};
use anyval::*;
use serde::Deserialize;
use test_generator::test_resources;

// Shapes in case files are written as
//   null | bool | int | float | string
//   { array: <shape> }
//   { map: [<key shape>, <value shape>] }
//   { object: { <field>: <shape>, ... } }
fn meta_from_yaml(v: &serde_yaml::Value) -> Result<Meta> {
    if let Some(name) = v.as_str() {
        return Ok(match name {
            "null" => Meta::null(),
            "bool" => Meta::boolean(),
            "int" => Meta::integer(),
            "float" => Meta::float(),
            "string" => Meta::string(),
            _ => bail!("unknown scalar shape `{name}`"),
        });
    }

    let fields = v
        .as_mapping()
        .ok_or_else(|| anyhow!("shape must be a string or a mapping: {v:?}"))?;
    if fields.len() != 1 {
        bail!("shape mapping must have exactly one entry: {v:?}");
    }
    let Some((tag, body)) = fields.iter().next() else {
        bail!("empty shape mapping");
    };

    match tag.as_str() {
        Some("array") => Ok(Meta::array(meta_from_yaml(body)?)),
        Some("map") => match body.as_sequence().map(|s| s.as_slice()) {
            Some([k, v]) => Ok(Meta::map(meta_from_yaml(k)?, meta_from_yaml(v)?)),
            _ => bail!("map shape needs [key, value]"),
        },
        Some("object") => {
            let mut parsed = vec![];
            if let Some(body) = body.as_mapping() {
                for (name, field) in body.iter() {
                    let name = name
                        .as_str()
                        .ok_or_else(|| anyhow!("field names must be strings"))?;
                    parsed.push((name.to_string(), meta_from_yaml(field)?));
                }
            }
            Ok(Meta::object(parsed))
        }
        _ => bail!("unknown shape tag {tag:?}"),
    }
}

#[derive(Deserialize, Debug)]
struct TestCase {
    note: String,
    meta: serde_yaml::Value,
    name: Option<String>,
    schema: Option<String>,
    #[serde(default)]
    accepts: Vec<serde_yaml::Value>,
    #[serde(default)]
    rejects: Vec<serde_yaml::Value>,
}

#[derive(Deserialize, Debug)]
struct YamlTest {
    cases: Vec<TestCase>,
}

fn yaml_test(file: &str) -> Result<()> {
    let yaml_str = std::fs::read_to_string(file)?;
    let test: YamlTest = serde_yaml::from_str(&yaml_str)?;

    for case in &test.cases {
        log::info!("case {}", case.note);
        let meta = meta_from_yaml(&case.meta)?;

        if let Some(name) = &case.name {
            if &meta.to_string() != name {
                bail!(
                    "{}: name mismatch\nleft  = {meta}\nright = {name}",
                    case.note
                );
            }
        }

        let text = meta.to_json_schema()?;
        if let Some(schema) = &case.schema {
            if &text != schema {
                bail!(
                    "{}: schema mismatch\nleft  = {text}\nright = {schema}",
                    case.note
                );
            }
        }

        // Whatever we emit has to be a well formed JSON Schema.
        let schema: serde_json::Value = serde_json::from_str(&text)?;
        if !jsonschema::meta::is_valid(&schema) {
            bail!("{}: emitted schema is not valid: {text}", case.note);
        }

        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| anyhow!("{}: {e}", case.note))?;
        for instance in &case.accepts {
            let instance = serde_json::to_value(instance)?;
            if !validator.is_valid(&instance) {
                bail!("{}: {instance} should be accepted by {text}", case.note);
            }
        }
        for instance in &case.rejects {
            let instance = serde_json::to_value(instance)?;
            if validator.is_valid(&instance) {
                bail!("{}: {instance} should be rejected by {text}", case.note);
            }
        }
    }

    Ok(())
}

#[test_resources("tests/meta/cases/*.yaml")]
fn run(path: &str) {
    let _ = env_logger::builder().is_test(true).try_init();
    yaml_test(path).unwrap()
}

#[test]
fn descriptors_as_keys() {
    let mut counts = std::collections::BTreeMap::new();
    for meta in [
        Meta::integer(),
        Meta::array(Meta::string()),
        Meta::integer(),
        Meta::array(Meta::string()),
        Meta::array(Meta::integer()),
    ] {
        *counts.entry(meta).or_insert(0) += 1;
    }
    let seen: Vec<(String, i32)> = counts.iter().map(|(m, n)| (m.to_string(), *n)).collect();
    assert_eq!(
        seen,
        [
            ("Int".to_string(), 2),
            ("Array<Int>".to_string(), 1),
            ("Array<String>".to_string(), 2),
        ]
    );
}

#[test]
fn shape_is_matchable() {
    let m = Meta::map(Meta::string(), Meta::float());
    match m.shape() {
        Shape::Map { key, value } => {
            assert!(key.is_string());
            assert!(value.is_float());
        }
        other => panic!("unexpected shape {other:?}"),
    }
    assert_eq!(m.shape().json_type(), "object");
}
