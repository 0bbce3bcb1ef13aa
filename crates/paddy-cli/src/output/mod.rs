use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value, TableOptions::from_env()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a response whose table form differs from its JSON form.
///
/// `rows` is only built for [`OutputFormat::Table`].
pub fn output_with_table<T, R, F>(value: &T, format: OutputFormat, rows: F) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize,
    F: FnOnce() -> R,
{
    match format {
        OutputFormat::Table => output(&rows(), format),
        OutputFormat::Json | OutputFormat::Raw => output(value, format),
    }
}

fn render_value_table<T: Serialize>(value: &T, options: TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

/// Columns follow the field order of the first row; later rows may add
/// columns on the right.
fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        name: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: 7, name: "Wilting" };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["name"], "Wilting");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![Example { id: 1, name: "a" }, Example { id: 2, name: "b" }];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[1]["name"], "b");
    }

    #[test]
    fn array_table_keeps_field_order() {
        let value = vec![Example { id: 1, name: "Stem rot" }];
        let out = render_value_table(&value, TableOptions::default()).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.find("id").unwrap() < header.find("name").unwrap());
        assert!(out.contains("Stem rot"));
    }

    #[test]
    fn object_table_is_key_value() {
        let value = Example { id: 3, name: "Rice Rust" };
        let out = render_value_table(&value, TableOptions::default()).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("Rice Rust"));
    }

    #[test]
    fn empty_array_has_placeholder() {
        let out = render_value_table(&Vec::<Example>::new(), TableOptions::default()).unwrap();
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn nested_values_flatten_into_cells() {
        assert_eq!(value_to_cell(&json!(["Wilting", "Stem rot"])), "Wilting, Stem rot");
        assert_eq!(value_to_cell(&json!(null)), "-");
        assert_eq!(value_to_cell(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
