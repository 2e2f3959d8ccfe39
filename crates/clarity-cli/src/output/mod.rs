use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[test]
    fn json_is_pretty_and_raw_is_compact() {
        let value = json!({ "title": "Start Small", "challenge": "Why now?" });
        let pretty = render(&value, OutputFormat::Json).expect("render json");
        let raw = render(&value, OutputFormat::Raw).expect("render raw");
        assert!(pretty.contains('\n'));
        assert!(!raw.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&raw).expect("raw is json"),
            value
        );
    }
}
