use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

/// Print `data` wrapped in the `{"ok": true, "data": ...}` envelope, or as
/// text lines built by `rows`.
pub fn print_one<T: Serialize>(
    out: &mut impl Write,
    json: bool,
    data: T,
    rows: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        for row in rows(&data) {
            writeln!(out, "{}", row)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_is_wrapped() {
        let mut buf = Vec::new();
        print_one(&mut buf, true, vec!["a"], |_| vec![]).expect("print");
        let v: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(v["ok"], true);
        assert_eq!(v["data"][0], "a");
    }

    #[test]
    fn text_output_is_one_line_per_row() {
        let mut buf = Vec::new();
        print_one(&mut buf, false, 2, |n| (0..*n).map(|i| format!("row {i}")).collect())
            .expect("print");
        assert_eq!(String::from_utf8_lossy(&buf), "row 0\nrow 1\n");
    }
}
