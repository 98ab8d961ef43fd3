//! `li parse`: print the JSON form of a source file.

use li_ir::Dialect;

use super::{read_file, report, Failure};
use crate::options::Options;

/// The program's JSON encoding, pretty-printed unless `compact`.
pub fn parse_to_json(source: &str, dialect: Dialect, compact: bool) -> Result<String, Failure> {
    let program = li_parse::parse_with_dialect(source, dialect)?;
    let json = if compact {
        serde_json::to_string(&program)?
    } else {
        serde_json::to_string_pretty(&program)?
    };
    Ok(json)
}

pub fn parse_file(path: &str, options: &Options) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    match parse_to_json(&source, options.dialect, options.compact) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(failure) => {
            report(path, &source, &failure);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compact_json_uses_canonical_keywords() {
        let json = parse_to_json(
            "main: fonc(n) { tantque n { n: (- n 1) } }",
            Dialect::french(),
            true,
        )
        .unwrap();
        assert_eq!(
            json,
            r#"{"main":{"params":["n"],"def":[["while","n",[{"n":["-","n",1]}]]]}}"#
        );
    }

    #[test]
    fn pretty_json_spans_lines() {
        let json = parse_to_json("main: def() { 1 }", Dialect::english(), false).unwrap();
        assert!(json.contains('\n'));
        let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed["main"]["def"][0], 1);
    }

    #[test]
    fn syntax_errors_surface() {
        assert!(matches!(
            parse_to_json("main: (f", Dialect::english(), true),
            Err(Failure::Parse(_))
        ));
    }
}
