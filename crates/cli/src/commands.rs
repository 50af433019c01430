//! Command implementations.
//!
//! Each command writes its report to `out` and returns whether everything it looked at was
//! acceptable, so `main` can turn that into an exit status.

use crate::input::Input;
use anyhow::Context;
use mini_bio::{conformance, DocumentFormat, Language, MiniBioDocument, MiniBioType};
use std::io::Write;

/// Run the conformance checker over every input.
pub fn check(inputs: &[Input], out: &mut impl Write) -> anyhow::Result<bool> {
    let mut all_ok = true;

    for input in inputs {
        let result = conformance::check_str(&input.text, input.format);
        if result.is_conforming() {
            writeln!(out, "{}: ok", input.label)?;
            continue;
        }

        all_ok = false;
        tracing::warn!(
            label = %input.label,
            violations = result.violations().len(),
            "document does not conform"
        );
        writeln!(out, "{}: does not conform", input.label)?;
        for violation in result.violations() {
            writeln!(out, "  {violation}")?;
        }
    }

    Ok(all_ok)
}

/// Strict-parse a document and re-render it in another format.
pub fn convert(input: &Input, to: DocumentFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let bio = MiniBioDocument::parse(&input.text, input.format)
        .with_context(|| format!("{} is not a valid MiniBio", input.label))?;
    let rendered = MiniBioDocument::render(&bio, to)?;

    out.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

pub fn variant(tag: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    let result = conformance::check_variant(&serde_json::Value::from(tag));
    match tag.parse::<MiniBioType>() {
        Ok(variant) => writeln!(out, "{variant}: ok")?,
        Err(_) => writeln!(out, "{result}")?,
    }
    Ok(result.is_conforming())
}

pub fn language(code: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    match code.parse::<Language>() {
        Ok(language) => {
            writeln!(out, "{language}: ok")?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(false)
        }
    }
}

pub fn languages(out: &mut impl Write) -> anyhow::Result<()> {
    for language in Language::ALL {
        writeln!(out, "{language}")?;
    }
    Ok(())
}
