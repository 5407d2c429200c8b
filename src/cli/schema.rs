use std::io::Write;

use enquiry_contact::RULES;

pub fn print_schema() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();

    writeln!(out, "{:<10} {:<24} MESSAGE", "FIELD", "RULE")?;
    for rule in RULES {
        writeln!(
            out,
            "{:<10} {:<24} {}",
            rule.field.to_string(),
            rule.rule,
            rule.message
        )?;
    }

    Ok(())
}
