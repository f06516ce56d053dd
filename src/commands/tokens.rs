use anyhow::Result;

use crate::ui::template::TOKENS;

pub fn execute() -> Result<()> {
    let width = TOKENS.iter().map(|spec| spec.literal.len()).max().unwrap_or(0);

    for spec in TOKENS {
        println!("{:<width$}  {}", spec.literal, spec.description, width = width);
    }

    Ok(())
}
