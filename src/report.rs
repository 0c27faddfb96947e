use crate::prelude::*;
use std::fmt;

const ROW_LABELS: [&str; 2] = ["SNP", "REF"];
const UNLABELED_ROW: &str = " ~ ";

/// Formats a score the way `printf("%.3e")` does, e.g. `1.000e-02`
pub fn scientific(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let formatted = format!("{:.3e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format!(
                "{}e{}{:02}",
                mantissa,
                if exponent < 0 { '-' } else { '+' },
                exponent.abs()
            ),
            Err(_) => formatted,
        },
        None => formatted,
    }
}

fn is_positive(score: Option<f32>) -> bool {
    score.map_or(false, |score| score > 0.0)
}

impl VariantRecord {
    /// Renders the human readable report of this record.
    ///
    /// Same as `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}:", self.id)?;

        if is_positive(self.p_value) || is_positive(self.pn_value) {
            write!(f, "GLN")?;
            if let Some(p_value) = self.p_value.filter(|p| *p > 0.0) {
                write!(f, "\tp-value = {}", scientific(p_value))?;
            }
            if let Some(pn_value) = self.pn_value.filter(|pn| *pn > 0.0) {
                write!(f, "\tp_n-value = {}", scientific(pn_value))?;
            }
            writeln!(f)?;
        }

        for (population, table) in self.populations.iter() {
            writeln!(f, "{}\tCR\tN", population)?;
            write!(f, "{}", table)?;
        }
        Ok(())
    }
}

impl fmt::Display for PopulationTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            write!(f, "{}", ROW_LABELS.get(i).copied().unwrap_or(UNLABELED_ROW))?;
            for count in row {
                write!(f, "\t{}", count)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "p-value = {}\tp_n-value = {}",
            scientific(self.p_value()),
            scientific(self.pn_value())
        )
    }
}
