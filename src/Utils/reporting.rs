use crate::numerical::convergence::ConvergenceRecord;
use tabled::{builder::Builder, settings::Style};

/// Renders the convergence records as a text table with columns h, error
/// and rate. The coarsest mesh has no preceding point to compare against,
/// its rate cell holds the "---" sentinel.
pub fn convergence_table(records: &[ConvergenceRecord]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["h", "error", "rate"]);
    for record in records {
        let rate = match record.rate {
            Some(p) => format!("{:.2}", p),
            None => "---".to_string(),
        };
        builder.push_record([
            format!("{:.3}", record.h),
            format!("{:.4e}", record.max_error),
            rate,
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_formats_and_sentinel() {
        let records = vec![
            ConvergenceRecord {
                h: 0.330693,
                max_error: 9.1549e-3,
                rate: None,
            },
            ConvergenceRecord {
                h: 0.161107,
                max_error: 2.2405e-3,
                rate: Some(1.96),
            },
        ];
        let table = convergence_table(&records);
        assert!(table.contains("---"));
        assert!(table.contains("0.331"));
        assert!(table.contains("0.161"));
        assert!(table.contains("1.96"));
        assert!(table.contains("9.1549e-3") || table.contains("9.1549e-03"));
    }

    #[test]
    fn empty_records_still_render_header() {
        let table = convergence_table(&[]);
        assert!(table.contains("h"));
        assert!(table.contains("error"));
        assert!(table.contains("rate"));
    }
}
