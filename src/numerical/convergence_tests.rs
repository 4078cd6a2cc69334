#[cfg(test)]
mod tests {
    use crate::global::BvpError;
    use crate::numerical::convergence::{ConvergenceRecord, ConvergenceStudy};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sin_study(resolutions: Vec<usize>) -> ConvergenceStudy {
        let mut study = ConvergenceStudy::new(
            0.0,
            2.0 * PI,
            resolutions,
            Box::new(|x: f64| x.sin()),
            Box::new(|x: f64| x.sin()),
        );
        study.loglevel = Some("off".to_string());
        study
    }

    #[test]
    fn second_order_convergence_on_sin_problem() {
        let mut study = sin_study(vec![20, 40, 80, 160, 320, 640]);
        let records = study.solve().unwrap();
        assert_eq!(records.len(), 6);
        assert!(records[0].rate.is_none());
        // errors drop roughly 4x per doubling
        for pair in records.windows(2) {
            assert!(pair[1].max_error < pair[0].max_error / 3.0);
        }
        // asymptotic range: n >= 80, i.e. records from index 2 on
        for record in &records[2..] {
            let p = record.rate.unwrap();
            assert!(p > 1.9 && p < 2.1, "observed rate {} outside [1.9, 2.1]", p);
        }
    }

    #[test]
    fn coarse_mesh_rate_and_spacings() {
        let mut study = sin_study(vec![20, 40]);
        let records = study.solve().unwrap();
        assert_relative_eq!(records[0].h, 2.0 * PI / 19.0, epsilon = 1e-12);
        assert_relative_eq!(records[1].h, 2.0 * PI / 39.0, epsilon = 1e-12);
        assert!((records[0].h - 0.3307).abs() < 5e-4);
        assert!((records[1].h - 0.1611).abs() < 5e-4);
        let p = records[1].rate.unwrap();
        assert!((p - 2.0).abs() < 0.15, "coarse rate {} not within 2.0 +- 0.15", p);
    }

    #[test]
    fn rate_formula_handles_non_doubling_refinement() {
        // 21 -> 61 refines h by 3x, the generalized rate formula must
        // still recover second order
        let mut study = sin_study(vec![21, 61, 181]);
        let records = study.solve().unwrap();
        for record in &records[1..] {
            let p = record.rate.unwrap();
            assert!((p - 2.0).abs() < 0.1, "rate {} not close to 2", p);
        }
    }

    #[test]
    fn parallel_sequences_match_records() {
        let mut study = sin_study(vec![20, 40, 80]);
        study.solve().unwrap();
        let (h, err) = study.h_and_errors();
        let records: Vec<ConvergenceRecord> = study.get_records().to_vec();
        assert_eq!(h.len(), 3);
        assert_eq!(err.len(), 3);
        for i in 0..3 {
            assert_eq!(h[i], records[i].h);
            assert_eq!(err[i], records[i].max_error);
        }
    }

    #[test]
    fn invalid_resolution_propagates() {
        let mut study = sin_study(vec![20, 2, 80]);
        let res = study.solve();
        assert!(matches!(res, Err(BvpError::InvalidArgument(_))));
    }

    #[test]
    fn invalid_interval_propagates() {
        let mut study = ConvergenceStudy::new(
            1.0,
            0.0,
            vec![20],
            Box::new(|x: f64| x.sin()),
            Box::new(|x: f64| x.sin()),
        );
        study.loglevel = Some("off".to_string());
        assert!(matches!(study.solve(), Err(BvpError::InvalidArgument(_))));
    }
}
