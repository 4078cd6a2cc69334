#![allow(non_snake_case)]
pub mod Utils;
pub mod global;
pub mod numerical;
pub mod somelinalg;

use crate::Utils::plots::plot_error_vs_h;
use crate::Utils::reporting::convergence_table;
use crate::numerical::convergence::ConvergenceStudy;
use std::f64::consts::PI;

fn main() {
    // -u'' = sin(x) on [0, 2*pi], exact solution u(x) = sin(x)
    let resolutions = vec![20, 40, 80, 160, 320, 640, 1280];
    let mut study = ConvergenceStudy::new(
        0.0,
        2.0 * PI,
        resolutions,
        Box::new(|x: f64| x.sin()),
        Box::new(|x: f64| x.sin()),
    );
    study.loglevel = Some("info".to_string());

    match study.solve() {
        Ok(records) => {
            println!("{}", convergence_table(&records));
            let (h, err) = study.h_and_errors();
            plot_error_vs_h(&h, &err, "bvp_error.png");
        }
        Err(e) => {
            eprintln!("convergence study failed: {}", e);
            std::process::exit(1);
        }
    }
}
