//! some linear algebra functions used throughout the code
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// Thomas algorithm (TDMA) for tridiagonal systems
pub mod tridiagonal;
