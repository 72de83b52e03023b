#![cfg_attr(
    target_os = "cuda",
    no_std,
    feature(register_attr),
    register_attr(nvvm_internal)
)]

pub mod pyramid;
pub mod step;
pub mod sum;
pub mod vec_add;
