//! Demo comparing the radial kernel families and the pairwise vector kernels

use radial_kernels::kernel::try_varifold_gauss_kernel;
use radial_kernels::utils::numerical::{check_grid, DEFAULT_STEP, DEFAULT_TOLERANCE};
use radial_kernels::utils::oo_sigma2_from_sigma;
use radial_kernels::{
    gauss_kernel, gauss_kernel_d1, squared_distance, varifold_gauss_kernel, KernelConfig,
    KernelFamily, Laplace, Precision,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Radial Kernel Families Demo ===");

    let oo_sigma2 = oo_sigma2_from_sigma(1.0);
    let radii = [0.0, 0.5, 1.0, 2.0, 5.0];

    for family in KernelFamily::ALL {
        println!("\n--- {family} (sigma=1) ---");
        println!("{:>6} {:>14} {:>14} {:>14}", "r2", "value", "d/dr2", "d2/dr2^2");
        for &r2 in &radii {
            let d = family.evaluate(r2, oo_sigma2);
            println!(
                "{:>6} {:>14.6e} {:>14.6e} {:>14.6e}",
                r2, d.value, d.first, d.second
            );
        }
    }

    // Wider kernels decay more slowly
    println!("\n--- Bandwidth impact at r2=1 ---");
    for sigma in [0.5, 1.0, 2.0] {
        let w = oo_sigma2_from_sigma(sigma);
        println!(
            "sigma={sigma:<4} gaussian={:.6} laplace={:.6} energy={:.6}",
            KernelFamily::Gaussian.value(1.0, w),
            KernelFamily::Laplace.value(1.0, w),
            KernelFamily::Energy.value(1.0, w)
        );
    }

    println!("\n--- Pairwise kernels ---");
    let u = [0.0_f64, 0.0, 0.0];
    let v = [1.0_f64, 0.5, -0.5];
    println!("|v - u|^2           = {}", squared_distance(&u, &v));
    println!("gauss_kernel        = {:.6}", gauss_kernel(&u, &v, oo_sigma2));
    for l in 0..v.len() {
        println!(
            "d/dv[{l}]             = {:.6}",
            gauss_kernel_d1(&u, &v, oo_sigma2, l)
        );
    }

    let normal_a = [1.0_f64, 0.0, 0.0];
    let normal_b = [-1.0_f64, 0.0, 0.0];
    let normal_c = [0.0_f64, 1.0, 0.0];
    println!(
        "varifold (parallel)   = {:.6}",
        varifold_gauss_kernel(&normal_a, &normal_b, oo_sigma2)
    );
    println!(
        "varifold (orthogonal) = {:.6}",
        varifold_gauss_kernel(&normal_a, &normal_c, oo_sigma2)
    );
    match try_varifold_gauss_kernel(&[0.0_f64, 0.0, 0.0], &normal_a, oo_sigma2) {
        Ok(value) => println!("varifold (zero)       = {value}"),
        Err(e) => println!("varifold (zero)       rejected: {e}"),
    }

    println!("\n--- Single precision configuration ---");
    let config = KernelConfig::new(KernelFamily::Energy)
        .with_sigma(2.0)
        .with_precision(Precision::Single);
    config.validate()?;
    let d = config.evaluate(3.0_f32)?;
    println!(
        "{} sigma={} r2=3: value={} d1={} d2={}",
        config.family,
        config.sigma(),
        d.value,
        d.first,
        d.second
    );

    println!("\n--- Derivative checks ---");
    for family in KernelFamily::ALL {
        let checks = check_grid(family, DEFAULT_STEP);
        let worst = checks.iter().map(|c| c.max_error()).fold(0.0, f64::max);
        let passed = checks.iter().filter(|c| c.passes(DEFAULT_TOLERANCE)).count();
        println!(
            "{family:<9} {passed}/{} within {DEFAULT_TOLERANCE:e}, worst error {worst:.3e}",
            checks.len()
        );
    }
    println!(
        "laplace d2 gap at r2=3, sigma=1: {:.6e}",
        Laplace::derivative2_gap(3.0, 1.0)
    );

    Ok(())
}
