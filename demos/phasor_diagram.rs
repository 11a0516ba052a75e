//! Voltage diagram of a series RL load.
//!
//! Run with: cargo run --example phasor_diagram --features tracing > rl.svg

use num_complex::Complex64;
use phasorplot::style::{LineStyle, VAlign};
use phasorplot::types::Angle;
use phasorplot::units::{AMPERE, OHM, VOLT};
use phasorplot::{PhasorOptions, Recorder, SvgOptions, draw_phasor, polar};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let i = polar(10.0 * AMPERE, Angle::degrees(-30.0));
    let r = Complex64::new(8.0, 0.0) * OHM;
    let x = Complex64::new(0.0, 6.0) * OHM;
    let vr = r * i.clone();
    let vx = x * i.clone();
    let v = vr
        .checked_add(&vx)
        .ok_or_else(|| miette::miette!("resistor and reactor drops are not both voltages"))?;
    let base = v.abs().to(&VOLT).unwrap_or(v.abs());

    let mut fig = Recorder::new();
    draw_phasor(
        &mut fig,
        v,
        &PhasorOptions::new()
            .with_reference(base.clone())
            .with_label("V")
            .with_tlabel(-0.08),
    )?;
    draw_phasor(
        &mut fig,
        vr.clone(),
        &PhasorOptions::new()
            .with_reference(base.clone())
            .with_label("R·I")
            .with_color("tab:blue"),
    )?;
    draw_phasor(
        &mut fig,
        vx,
        &PhasorOptions::new()
            .with_origin(vr)
            .with_reference(base)
            .with_label("jX·I")
            .with_color("tab:blue")
            .with_relrot(true)
            .with_va(VAlign::Bottom),
    )?;
    draw_phasor(
        &mut fig,
        i,
        &PhasorOptions::new()
            .with_reference(12.0 * AMPERE)
            .with_par(-0.05)
            .with_label("I")
            .with_color("tab:red")
            .with_linestyle(LineStyle::Dashed),
    )?;

    print!("{}", fig.to_svg(&SvgOptions::default())?);
    Ok(())
}
