/// Build wallpaper formulas on each lattice type and report what they look like
///
/// Run with `RUST_LOG=debug` to see setup progress from the library.
use env_logger::Env;
use log::info;
use num_complex::Complex64;
use wallpaper_formula::formula::{
    ComplexNumber, EisensteinTermData, LatticeSize, WavePacketData,
};
use wallpaper_formula::{LatticeType, Symmetry, WallpaperFormula, WallpaperFormulaData};

fn describe(data: &WallpaperFormulaData) -> anyhow::Result<()> {
    let formula = WallpaperFormula::from_data(data)?;

    let present: Vec<String> = formula
        .symmetries_present()
        .iter()
        .map(|symmetry| symmetry.to_string())
        .collect();

    info!(
        "{} lattice, desired {:?}: {} wave packets, {} terms each",
        formula.lattice_type,
        formula.desired_symmetry.map(|s| s.as_str()),
        formula.wave_packets.len(),
        formula.wave_packets.first().map_or(0, |p| p.terms.len())
    );
    println!(
        "{:<12} desired {:<5} -> detected [{}]",
        formula.lattice_type.as_str(),
        formula.desired_symmetry.map_or("none", |s| s.as_str()),
        present.join(", ")
    );

    let value = formula.calculate(Complex64::new(0.25, 0.5)).total;
    println!("{:<12} f(0.25 + 0.5i) = {:.4}", "", value);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cases = [
        (LatticeType::Generic, Some(Symmetry::P2)),
        (LatticeType::Rectangular, Some(Symmetry::Pgg)),
        (LatticeType::Rhombic, Some(Symmetry::Cmm)),
        (LatticeType::Hexagonal, Some(Symmetry::P6m)),
        (LatticeType::Square, Some(Symmetry::P4g)),
        (LatticeType::Square, None),
    ];

    for (lattice_type, desired_symmetry) in cases {
        let data = WallpaperFormulaData {
            lattice_type,
            lattice_size: LatticeSize {
                width: 0.4,
                height: 1.3,
            },
            multiplier: ComplexNumber {
                real: 1.0,
                imaginary: 0.0,
            },
            wave_packets: vec![
                WavePacketData {
                    multiplier: ComplexNumber {
                        real: 1.0,
                        imaginary: 0.0,
                    },
                    terms: vec![EisensteinTermData {
                        power_n: 1,
                        power_m: -2,
                    }],
                },
                WavePacketData {
                    multiplier: ComplexNumber {
                        real: 0.0,
                        imaginary: 0.5,
                    },
                    terms: vec![EisensteinTermData {
                        power_n: 3,
                        power_m: 0,
                    }],
                },
            ],
            desired_symmetry,
        };
        describe(&data)?;
    }

    Ok(())
}
