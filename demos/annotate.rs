//! Label a few sample objects and print where the labels ended up.
//!
//! Run with: RUST_LOG=dimlabel=debug cargo run --example annotate --features tracing -- 12 40 mm
//!
//! Arguments are font size, offset and unit, as typed into the parameter dialog.

use dimlabel::memory::MemoryDocument;
use dimlabel::{Bounds, LabelSettings, annotate};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &str| args.get(i).cloned().unwrap_or_else(|| default.to_string());
    let settings = LabelSettings::from_inputs(&arg(0, "32"), &arg(1, "40"), &arg(2, "mm"))?;

    let mut doc = MemoryDocument::new();
    doc.select(Bounds::new(0.0, 100.0, 72.0, 0.0), "Layer 1")
        .select(Bounds::new(150.0, 300.0, 450.0, 120.0), "Layer 1")
        .select(Bounds::new(500.0, 40.0, 520.0, 0.0), "Layer 1")
        .select(Bounds::new(0.0, 600.0, 100.0, 500.0), "Background");

    let report = annotate(Some(&mut doc), &settings)?;
    for label in &report.labels {
        println!(
            "{:<6} {:>10} at ({:8.2}, {:8.2})  {:.1} x {:.1}",
            format!("{:?}", label.kind),
            label.content,
            label.anchor.left.raw(),
            label.anchor.top.raw(),
            label.size.w.raw(),
            label.size.h.raw(),
        );
    }
    println!("{report}");
    Ok(())
}
