//! Fill in the standard receipt as a user would and save it as a PDF.
//!
//! Run with: `cargo run --example receipt -- [output_dir]`

use receipt_render::{
    ids, BlitzRasterizer, Config, DirectorySink, ExportAction, Exporter, Form, NoUpload,
};
use std::env;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "receipt_render=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let output_dir = env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let mut form = Form::receipt();
    form.input(ids::NUMBER, "0042")?;
    form.input(ids::PAYER, "Maria da Silva")?;
    form.input(ids::REFERENCE, "Aluguel de dezembro")?;

    // Type the values one key at a time; the total follows along
    let rent = ids::item_value(1);
    form.input(&ids::item_description(1), "Aluguel")?;
    let mut typed = String::new();
    for key in "150000".chars() {
        typed.push(key);
        form.input(&rent, &typed)?;
        typed = form.display(&rent).unwrap_or_default().to_string();
    }

    form.input(&ids::item_description(2), "Condomínio")?;
    form.input(&ids::item_value(2), "35050")?;
    form.set_checked(ids::PIX, true)?;
    form.input(ids::CITY, "São Paulo")?;
    form.input(ids::DATE, "25122023")?;

    println!("Total: {}", form.total().unwrap_or_default());

    let config = Config::default();
    let mut exporter = Exporter::new(
        config,
        BlitzRasterizer,
        DirectorySink::new(output_dir),
        NoUpload,
    )?;

    let started = Instant::now();
    let report = exporter.export(&form, ExportAction::SaveLocal)?;
    println!(
        "{} ({} bytes) in {:?}: {:?}",
        exporter.controls().save.label(),
        report.pdf_bytes,
        started.elapsed(),
        report.outcome
    );

    Ok(())
}
