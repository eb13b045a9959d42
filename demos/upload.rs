//! Export the standard receipt and upload it to a script endpoint.
//!
//! Run with: `cargo run --example upload -- <endpoint_url>`
//!
//! The endpoint receives the form fields `data` (base64 PDF) and `filename`
//! and should answer with a body containing `Sucesso` when it stored the file.

use receipt_render::{
    ids, BlitzRasterizer, Config, DirectorySink, ExportAction, Exporter, Form, HttpUploader,
};
use std::env;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "receipt_render=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <endpoint_url>", args[0]);
        std::process::exit(1);
    }

    let mut form = Form::receipt();
    form.input(ids::PAYER, "João Pereira")?;
    form.input(ids::REFERENCE, "Serviços de manutenção")?;
    form.input(&ids::item_value(1), "25000")?;
    form.set_checked(ids::CASH, true)?;
    form.input(ids::DATE, "05012024")?;

    let mut exporter = Exporter::new(
        Config::default().logging(true),
        BlitzRasterizer,
        DirectorySink::new("."),
        HttpUploader::new(args[1].as_str()),
    )?;

    let report = exporter.export(&form, ExportAction::Upload)?;
    if let Some(alert) = &report.alert {
        eprintln!("ALERT: {alert}");
    }
    println!("{}", exporter.controls().upload.label());

    // Wait out the restore delay like the page's timer would
    let deadline = exporter.restore_deadline().unwrap_or_else(Instant::now);
    std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
    exporter.poll(Instant::now());
    println!("{}", exporter.controls().upload.label());

    Ok(())
}
