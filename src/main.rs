//! Demo form for the chibiui library.
//!
//! Builds a small "Person" form, records the form's values each time the
//! Submit button is pressed, and prints them once the window is closed.
//! Run with `--headless` to print every registered value and exit, or with
//! `--write-config` to create an editable key-binding file.

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use chibiui::{AppConfig, ChibiUi};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Path-addressed form demo")]
struct Cli {
    /// Window title.
    #[arg(long, default_value = "ChibiUI Example")]
    title: String,

    /// Skip the terminal UI; dump the form's values and exit.
    #[arg(long)]
    headless: bool,

    /// How often the form is polled, in milliseconds.
    #[arg(long = "tick-ms", default_value_t = 50)]
    tick_ms: u64,

    /// Write the effective key bindings to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

fn build_form(ui: &mut ChibiUi) -> chibiui::Result<()> {
    ui.add_textbox("Title", "Personal Data")?;

    // Navigation folders are created from the path prefixes.
    ui.add_textbox("Person/Name", "John Doe")?;
    ui.add_selector("Person/Gender", &["Male", "Female", "Other"], "Male")?;
    ui.add_slider("Person/Age", 0.0, 100.0, 1.0, 30.0)?;
    ui.add_checkbox("Person/Add File", true)?;
    ui.add_browse_file("Person/Select File")?;
    ui.add_button("Person/Submit", false)?;

    ui.add_textbox("Option/Country", "Japan")?;
    Ok(())
}

/// If Submit was pressed, reset it and return a report of the form.
fn take_submission(ui: &mut ChibiUi) -> chibiui::Result<Option<String>> {
    if ui.get("Person/Submit")?.as_bool() != Some(true) {
        return Ok(None);
    }
    let mut report = format!("Title: {}\n-- Personal Info --\n", ui.get("/Title")?);
    for field in ["Name", "Gender", "Age", "Add File", "Select File"] {
        report.push_str(&format!("{field}: {}\n", ui.get(&format!("Person/{field}"))?));
    }
    report.push_str(&format!("Country: {}\n---", ui.get("Option/Country")?));
    ui.set("Person/Submit", false)?;
    Ok(Some(report))
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr (only when RUST_LOG is set) so stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.write_config {
        let path = AppConfig::load().save()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let mut ui = ChibiUi::create(cli.title, cli.headless)?;
    build_form(&mut ui)?;

    if ui.is_headless() {
        for path in ui.paths() {
            println!("{path} = {}", ui.get(&path)?);
        }
        return Ok(());
    }

    // The form owns the terminal until it closes, so reports are printed
    // once stdout is ours again.
    let mut reports = Vec::new();
    let mut failure = None;
    chibiui::run(&mut ui, Duration::from_millis(cli.tick_ms.max(1)), |ui| {
        match take_submission(ui) {
            Ok(Some(report)) => {
                reports.push(report);
                ui.set_status(format!("Submitted ({})", reports.len()));
            }
            Ok(None) => {}
            Err(e) => {
                failure = Some(e);
                ui.close();
            }
        }
    })
    .await?;

    for report in &reports {
        println!("{report}");
    }
    if let Some(e) = failure {
        return Err(e.into());
    }
    Ok(())
}
