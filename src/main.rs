// Rust Splash Application
// Main entry point

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use rust_splash::models::boot::BootState;
use rust_splash::models::countdown::CountdownSnapshot;
use rust_splash::services::scheduler::SplashScheduler;
use rust_splash::services::settings::{self, SplashConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Splash");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = settings::load_config(config_path.as_deref())?;
    log::info!("Counting down to {}", config.target);

    run(config).await
}

async fn run(config: SplashConfig) -> Result<()> {
    let mut scheduler = SplashScheduler::from_config(&config);

    println!("{}", config.banner);
    render_boot(scheduler.boot_state())?;

    loop {
        let result = scheduler.tick();

        if let Some(boot) = &result.boot {
            render_boot(boot)?;
        }
        if result.boot_completed {
            render_footer(&config)?;
        }
        if let Some(snapshot) = &result.countdown {
            render_countdown(snapshot)?;
        }

        let sleep_for = result.next_due_in.unwrap_or(Duration::from_millis(50));
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                log::info!("Shutting down");
                return Ok(());
            }
            _ = tokio::time::sleep(sleep_for) => {}
        }
    }
}

const BAR_WIDTH: usize = 30;

/// Rewrites the single boot line in place: status message, bar, percentage.
fn render_boot(state: &BootState) -> Result<()> {
    let filled = (state.progress as usize * BAR_WIDTH) / 100;
    let bar: String = (0..BAR_WIDTH)
        .map(|cell| if cell < filled { '#' } else { '-' })
        .collect();
    let line = format!(
        "> {}  [{}] {}% COMPLETE",
        state.message, bar, state.progress
    );
    print!("\r{line:<70}");
    io::stdout().flush()?;
    Ok(())
}

/// Closes out the boot line and prints the post-boot status footer.
fn render_footer(config: &SplashConfig) -> Result<()> {
    println!();
    for line in &config.footer_lines {
        println!("{line}");
    }
    io::stdout().flush()?;
    Ok(())
}

fn render_countdown(snapshot: &CountdownSnapshot) -> Result<()> {
    let line = if snapshot.expired {
        format!("T-0  {}", snapshot.text)
    } else {
        snapshot.text.clone()
    };
    print!("\r{line:<40}");
    io::stdout().flush()?;
    Ok(())
}
