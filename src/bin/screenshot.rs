//! Captures screenshots of the game through headless Chromium:
//! one of the menu, one right after entering gameplay, and one
//! a few seconds later once enemies have spawned.
//!
//! Pacing is fixed sleeps, so the local server must already be
//! running and the page reasonably fast to load.

use std::error::Error;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use tokio::time::sleep;

const GAME_URL: &str = "http://localhost:8000/shatterrealms_v5.html";
const VIEWPORT_WIDTH: u32 = 1920;
const VIEWPORT_HEIGHT: u32 = 1080;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = BrowserConfig::builder()
        .window_size(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
        .no_sandbox()
        .build()?;

    let (mut browser, mut handler) = Browser::launch(config).await?;
    let events = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    let page = browser.new_page(GAME_URL).await?;
    page.wait_for_navigation().await?;
    sleep(Duration::from_secs(2)).await;

    capture(&page, "screenshot_menu.png").await?;
    println!("Menu screenshot saved");

    // Pick computer mode and start a round
    click_label(&page, "Computer").await?;
    sleep(Duration::from_millis(500)).await;
    click_label(&page, "Play").await?;
    sleep(Duration::from_secs(1)).await;

    // Click the canvas to enable controls
    page.find_element("canvas").await?.click().await?;
    sleep(Duration::from_secs(2)).await;

    capture(&page, "screenshot_gameplay.png").await?;
    println!("Gameplay screenshot saved");

    // Give enemies time to spawn
    sleep(Duration::from_secs(3)).await;
    capture(&page, "screenshot_enemies.png").await?;
    println!("Enemies screenshot saved");

    browser.close().await?;
    browser.wait().await?;
    events.await?;

    Ok(())
}

async fn capture(page: &Page, path: &str) -> Result<(), Box<dyn Error>> {
    page.save_screenshot(
        ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .build(),
        path,
    )
    .await?;
    Ok(())
}

/// Clicks the first element whose text matches `label`,
/// preferring an exact match over a substring one.
async fn click_label(page: &Page, label: &str) -> Result<(), Box<dyn Error>> {
    let script = format!(
        r#"(() => {{
            const nodes = [...document.querySelectorAll('button, a, div, span')];
            const target = nodes.find((el) => el.textContent.trim() === '{label}')
                || nodes.find((el) => el.textContent.includes('{label}'));
            if (target) target.click();
            return target !== undefined;
        }})()"#,
        label = label
    );

    let clicked: bool = page.evaluate(script).await?.into_value()?;
    if !clicked {
        return Err(format!("no element labeled '{}' on the page", label).into());
    }
    Ok(())
}
