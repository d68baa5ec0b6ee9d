use std::time::Duration;

use anyhow::Context;
use thirtyfour::{
    common::capabilities::firefox::{FirefoxCapabilities, FirefoxPreferences},
    error::WebDriverResult,
    By, CapabilitiesHelper, DesiredCapabilities, Proxy, WebDriver,
};

use crate::configuration::ScraperSettings;

const EMAIL_CELL_XPATH: &str = r#"//td[@itemprop="email"]"#;
const EMAIL_REVEAL_XPATH: &str = r#"//td[@itemprop="email"]/span"#;
const EMAIL_PLACEHOLDER: &str = "click to get email address";

/// The browser operations the page scraper relies on.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    async fn goto(&self, url: &str) -> anyhow::Result<()>;

    /// Clicks the email placeholder on a profile page, if there is one, and
    /// waits for the address to load. Returns whether a click happened.
    async fn reveal_email(&self) -> anyhow::Result<bool>;

    async fn title(&self) -> anyhow::Result<String>;

    async fn page_source(&self) -> anyhow::Result<String>;
}

pub struct Droid {
    pub driver: WebDriver,
    reveal_delay: Duration,
}

impl Droid {
    pub async fn new(settings: &ScraperSettings) -> anyhow::Result<Self> {
        let caps = firefox_capabilities(settings)?;

        let driver = WebDriver::new(&settings.webdriver_url, caps)
            .await
            .with_context(|| format!("Failed to start browser at {}", settings.webdriver_url))?;

        let implicit_wait = Duration::from_secs(settings.implicit_wait_secs);
        if let Err(e) = driver.set_implicit_wait_timeout(implicit_wait).await {
            _ = driver.quit().await;
            return Err(e).context("Failed to set implicit wait on browser");
        }

        log::info!(
            "Browser session started (headless: {}, proxy: {})",
            settings.headless,
            settings.proxy.is_some()
        );

        Ok(Droid {
            driver,
            reveal_delay: Duration::from_secs(settings.reveal_delay_secs),
        })
    }

    pub async fn quit(self) {
        match self.driver.quit().await {
            Ok(()) => log::info!("Browser session closed"),
            Err(e) => log::error!("Failed to close browser session: {:?}", e),
        }
    }
}

/// Firefox capabilities for the scraper: fixed user agent, optional headless
/// mode and an optional manual proxy for both http and tls traffic.
pub fn firefox_capabilities(settings: &ScraperSettings) -> WebDriverResult<FirefoxCapabilities> {
    let mut caps = DesiredCapabilities::firefox();
    if settings.headless {
        caps.set_headless()?;
    }

    let mut prefs = FirefoxPreferences::new();
    prefs.set_user_agent(settings.user_agent.clone())?;
    caps.set_preferences(prefs)?;

    if let Some(proxy) = &settings.proxy {
        let proxy = Proxy::Manual {
            ftp_proxy: None,
            http_proxy: Some(proxy.http_endpoint()),
            ssl_proxy: Some(proxy.ssl_endpoint()),
            socks_proxy: None,
            socks_version: None,
            socks_username: None,
            socks_password: None,
            no_proxy: None,
        };
        caps.set_proxy(proxy)?;
    }

    Ok(caps)
}

impl BrowserSession for Droid {
    async fn goto(&self, url: &str) -> anyhow::Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn reveal_email(&self) -> anyhow::Result<bool> {
        let email_cell = self.driver.find(By::XPath(EMAIL_CELL_XPATH)).await?;
        let text = email_cell.text().await?;

        if !text.to_lowercase().contains(EMAIL_PLACEHOLDER) {
            return Ok(false);
        }

        self.driver
            .find(By::XPath(EMAIL_REVEAL_XPATH))
            .await?
            .click()
            .await?;
        tokio::time::sleep(self.reveal_delay).await;

        Ok(true)
    }

    async fn title(&self) -> anyhow::Result<String> {
        Ok(self.driver.title().await?)
    }

    async fn page_source(&self) -> anyhow::Result<String> {
        Ok(self.driver.source().await?)
    }
}
