use anyhow::anyhow;

use crate::error::ScrapeError;
use crate::http_client::http_client;

/// Boundary to whatever turns an address into rendered markup. Production
/// uses plain blocking HTTP; tests inject fakes through this trait.
pub trait PageRenderer {
    fn render_page(&self, url: &str) -> Result<String, ScrapeError>;
}

pub struct HttpRenderer;

impl PageRenderer for HttpRenderer {
    fn render_page(&self, url: &str) -> Result<String, ScrapeError> {
        let client = http_client().map_err(ScrapeError::Render)?;
        let resp = client.get(url).send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(ScrapeError::Render(anyhow!("http {status} fetching {url}")));
        }
        Ok(body)
    }
}
