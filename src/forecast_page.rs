// src/forecast_page.rs - static page generation for the Ventusky embed

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::info;

use crate::config::Config;
use crate::constants::{OUTPUT_PAGE_NAME, OUTPUT_TAP_NAME, VENTUSKY_EMBED_BASE};
use crate::error::AppError;
use crate::tee_times::models::{ResolvedTarget, TeeTimeRecord};

/// Builds the Ventusky embed URL for a resolved target.
/// The query layout is an external-service contract:
/// `?p=<lat>;<lon>;<zoom>&l=<layer>&t=<YYYYMMDD/HH>`.
///
/// # Example
/// ```
/// use tee_forecast::forecast_page::build_embed_url;
///
/// let url = build_embed_url(51.730, -1.037, 10, "rain-3h", "20240310/23");
/// assert_eq!(
///     url,
///     "https://embed.ventusky.com/?p=51.73;-1.037;10&l=rain-3h&t=20240310/23"
/// );
/// ```
pub fn build_embed_url(
    latitude: f64,
    longitude: f64,
    zoom: u8,
    layer: &str,
    t_param: &str,
) -> String {
    format!("{VENTUSKY_EMBED_BASE}?p={latitude};{longitude};{zoom}&l={layer}&t={t_param}")
}

/// Human-readable line naming the targeted tee time.
///
/// Prefers the document's `dateISO`/`timeHHMM` display hints when both are
/// present; otherwise formats the tee instant in UTC so the page content is
/// identical regardless of the build machine's timezone. Display only, the
/// hints never feed back into resolution.
pub fn banner_label(tee: &TeeTimeRecord, t_param: &str) -> String {
    let local_str = match (&tee.date_iso, &tee.time_hhmm) {
        (Some(date), Some(time)) => format!("{date} {time}"),
        _ => tee
            .when_iso
            .as_deref()
            .and_then(|when| DateTime::parse_from_rfc3339(when).ok())
            .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| t_param.to_string()),
    };
    format!("{local_str} — UTC {t_param}")
}

/// A fully rendered forecast page, ready to be written out.
pub struct ForecastPage {
    banner: String,
    embed_url: String,
}

impl ForecastPage {
    /// Builds the page for a resolved target using the configured location,
    /// zoom and layer.
    pub fn new(target: &ResolvedTarget, config: &Config) -> Self {
        let t_param = target.t_param();
        let embed_url = build_embed_url(
            config.latitude,
            config.longitude,
            config.zoom,
            &config.layer,
            &t_param,
        );
        let banner = banner_label(&target.source_tee, &t_param);
        ForecastPage { banner, embed_url }
    }

    /// The embed URL the page points at.
    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    /// Renders the complete static HTML document: a sticky banner naming the
    /// targeted tee time, a link to the raw embed, and a full-viewport iframe.
    pub fn render(&self) -> String {
        let banner = &self.banner;
        let src = &self.embed_url;
        format!(
            r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Tee Forecast</title>
  <style>
    body {{ margin:0; background:#000; }}
    .bar {{
      font: 14px -apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,Helvetica,Arial,sans-serif;
      color:#eee; background:#111; padding:8px 12px; position:sticky; top:0; z-index:1;
    }}
    .bar a {{ color:#9cf; text-decoration:underline; }}
    iframe {{ border:0; width:100%; height:100vh; }}
  </style>
</head>
<body>
  <div class="bar">
    Tee-time target: <strong>{banner}</strong>
    &nbsp;|&nbsp; <a href="{src}" target="_blank" rel="noopener">Open raw embed</a>
  </div>
  <iframe src="{src}" allowfullscreen></iframe>
</body>
</html>
"#
        )
    }

    /// Writes `index.html` (and `tap.txt` when a public page URL is
    /// configured) into the output directory, creating it if needed.
    ///
    /// Callers run this only after fetch and resolution have succeeded, so a
    /// failed run never leaves partial output behind.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Path of the written page
    /// * `Err(AppError)` - I/O error creating the directory or writing files
    pub async fn write_to_dir(
        &self,
        dir: &Path,
        pages_url: Option<&str>,
    ) -> Result<PathBuf, AppError> {
        fs::create_dir_all(dir).await?;

        let page_path = dir.join(OUTPUT_PAGE_NAME);
        fs::write(&page_path, self.render()).await?;
        info!("Wrote forecast page to {}", page_path.display());

        // Helper for widgets that can only load a plain URL; carries the
        // public page address, never the source URL
        if let Some(pages_url) = pages_url {
            let tap_path = dir.join(OUTPUT_TAP_NAME);
            fs::write(&tap_path, format!("{pages_url}\n")).await?;
            info!("Wrote widget helper to {}", tap_path.display());
        }

        Ok(page_path)
    }
}
