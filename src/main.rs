use anyhow::{Context, Result};
use flexi_logger::Logger;
use inkpress::{Config, ContentRenderer, MemoryStore};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;

/// Stylesheet embedded in generated preview pages.
///
/// Keeps previews self-contained so a single HTML file can be opened or
/// mailed around without an assets directory.
const PAGE_CSS: &str = "\
body { margin: 0; font-family: -apple-system, 'Segoe UI', sans-serif; color: #1f2328; }
.post { max-width: 46rem; margin: 0 auto; padding: 2rem 1rem 4rem; }
.post-title { font-size: 2rem; line-height: 1.2; margin-bottom: 1.5rem; }
.post-body { line-height: 1.6; }
.post-body img { max-width: 100%; }
.post-body pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; }
.post-body code { font-family: ui-monospace, monospace; font-size: 0.9em; }
.post-body blockquote { margin: 0; padding-left: 1rem; border-left: 3px solid #d0d7de; color: #59636e; }
.post-body table { border-collapse: collapse; }
.post-body th, .post-body td { border: 1px solid #d0d7de; padding: 0.4rem 0.8rem; }
";

/// Wraps rendered post content in a standalone preview page.
///
/// # Arguments
///
/// * `title`: Page title shown in the header and browser tab
/// * `content_html`: Sanitized HTML from the render pipeline
///
/// # Returns
///
/// Complete HTML markup for the preview page
fn preview_page(title: &str, content_html: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Inkpress" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main class="post" {
                    h1 class="post-title" { (title) }
                    article class="post-body" {
                        (PreEscaped(content_html))
                    }
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")
        .context("Failed to configure logging")?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")?;

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let mut store = MemoryStore::new();
    for (token, url) in config.image_mappings() {
        store.add_image(token, url);
    }

    let body = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;

    let renderer = ContentRenderer::new();
    let content_html = renderer.render(&store, &body);

    let page_title = config
        .page_title()
        .context("Failed to determine page title")?;
    let page = preview_page(&page_title, &content_html);

    match &config.output {
        Some(path) => {
            fs::write(path, page.into_string())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Generated: {}", path.display());
        }
        None => print!("{}", page.into_string()),
    }

    Ok(())
}
