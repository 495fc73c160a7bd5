//! HTML views. Templates are compiled into the binary and parsed once.

use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use std::sync::LazyLock;
use tera::Tera;

pub use tera::Context as ViewContext;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Templates;

static TERA: LazyLock<Result<Tera, tera::Error>> = LazyLock::new(load_templates);

fn load_templates() -> Result<Tera, tera::Error> {
    let mut sources = Vec::new();
    for name in Templates::iter() {
        let Some(file) = Templates::get(&name) else {
            continue;
        };
        match String::from_utf8(file.data.into_owned()) {
            Ok(source) => sources.push((name.into_owned(), source)),
            Err(_) => tracing::warn!(template = %name, "Skipping template that is not UTF-8"),
        }
    }

    // `.html` templates are autoescaped by default.
    let mut tera = Tera::default();
    tera.add_raw_templates(sources)?;
    Ok(tera)
}

pub fn render(name: &str, context: &ViewContext) -> Result<String> {
    let tera = TERA
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Templates failed to load: {e}"))?;

    tera.render(name, context)
        .with_context(|| format!("Failed to render {name}"))
}
