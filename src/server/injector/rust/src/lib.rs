/* src/server/injector/rust/src/lib.rs */

//! HTML template injector.
//!
//! Templates are plain HTML carrying comment directives:
//!
//! - `<!--fl:path-->` escaped text, `<!--fl:path:html-->` raw HTML
//! - `<!--fl:if:path-->..<!--fl:else-->..<!--fl:endif:path-->`
//! - `<!--fl:each:path-->..<!--fl:endeach-->` with `$` / `$$` item scopes
//! - `<!--fl:match:path--><!--fl:when:value-->..<!--fl:endmatch-->`
//!
//! Paths are dotted lookups into the JSON data; missing paths render empty.

mod ast;
mod helpers;
mod parser;
mod render;
mod token;

use serde_json::Value;

pub use helpers::escape_html;
pub use parser::TemplateError;

/// A template parsed once and rendered many times.
#[derive(Debug, Clone)]
pub struct Template {
  nodes: Vec<ast::Node>,
}

impl Template {
  pub fn compile(source: &str) -> Result<Self, TemplateError> {
    let tokens = token::tokenize(source)?;
    let nodes = parser::parse(&tokens)?;
    Ok(Self { nodes })
  }

  pub fn render(&self, data: &Value) -> String {
    let mut out = String::new();
    render::render(&self.nodes, helpers::Scope::new(data), &mut out);
    out
  }
}

/// Compile and render in one step.
pub fn inject(source: &str, data: &Value) -> Result<String, TemplateError> {
  Ok(Template::compile(source)?.render(data))
}
