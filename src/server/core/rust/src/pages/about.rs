/* src/server/core/rust/src/pages/about.rs */

use serde_json::{Value, json};

use crate::content::PLACEHOLDER_IMAGE;
use crate::errors::SiteError;
use crate::page::{PageData, PageDef};

const TEMPLATE: &str = include_str!("../../templates/about.html");

const SPONSOR_COUNT: usize = 4;

pub(super) fn page() -> Result<PageDef, SiteError> {
  PageDef::new("/about", "about", TEMPLATE, |ctx| {
    let label = ctx.text("about", "sponsor")?;
    let sponsors: Vec<Value> = (1..=SPONSOR_COUNT)
      .map(|i| json!({ "name": format!("{label} {i}"), "image": PLACEHOLDER_IMAGE }))
      .collect();
    Ok(PageData {
      title: Some(ctx.text("about", "title")?.to_string()),
      data: json!({ "team_photo": PLACEHOLDER_IMAGE, "sponsors": sponsors }),
    })
  })
}
