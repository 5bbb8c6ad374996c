/* src/server/core/rust/src/pages/news.rs */

use serde_json::{Value, json};

use super::NEWS_ROUTE;
use crate::content::NewsArticle;
use crate::errors::SiteError;
use crate::navigation::navigate_to_detail;
use crate::page::{PageContext, PageData, PageDef};

const LIST_TEMPLATE: &str = include_str!("../../templates/news.html");
const DETAIL_TEMPLATE: &str = include_str!("../../templates/news_detail.html");

fn article_summary(ctx: &PageContext<'_>, article: &NewsArticle) -> Result<Value, SiteError> {
  Ok(json!({
    "id": article.id,
    "href": navigate_to_detail(NEWS_ROUTE, article.id),
    "title": article.title.get(ctx.locale),
    "date": article.date.format(ctx.locale),
    "date_iso": article.date.iso(),
    "category": ctx.text("news", article.category.translation_key())?,
    "icon": article.category.icon(),
    "excerpt": article.excerpt.get(ctx.locale),
    "image": article.image,
    "author": article.author,
  }))
}

pub(super) fn list() -> Result<PageDef, SiteError> {
  PageDef::new(NEWS_ROUTE, "news", LIST_TEMPLATE, |ctx| {
    let articles = ctx
      .content
      .news
      .items()
      .iter()
      .map(|article| article_summary(ctx, article))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(PageData {
      title: Some(ctx.text("news", "title")?.to_string()),
      data: json!({ "articles": articles }),
    })
  })
}

pub(super) fn detail() -> Result<PageDef, SiteError> {
  PageDef::new("/news/{id}", "news_detail", DETAIL_TEMPLATE, |ctx| {
    let article = ctx.lookup(&ctx.content.news, "article")?;
    let mut data = article_summary(ctx, article)?;
    data["body"] = json!(article.body.get(ctx.locale));
    Ok(PageData {
      title: Some(article.title.get(ctx.locale).to_string()),
      data: json!({ "article": data }),
    })
  })
}
