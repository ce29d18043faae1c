//! HTML rendering: page bodies composed into the shared layout.

use askama::Template;
use leaflove_common::Plant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate {
    content: String,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate;

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate<'a> {
    count: usize,
    plants: &'a [Plant],
}

/// Render the preference form wrapped in the page layout.
pub fn home_page() -> Result<String, RenderError> {
    compose(HomeTemplate)
}

/// Render the results page (match count plus one card per plant) wrapped in
/// the page layout.
pub fn results_page(plants: &[Plant]) -> Result<String, RenderError> {
    compose(ResultsTemplate {
        count: plants.len(),
        plants,
    })
}

// Two-pass composition: the body renders first with autoescaping applied to
// every interpolated value, then the layout splices the finished fragment in
// via `|safe` - the only unescaped insertion point.
fn compose<T: Template>(body: T) -> Result<String, RenderError> {
    let content = body.render()?;
    Ok(LayoutTemplate { content }.render()?)
}
