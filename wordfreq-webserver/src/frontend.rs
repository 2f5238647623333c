use std::{borrow::Cow, ffi::OsStr, path::Path, path::PathBuf};

use rocket::{get, http::ContentType, response::content::RawHtml, routes, Route};
use rust_embed::RustEmbed;

const INDEX_HTML: &str = "index.html";

#[derive(RustEmbed)]
#[folder = "../wordfreq-frontend/dist/"]
#[allow_missing = true]
struct FrontendAsset;

pub fn routes() -> Vec<Route> {
    routes![get_index, get_index_html, get_file]
}

#[get("/")]
pub fn get_index() -> Option<RawHtml<Cow<'static, [u8]>>> {
    let Some(html) = FrontendAsset::get(INDEX_HTML) else {
        log::warn!("The web application has not been built: {INDEX_HTML} is missing");
        return None;
    };
    Some(RawHtml(html.data))
}

#[get("/index.html")]
pub fn get_index_html() -> Option<RawHtml<Cow<'static, [u8]>>> {
    get_index()
}

#[get("/<file..>", rank = 2)]
pub fn get_file(file: PathBuf) -> Option<(ContentType, Cow<'static, [u8]>)> {
    let filename = file.display().to_string();
    let asset = FrontendAsset::get(&filename)?;
    Some((content_type(&file), asset.data))
}

fn content_type(file: &Path) -> ContentType {
    file.extension()
        .and_then(OsStr::to_str)
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Bytes)
}
