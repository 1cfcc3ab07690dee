//! URL construction for the service's plain-text endpoints.

use crate::request::{RandomRequest, RequestKind};

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://www.random.org";

/// `on`/`off` as the service spells its flags.
fn flag(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

/// URL of the quota check, answering with a bare integer.
pub fn quota_url(base_url: &str) -> String {
    format!("{}/quota/?format=plain", base_url.trim_end_matches('/'))
}

/// URL serving `req`. Each kind sends only the parameters its endpoint reads.
pub fn request_url(base_url: &str, req: &RandomRequest) -> String {
    let root = format!("{}/{}/", base_url.trim_end_matches('/'), req.kind.endpoint());
    match req.kind {
        RequestKind::Integers => format!(
            "{root}?num={}&min={}&max={}&col={}&base={}&format={}&rnd={}",
            req.num,
            req.min,
            req.max,
            req.col,
            req.base.radix(),
            req.format,
            req.rnd
        ),
        RequestKind::Sequences => format!(
            "{root}?min={}&max={}&col={}&format={}&rnd={}",
            req.min, req.max, req.col, req.format, req.rnd
        ),
        RequestKind::Strings => format!(
            "{root}?num={}&len={}&digits={}&upperalpha={}&loweralpha={}&unique={}&format={}&rnd={}",
            req.num,
            req.len,
            flag(req.digits),
            flag(req.upperalpha),
            flag(req.loweralpha),
            flag(req.unique),
            req.format,
            req.rnd
        ),
    }
}
