//! HTML document served at `/`

use pksite_core::{html, render, HeaderState};
use pksite_types::SiteConfig;

use crate::{CONFIG_ELEMENT_ID, PRERENDER_ELEMENT_ID};

/// Brand and contact details as JSON, safe to inline in a `<script>`
pub fn embedded_config(config: &SiteConfig) -> String {
    let json = serde_json::json!({
        "brand": config.brand,
        "contact": config.contact,
    });
    // A literal "</script>" inside the payload would end the element early
    json.to_string().replace("</", "<\\/")
}

/// Complete page: header in its initial state, plus the WASM loader when a
/// bundle is configured
pub fn page(config: &SiteConfig) -> String {
    let header = html::to_html(&render(&HeaderState::new(), config));
    let title = html::escape(&config.brand.logo_alt);

    let loader = if config.server.bundle_dir.is_some() {
        r#"<script type="module">import init from "/pkg/pksite_web.js"; init();</script>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/pksite.css">
</head>
<body>
    <div id="{PRERENDER_ELEMENT_ID}">{header}</div>
    <script id="{CONFIG_ELEMENT_ID}" type="application/json">{config_json}</script>
    {loader}
</body>
</html>"#,
        config_json = embedded_config(config),
    )
}
