//! Static HTML bodies served to the browser.

use url::Url;

/// Page served for resolved downloads.
///
/// Navigates to the direct link three ways: a refresh directive, an
/// immediate script navigation, and a plain anchor for browsers without
/// script support.
pub fn download_page(href: &str) -> String {
    let href_attr = escape_attr(href);
    // A JSON string is a valid JS string literal.
    let href_js = serde_json::json!(href).to_string();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>Redirecting...</title>
    <meta http-equiv="refresh" content="0; url={href_attr}" />
  </head>
  <body>
    <script>
      window.location.href = {href_js};
    </script>
    <noscript>
      <p>If you're not redirected, <a href="{href_attr}">click here</a>.</p>
    </noscript>
  </body>
</html>
"#
    )
}

/// Page served when resolution fails: embeds the provider's own public
/// page for the share, with a manual-open button revealed after a short
/// delay in case the embed is blocked client-side.
pub fn fallback_page(public_url: &Url) -> String {
    let public_attr = escape_attr(public_url.as_str());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>Shared file</title>
    <style>
      body {{ margin: 0; font-family: sans-serif; }}
      iframe {{ border: 0; width: 100vw; height: 100vh; }}
      #manual {{ position: fixed; top: 1rem; right: 1rem; }}
      #manual a {{
        background: #1a73e8;
        border-radius: 4px;
        color: #fff;
        padding: 0.6rem 1.2rem;
        text-decoration: none;
      }}
    </style>
  </head>
  <body>
    <iframe src="{public_attr}" title="Shared file"></iframe>
    <div id="manual" hidden>
      <a href="{public_attr}">Open the file page</a>
    </div>
    <script>
      setTimeout(function () {{
        document.getElementById('manual').hidden = false;
      }}, 3000);
    </script>
  </body>
</html>
"#
    )
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
