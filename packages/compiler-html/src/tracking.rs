//! Inline analytics script.
//!
//! Reports a `visit` on load and a `click` for every activated link or
//! button. Network failures are swallowed so tracking can never break the
//! page.

use serde_json::Value;

const VISITOR_KEY: &str = "pagesmith_visitor";

pub(crate) fn script(document_id: Option<&str>, endpoint: &str) -> serde_json::Result<String> {
    let document_id = js_literal(&document_id.map_or(Value::Null, |id| Value::from(id)))?;
    let endpoint = js_literal(&Value::from(endpoint))?;
    let visitor_key = js_literal(&Value::from(VISITOR_KEY))?;

    Ok(format!(
        r#"(function () {{
  var documentId = {document_id};
  var endpoint = {endpoint};
  var visitorId = 'anonymous';
  try {{
    visitorId = localStorage.getItem({visitor_key});
    if (!visitorId) {{
      visitorId = Date.now().toString(36) + Math.random().toString(36).slice(2);
      localStorage.setItem({visitor_key}, visitorId);
    }}
  }} catch (e) {{}}
  function track(eventType, details) {{
    try {{
      fetch(endpoint, {{
        method: 'POST',
        headers: {{ 'Content-Type': 'application/json' }},
        keepalive: true,
        body: JSON.stringify({{
          documentId: documentId,
          eventType: eventType,
          timestamp: new Date().toISOString(),
          visitorId: visitorId,
          details: details
        }})
      }}).catch(function () {{}});
    }} catch (e) {{}}
  }}
  track('visit');
  document.addEventListener('click', function (e) {{
    var target = e.target && e.target.closest ? e.target.closest('a, button') : null;
    if (target) {{
      track('click', {{
        element: target.tagName,
        text: (target.textContent || '').trim().slice(0, 100),
        href: target.getAttribute('href')
      }});
    }}
  }});
}})();"#
    ))
}

/// JSON literal that is also safe inside a `<script>` element
fn js_literal(value: &Value) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
