//! HTML document shell
//!
//! Wraps a rendered page body in a full document: Bootstrap stylesheet, the
//! `#diary-root` mount point, and the client script that forwards form
//! events over the live-update WebSocket and patches in the markup the
//! server sends back.

use maud::{html, Markup, PreEscaped, DOCTYPE};

const BOOTSTRAP_CSS_HREF: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.2.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_CSS_INTEGRITY: &str =
    "sha384-rbsA2VBKQhggwzxH7pPCaAqO46MgnOM80zW1RWuH61DGLwZJEdK2Kadq2F9CUG65";

const CLIENT_SCRIPT: &str = r#"
(function () {
  const root = document.getElementById('diary-root');
  const scheme = location.protocol === 'https:' ? 'wss' : 'ws';
  const ws = new WebSocket(scheme + '://' + location.host + '/ws');
  const open = () => ws.readyState === WebSocket.OPEN;
  const send = (msg) => { if (open()) ws.send(JSON.stringify(msg)); };

  root.addEventListener('input', (ev) => {
    if (ev.target.id === 'description') send({ type: 'change', value: ev.target.value });
  });
  root.addEventListener('submit', (ev) => {
    // Without a live connection the form falls back to a regular POST
    if (!open()) return;
    ev.preventDefault();
    send({ type: 'submit' });
  });
  root.addEventListener('reset', () => send({ type: 'reset' }));

  ws.addEventListener('message', (event) => {
    const msg = JSON.parse(event.data);
    if (msg.type === 'render') {
      const next = document.createElement('div');
      next.innerHTML = msg.html;
      const panel = root.querySelector('#entry-panel');
      const nextPanel = next.querySelector('#entry-panel');
      if (panel && nextPanel && root.querySelector('#diary-form')) {
        panel.replaceWith(nextPanel);
      } else {
        root.innerHTML = msg.html;
      }
    } else if (msg.type === 'error') {
      console.error('diary:', msg.message);
    }
  });
})();
"#;

/// Full HTML document around a rendered page body
pub fn document(body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "My Diary" }
                link
                    href=(BOOTSTRAP_CSS_HREF)
                    integrity=(BOOTSTRAP_CSS_INTEGRITY)
                    rel="stylesheet"
                    crossorigin="anonymous";
            }
            body {
                div.container {
                    div id="diary-root" { (body) }
                }
                script { (PreEscaped(CLIENT_SCRIPT)) }
            }
        }
    }
}
