//! Local Web UI command
//!
//! Serves the web-form shell: a five-input entry form, the full table,
//! and the aggregate counts, all over a local HTTP server.

use std::io::Cursor;
use std::io::Read as _;

use serde::Deserialize;
use tiny_http::{Header, Method, Request, Response, Server};

use wellog::core::models::Entry;
use wellog::core::ports::EntryStore;
use wellog::core::services::{EntryForm, classify, validate};

/// Start the local web UI server
pub fn ui(store: &dyn EntryStore, port: u16, open: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    println!("Starting wellog UI...");
    println!("Open http://localhost:{port} in your browser");
    println!();
    println!("Press Ctrl+C to stop");

    if open {
        // Try to open browser
        #[cfg(target_os = "macos")]
        let _ = std::process::Command::new("open")
            .arg(format!("http://localhost:{port}"))
            .spawn();

        #[cfg(target_os = "linux")]
        let _ = std::process::Command::new("xdg-open")
            .arg(format!("http://localhost:{port}"))
            .spawn();

        #[cfg(target_os = "windows")]
        let _ = std::process::Command::new("cmd")
            .args(["/c", "start", &format!("http://localhost:{port}")])
            .spawn();
    }

    for mut request in server.incoming_requests() {
        let response = handle_request(&mut request, store);
        let _ = request.respond(response);
    }

    Ok(())
}

fn handle_request(request: &mut Request, store: &dyn EntryStore) -> Response<Cursor<Vec<u8>>> {
    let path = request.url().to_string();
    let method = request.method().clone();

    match (&method, path.as_str()) {
        // Static pages
        (&Method::Get, "/") => serve_html(INDEX_HTML),
        (&Method::Get, "/style.css") => serve_css(STYLE_CSS),

        // REST API
        (&Method::Get, "/api/entries") => api_entries(store),
        (&Method::Get, "/api/stats") => api_stats(store),
        (&Method::Post, "/api/entries") => api_add(request, store),
        (&Method::Post, "/api/clear") => api_clear(store),

        // 404
        _ => not_found(),
    }
}

// =============================================================================
// Response helpers
// =============================================================================

fn serve_html(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec())
        .with_header(Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap())
}

fn serve_css(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec())
        .with_header(Header::from_bytes("Content-Type", "text/css; charset=utf-8").unwrap())
}

fn json_response(json: serde_json::Value) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(json.to_string().into_bytes())
        .with_header(Header::from_bytes("Content-Type", "application/json").unwrap())
}

fn server_error(message: &str) -> Response<Cursor<Vec<u8>>> {
    json_response(serde_json::json!({ "success": false, "error": message })).with_status_code(500)
}

fn not_found() -> Response<Cursor<Vec<u8>>> {
    Response::from_data(b"Not Found".to_vec()).with_status_code(404)
}

// =============================================================================
// API handlers
// =============================================================================

/// Body of a form submission
///
/// All five fields arrive as strings, exactly as typed; the web shell
/// does not trim.
#[derive(Debug, Deserialize)]
struct NewEntryRequest {
    #[serde(default)]
    student_name: String,
    #[serde(default)]
    wellness_activity: String,
    #[serde(default)]
    me_time_activity: String,
    #[serde(default)]
    screen_free_time: String,
    #[serde(default)]
    frequency: String,
}

fn api_entries(store: &dyn EntryStore) -> Response<Cursor<Vec<u8>>> {
    match store.load() {
        Ok(table) => json_response(serde_json::json!({
            "entries": table.entries(),
            "stats": table.stats(),
        })),
        Err(e) => server_error(&e.to_string()),
    }
}

fn api_stats(store: &dyn EntryStore) -> Response<Cursor<Vec<u8>>> {
    match store.load() {
        Ok(table) => json_response(serde_json::json!({ "stats": table.stats() })),
        Err(e) => server_error(&e.to_string()),
    }
}

fn api_add(request: &mut Request, store: &dyn EntryStore) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        return server_error(&format!("Failed to read request body: {e}"));
    }

    let req: NewEntryRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(e) => return server_error(&format!("Invalid JSON: {e}")),
    };

    let form = EntryForm {
        student_name: req.student_name,
        wellness_activity: req.wellness_activity,
        me_time_activity: req.me_time_activity,
        screen_free_time: req.screen_free_time,
        frequency: req.frequency,
    };

    let minutes = match validate(&form) {
        Ok(minutes) => minutes,
        Err(e) => {
            return json_response(serde_json::json!({
                "success": false,
                "field": e.field(),
                "error": e.to_string(),
            }));
        },
    };

    let status = classify(minutes, &form.wellness_activity, &form.me_time_activity);
    let entry = Entry::new(
        form.student_name,
        form.wellness_activity,
        form.me_time_activity,
        minutes,
        form.frequency,
        status,
    );

    match store.append(entry) {
        Ok(_) => json_response(serde_json::json!({
            "success": true,
            "status": status.to_string(),
            "message": "Entry added successfully!",
        })),
        Err(e) => server_error(&e.to_string()),
    }
}

fn api_clear(store: &dyn EntryStore) -> Response<Cursor<Vec<u8>>> {
    match store.clear() {
        Ok(()) => json_response(serde_json::json!({
            "success": true,
            "message": "All entries cleared!",
        })),
        Err(e) => server_error(&e.to_string()),
    }
}

// =============================================================================
// Embedded static files
// =============================================================================

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>wellog</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <header>
        <h1>Wellness Logger</h1>
    </header>

    <main>
        <section id="form-section">
            <h2>New Entry</h2>
            <form id="entry-form">
                <label>Student Name
                    <input type="text" name="student_name">
                </label>
                <label>Wellness Activity
                    <input type="text" name="wellness_activity">
                </label>
                <label>Me-Time Activity
                    <input type="text" name="me_time_activity">
                </label>
                <label>Screen-Free Time (mins)
                    <input type="text" name="screen_free_time">
                </label>
                <label>Frequency (e.g., 3x, 2 times)
                    <input type="text" name="frequency">
                </label>
                <div id="form-message"></div>
                <button type="submit">Add Entry</button>
            </form>
        </section>

        <section id="stats-section">
            <h2>Statistics</h2>
            <div id="stats" class="stats">Loading...</div>
        </section>

        <section id="entries-section">
            <h2>All Entries</h2>
            <div id="entries">Loading...</div>
            <button id="clear-all" class="danger">Clear All Entries</button>
        </section>
    </main>

    <footer>
        <p>Press Ctrl+C in terminal to stop</p>
    </footer>

    <script>
        const FIELDS = ['student_name', 'wellness_activity', 'me_time_activity',
                        'screen_free_time', 'frequency'];

        async function refresh() {
            const res = await fetch('/api/entries');
            const data = await res.json();
            renderStats(data.stats);
            renderEntries(data.entries);
        }

        function renderStats(stats) {
            document.getElementById('stats').innerHTML = `
                <div class="stat"><span class="num">${stats.total}</span> total</div>
                <div class="stat healthy"><span class="num">${stats.healthy}</span> Healthy</div>
                <div class="stat needs-more"><span class="num">${stats.needs_more_me_time}</span> Needs More Me-Time</div>
            `;
        }

        function renderEntries(entries) {
            if (!entries || entries.length === 0) {
                document.getElementById('entries').innerHTML =
                    '<p class="empty">No entries logged.</p>';
                return;
            }
            const rows = entries.map(e => `
                <tr>
                    <td>${esc(e.student_name)}</td>
                    <td>${esc(e.wellness_activity)}</td>
                    <td>${esc(e.me_time_activity)}</td>
                    <td>${e.screen_free_minutes}</td>
                    <td>${esc(e.frequency)}</td>
                    <td class="${e.status === 'Healthy' ? 'healthy' : 'needs-more'}">${esc(e.status)}</td>
                    <td>${esc(e.timestamp)}</td>
                </tr>
            `).join('');
            document.getElementById('entries').innerHTML = `
                <table>
                    <thead><tr>
                        <th>Student Name</th><th>Wellness Activity</th><th>Me-Time Activity</th>
                        <th>Screen-Free (mins)</th><th>Frequency</th><th>Status</th><th>Timestamp</th>
                    </tr></thead>
                    <tbody>${rows}</tbody>
                </table>
            `;
        }

        function esc(s) {
            const div = document.createElement('div');
            div.textContent = String(s);
            return div.innerHTML;
        }

        function showMessage(text, ok) {
            const el = document.getElementById('form-message');
            el.textContent = text;
            el.className = ok ? 'ok' : 'error';
        }

        document.getElementById('entry-form').addEventListener('submit', async (ev) => {
            ev.preventDefault();
            const form = ev.target;
            const payload = {};
            for (const f of FIELDS) payload[f] = form.elements[f].value;

            const res = await fetch('/api/entries', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify(payload)
            });
            const data = await res.json();

            FIELDS.forEach(f => form.elements[f].classList.remove('invalid'));
            if (data.success) {
                showMessage(`${data.message} Status: ${data.status}`, true);
                form.reset();
                refresh();
            } else {
                if (data.field) form.elements[data.field].classList.add('invalid');
                showMessage(data.error, false);
            }
        });

        document.getElementById('clear-all').addEventListener('click', async () => {
            const res = await fetch('/api/clear', { method: 'POST' });
            const data = await res.json();
            if (data.success) showMessage(data.message, true);
            refresh();
        });

        refresh();
    </script>
</body>
</html>
"#;

const STYLE_CSS: &str = r#"
:root {
    --bg: #101820;
    --surface: #1b2733;
    --primary: #24445c;
    --accent: #2fbf8f;
    --text: #eef2f5;
    --text-dim: #8fa1ad;
    --success: #4ade80;
    --warning: #fbbf24;
    --danger: #ef6461;
}

* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: 'SF Mono', 'Menlo', 'Monaco', 'Courier New', monospace;
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
    padding: 2rem;
}

header {
    margin-bottom: 2rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--primary);
}

h1 {
    font-size: 1.5rem;
    color: var(--accent);
}

main {
    display: grid;
    gap: 2rem;
}

section {
    background: var(--surface);
    padding: 1.5rem;
    border-radius: 8px;
}

h2 {
    font-size: 1rem;
    color: var(--text-dim);
    margin-bottom: 1rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

form {
    display: grid;
    gap: 0.75rem;
    max-width: 28rem;
}

label {
    display: grid;
    gap: 0.25rem;
    color: var(--text-dim);
    font-size: 0.875rem;
}

input {
    background: var(--bg);
    color: var(--text);
    border: 1px solid var(--primary);
    border-radius: 4px;
    padding: 0.5rem;
    font-family: inherit;
}

input.invalid {
    border-color: var(--danger);
}

#form-message.ok { color: var(--success); }
#form-message.error { color: var(--danger); }

.stats {
    display: flex;
    gap: 2rem;
    flex-wrap: wrap;
}

.stat {
    color: var(--text-dim);
}

.stat .num {
    font-size: 1.5rem;
    color: var(--text);
    margin-right: 0.5rem;
}

table {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.875rem;
}

th, td {
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid var(--primary);
}

th {
    color: var(--text-dim);
    font-weight: normal;
    text-transform: uppercase;
    font-size: 0.75rem;
}

td.healthy, .stat.healthy .num { color: var(--success); }
td.needs-more, .stat.needs-more .num { color: var(--warning); }

button {
    background: var(--accent);
    color: var(--bg);
    border: none;
    padding: 0.5rem 1rem;
    border-radius: 4px;
    cursor: pointer;
    font-family: inherit;
    font-size: 0.875rem;
}

button:hover {
    opacity: 0.9;
}

button.danger {
    background: var(--danger);
    color: var(--text);
    margin-top: 1rem;
}

.empty {
    color: var(--text-dim);
    font-style: italic;
}

footer {
    margin-top: 2rem;
    text-align: center;
    color: var(--text-dim);
    font-size: 0.875rem;
}

@media (min-width: 768px) {
    main {
        grid-template-columns: 1fr 1fr;
    }

    #entries-section {
        grid-column: span 2;
    }
}
"#;
