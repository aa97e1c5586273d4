//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet, its stylesheet and the fullscreen plugin are injected as
//! `<script>`/`<link>` tags at startup. The map script from
//! `quake_layers::assets` is evaluated as a global (no ES modules) once
//! Leaflet is available and exposed via `window.*`.

use quake_layers::assets::{FULLSCREEN_CSS, FULLSCREEN_JS, LEAFLET_CSS, LEAFLET_JS, QUAKE_MAP_JS};

/// Polls run every 100ms; give up after this many (30s).
pub const MAX_POLLS: u32 = 300;

/// Escape a JSON document for embedding in a single-quoted JS string.
fn escape_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
        .replace("</", "<\\/")
}

/// Script injecting Leaflet and, once `L` exists, the map script.
///
/// The fullscreen plugin extends `L`, so it is only appended after
/// Leaflet itself has loaded. If Leaflet never arrives the failure is
/// recorded in `window.__quakeMapError`.
fn init_script(max_polls: u32) -> String {
    format!(
        r#"
        (function() {{
            if (window.__quakeMapInit) return;
            window.__quakeMapInit = true;
            function addCss(href) {{
                var link = document.createElement('link');
                link.rel = 'stylesheet';
                link.href = href;
                document.head.appendChild(link);
            }}
            function addScript(src) {{
                var script = document.createElement('script');
                script.src = src;
                document.head.appendChild(script);
            }}
            addCss('{LEAFLET_CSS}');
            addCss('{FULLSCREEN_CSS}');
            if (typeof L === 'undefined') addScript('{LEAFLET_JS}');
            var pluginRequested = false;
            var attempts = 0;
            var waitForLeaflet = setInterval(function() {{
                if (++attempts > {max_polls}) {{
                    clearInterval(waitForLeaflet);
                    window.__quakeMapError = 'Leaflet failed to load';
                    console.error('[Quake] ' + window.__quakeMapError);
                    return;
                }}
                if (typeof L === 'undefined') return;
                if (!L.Control.FullScreen && !pluginRequested) {{
                    pluginRequested = true;
                    addScript('{FULLSCREEN_JS}');
                    return;
                }}
                if (!L.Control.FullScreen) return;
                clearInterval(waitForLeaflet);
                // Eval at global scope via indirect eval
                (0, eval)(window.__quakeMapScript);
                delete window.__quakeMapScript;
                if (typeof renderQuakeMap !== 'undefined') window.renderQuakeMap = renderQuakeMap;
                if (typeof destroyQuakeMap !== 'undefined') window.destroyQuakeMap = destroyQuakeMap;
                window.__quakeMapReady = true;
                console.log('Quake map initialized');
            }}, 100);
        }})();
        "#,
    )
}

/// Script waiting for the map script and the container, then rendering.
///
/// Gives up after `max_polls` attempts, or as soon as initialization has
/// failed, and reports through `window.__quakeMapError`. Errors thrown by
/// Leaflet land there too.
fn render_script(container_id: &str, spec_json: &str, max_polls: u32) -> String {
    let escaped_spec = escape_js(spec_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (window.__quakeMapError || ++attempts > {max_polls}) {{
                    clearInterval(poll);
                    window.__quakeMapError = window.__quakeMapError ||
                        'map container #{container_id} never became ready';
                    console.error('[Quake] ' + window.__quakeMapError);
                    return;
                }}
                if (window.__quakeMapReady &&
                    typeof window.renderQuakeMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        var count = window.renderQuakeMap('{container_id}', '{escaped_spec}');
                        window.__quakeMapMounted = '{container_id}';
                        console.log('[Quake] mounted ' + count + ' markers');
                    }} catch(e) {{
                        window.__quakeMapError = 'renderQuakeMap error: ' + e;
                        console.error('[Quake] ' + window.__quakeMapError);
                    }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn eval(code: &str) -> Result<(), String> {
    js_sys::eval(code)
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Inject Leaflet and initialize the map script with a bounded
/// wait-for-Leaflet polling loop. Safe to call more than once.
pub fn init_map_scripts() -> Result<(), String> {
    let store_js = format!(
        "window.__quakeMapScript = {};",
        serde_json::to_string(QUAKE_MAP_JS).map_err(|e| e.to_string())?
    );
    eval(&store_js)?;
    eval(&init_script(MAX_POLLS))
}

/// Schedule rendering the earthquake map into `container_id`.
///
/// Only scheduling can fail synchronously. Later failures (Leaflet not
/// loading, the container never appearing, Leaflet throwing) are reported
/// by [`mount_status`].
pub fn render_quake_map(container_id: &str, spec_json: &str) -> Result<(), String> {
    eval(&render_script(container_id, spec_json, MAX_POLLS))
}

/// Progress of a scheduled render.
#[derive(Debug, Clone, PartialEq)]
pub enum MountStatus {
    Pending,
    Mounted,
    Failed(String),
}

/// Check on a render scheduled by [`render_quake_map`].
pub fn mount_status(container_id: &str) -> MountStatus {
    let error = js_sys::eval("window.__quakeMapError")
        .ok()
        .and_then(|v| v.as_string());
    if let Some(error) = error {
        return MountStatus::Failed(error);
    }
    let mounted = js_sys::eval("window.__quakeMapMounted")
        .ok()
        .and_then(|v| v.as_string());
    if mounted.as_deref() == Some(container_id) {
        MountStatus::Mounted
    } else {
        MountStatus::Pending
    }
}
