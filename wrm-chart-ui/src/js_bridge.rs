//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");

const D3_CDN: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WRM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Injects the D3 script tag if the host page did not include one. The chart
/// files are evaluated at global scope once D3 is ready and each render
/// function is promoted to `window.*`. Safe to call more than once.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        AREA_CHART_JS,
        LINE_CHART_JS,
        BAR_CHART_JS,
        DONUT_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "if (!window.__wrmChartsReady) {{ window.__wrmChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__wrmChartsReady || window.__wrmChartsPolling) return;
            window.__wrmChartsPolling = true;
            if (typeof d3 === 'undefined' && !document.getElementById('wrm-d3')) {{
                var tag = document.createElement('script');
                tag.id = 'wrm-d3';
                tag.src = '{D3_CDN}';
                document.head.appendChild(tag);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__wrmChartScripts);
                    delete window.__wrmChartScripts;
                    if (typeof renderAreaChart !== 'undefined') window.renderAreaChart = renderAreaChart;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderDonutChart !== 'undefined') window.renderDonutChart = renderDonutChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__wrmChartsReady = true;
                    console.log('WRM charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    call_js(&init_js);
}

/// Poll until the charts are initialized and the container exists, then call
/// `window.<render_fn>(container_id, data, config)`. Gives up after ~10s so a
/// container that never mounts does not leave a timer behind.
fn render_when_ready(render_fn: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__wrmChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[WRM] {render_fn} error:', e); }}
                }} else if (attempts > 100) {{
                    clearInterval(poll);
                    console.warn('[WRM] gave up waiting for #{container_id}');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the stacked actual/predicted area chart.
pub fn render_area_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderAreaChart", container_id, data_json, config_json);
}

/// Render a single-series line chart (forecasts, parameter histories).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render a single-series bar chart (demand forecast).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render the quality composition donut.
pub fn render_donut_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderDonutChart", container_id, data_json, config_json);
}
