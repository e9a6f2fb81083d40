use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use panelfit_core::{placements, FitError, FitReport, FitRequest, FitResult, Fitter};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

const OPENAPI_SPEC: &str = include_str!("../../../openapi.yaml");
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>PanelFit API Docs</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            SwaggerUIBundle({
                url: '/openapi.yaml',
                dom_id: '#swagger-ui',
                presets: [SwaggerUIBundle.presets.apis],
                layout: 'BaseLayout',
            });
        };
    </script>
</body>
</html>"#;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Panel Fitter API");

    // Build application
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/api/health", get(health_check))
        .route("/api/fit", post(fit))
        .route("/api/generate/svg", post(generate_svg))
        .route("/openapi.yaml", get(serve_openapi_spec))
        .route("/docs", get(serve_swagger_ui))
        .layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to port 3000");

    info!("API server listening on http://0.0.0.0:3000");
    info!("Try: curl http://localhost:3000/api/health");

    axum::serve(listener, app).await.expect("Server error");
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "panelfit-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Main fitting endpoint
async fn fit(Json(request): Json<FitRequest>) -> Result<Json<FitResult>, AppError> {
    info!(
        "Received fit request: roof {}×{}, panel {}×{}",
        request.roof_width, request.roof_height, request.panel_width, request.panel_height
    );

    let fitter = Fitter::new(request)?;
    let result = fitter.compute();

    info!(
        "Fit complete: {} panels via {}",
        result.panel_count, result.label
    );

    Ok(Json(result))
}

/// Generate SVG visualization
async fn generate_svg(Json(report): Json<FitReport>) -> Result<Response, AppError> {
    info!(
        "Generating SVG for {} placed panels",
        report.result.panel_count
    );

    let svg = generate_svg_content(&report)?;

    Ok((StatusCode::OK, [("Content-Type", "image/svg+xml")], svg).into_response())
}

/// Generate SVG content from a fit report
fn generate_svg_content(report: &FitReport) -> anyhow::Result<String> {
    use std::fmt::Write;

    let mut svg = String::new();
    let view_width = 800.0;
    let view_height = 600.0;
    let margin = 40.0;

    let request = &report.request;

    // Scale the roof to fit the viewport, preserving aspect ratio.
    let scale = if request.roof_width > 0.0 && request.roof_height > 0.0 {
        ((view_width - 2.0 * margin) / request.roof_width)
            .min((view_height - 2.0 * margin) / request.roof_height)
    } else {
        1.0
    };

    let roof_width = request.roof_width.max(0.0) * scale;
    let roof_height = request.roof_height.max(0.0) * scale;
    let offset_x = (view_width - roof_width) / 2.0;
    let offset_y = (view_height - roof_height) / 2.0;

    // SVG header
    writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        view_width, view_height, view_width, view_height
    )?;

    // Background and roof outline
    writeln!(
        &mut svg,
        r##"  <rect width="100%" height="100%" fill="#f5f5f5"/>"##
    )?;
    writeln!(
        &mut svg,
        r##"  <rect x="{}" y="{}" width="{}" height="{}" fill="#e5e7eb" stroke="#374151" stroke-width="2"/>"##,
        offset_x, offset_y, roof_width, roof_height
    )?;
    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="14" fill="#374151">Roof: {} × {}</text>"##,
        offset_x,
        offset_y - 10.0,
        request.roof_width,
        request.roof_height
    )?;

    if report.result.panel_count == 0 {
        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="18" fill="#ef4444" text-anchor="middle">{}</text>"##,
            view_width / 2.0,
            view_height / 2.0,
            report.result.label
        )?;
        writeln!(&mut svg, "</svg>")?;
        return Ok(svg);
    }

    // Draw placements
    for (index, placement) in placements(&report.result).iter().enumerate() {
        let x = offset_x + placement.x * scale;
        let y = offset_y + placement.y * scale;
        let width = placement.width * scale;
        let height = placement.height * scale;

        let (fill, stroke) = if placement.rotated {
            ("#10b981", "#059669")
        } else {
            ("#3b82f6", "#1e40af")
        };

        writeln!(
            &mut svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            x, y, width, height, fill, stroke
        )?;
        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#fff" text-anchor="middle">{}</text>"##,
            x + width / 2.0,
            y + height / 2.0 + 4.0,
            index + 1
        )?;
    }

    // Summary
    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#666">Panels: {} | {}</text>"##,
        margin,
        view_height - margin / 2.0,
        report.result.panel_count,
        report.result.label
    )?;

    writeln!(&mut svg, "</svg>")?;

    Ok(svg)
}

/// Application error type
struct AppError(anyhow::Error);

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError(err.into())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request error: {}", self.0);

        let message = self.0.to_string();
        let status = if message.contains("Invalid input") {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

async fn serve_index() -> impl IntoResponse {
    Html(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Panel Fitter</title>
        </head>
        <body>
            <h1>Panel Fitter API</h1>
            <p>Estimates how many panels fit on a rectangular roof.</p>
            <h2>API Endpoints:</h2>
            <ul>
                <li>GET /api/health - Health check</li>
                <li>POST /api/fit - Compute the best panel layout</li>
                <li>POST /api/generate/svg - Generate SVG visualization</li>
            </ul>
            <p>See <a href="/docs">/docs</a> for interactive documentation.</p>
        </body>
        </html>
    "#,
    )
}

async fn serve_openapi_spec() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("Content-Type", "application/yaml")],
        OPENAPI_SPEC,
    )
}

async fn serve_swagger_ui() -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}
