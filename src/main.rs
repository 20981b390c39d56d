use actix_web::{web, App, HttpResponse, HttpServer};
use log::{error, info, warn};
use serde_json::json;

use dropout_predictor::error::PredictorError;
use dropout_predictor::input::{self, StudentForm};
use dropout_predictor::model::{self, Pipeline};
use dropout_predictor::{dictionaries, features, schema};

struct AppState {
    pipeline: Option<Pipeline>,
    load_error: Option<String>,
}

impl AppState {
    fn pipeline(&self) -> Result<&Pipeline, PredictorError> {
        self.pipeline.as_ref().ok_or_else(|| {
            PredictorError::ArtifactLoad(
                self.load_error
                    .clone()
                    .unwrap_or_else(|| "pipeline artifact unavailable".to_string()),
            )
        })
    }
}

// Manual prediction endpoint: one form record in, one scored row out.
async fn predict(
    form: web::Json<StudentForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PredictorError> {
    let pipeline = state.pipeline()?;
    let raw = input::manual_table(&form)?;
    let table = features::engineer(&raw)?;
    let result = model::score(pipeline, &table)?
        .into_iter()
        .next()
        .ok_or_else(|| PredictorError::Prediction("no prediction returned".to_string()))?;
    Ok(HttpResponse::Ok().json(result))
}

// Bulk prediction endpoint: CSV body in, per-row results plus summary out.
async fn batch_predict(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PredictorError> {
    let pipeline = state.pipeline()?;
    let raw = match input::bulk_table(&body) {
        // Zero data rows is "nothing to do", not a fault.
        Err(PredictorError::EmptyInput) => {
            return Ok(HttpResponse::Ok().json(json!({
                "rows": 0,
                "message": "the uploaded file has headers but no data rows; nothing to predict",
            })))
        }
        other => other?,
    };
    let table = features::engineer(&raw)?;
    let results = model::score(pipeline, &table)?;

    let dropout_count = results.iter().filter(|p| p.predicted_is_dropout == 1).count();
    Ok(HttpResponse::Ok().json(json!({
        "rows": results.len(),
        "dropout_count": dropout_count,
        "dropout_rate": dropout_count as f64 / results.len() as f64,
        "predictions": results,
    })))
}

// Same input as /batch-predict, but responds with the result-export CSV.
async fn batch_export(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PredictorError> {
    let pipeline = state.pipeline()?;
    let raw = match input::bulk_table(&body) {
        Err(PredictorError::EmptyInput) => {
            return Ok(HttpResponse::Ok().json(json!({
                "rows": 0,
                "message": "the uploaded file has headers but no data rows; nothing to export",
            })))
        }
        other => other?,
    };
    let table = features::engineer(&raw)?;
    let results = model::score(pipeline, &table)?;
    let csv = input::results_csv(&table, &results)?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"dropout_predictions.csv\"",
        ))
        .body(csv))
}

// Downloadable template so bulk users know the exact required columns.
async fn template() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"student_data_template.csv\"",
        ))
        .body(input::template_csv())
}

async fn model_info(state: web::Data<AppState>) -> Result<HttpResponse, PredictorError> {
    let pipeline = state.pipeline()?;
    Ok(HttpResponse::Ok().json(json!({
        "model_name": pipeline.model_name.clone(),
        "n_features": pipeline.n_features(),
        "stages": ["preprocessor", "classifier"],
    })))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("Dropout Predictor API is running!")
}

async fn serve_homepage(state: web::Data<AppState>) -> HttpResponse {
    let html = match &state.pipeline {
        Some(_) => render_form_page(),
        None => {
            warn!("serving without a loaded pipeline; prediction UI withheld");
            render_unavailable_page(state.load_error.as_deref().unwrap_or("unknown error"))
        }
    };
    HttpResponse::Ok().content_type("text/html").body(html)
}

fn number_field(name: &str, step: &str, min: &str, value: &str) -> String {
    let label = name.replace('_', " ");
    format!(
        r#"<div class="form-group"><label for="{name}">{label}</label><input type="number" id="{name}" data-field="{name}" step="{step}" min="{min}" value="{value}"></div>"#
    )
}

fn select_field(dict: &dictionaries::Dictionary) -> String {
    let name = dict.feature;
    let label = name.replace('_', " ");
    let options: String = dict
        .sorted_labels()
        .iter()
        .map(|l| format!(r#"<option value="{l}">{l}</option>"#))
        .collect();
    format!(
        r#"<div class="form-group"><label for="{name}">{label}</label><select id="{name}" data-field="{name}">{options}</select></div>"#
    )
}

fn raw_field(name: &str) -> String {
    if let Some(dict) = dictionaries::for_feature(name) {
        return select_field(dict);
    }
    match name {
        schema::AGE_AT_ENROLLMENT => number_field(name, "1", "15", "18"),
        n if n.contains("grade") => number_field(name, "0.1", "0", "0.0"),
        schema::UNEMPLOYMENT_RATE | schema::INFLATION_RATE | schema::GDP => {
            number_field(name, "0.1", "0", "0.0")
        }
        // unit counts
        _ => number_field(name, "1", "0", "0"),
    }
}

fn field_group(title: &str, names: &[&str]) -> String {
    let fields: String = names.iter().map(|n| raw_field(n)).collect();
    format!(r#"<fieldset><legend>{title}</legend><div class="grid">{fields}</div></fieldset>"#)
}

fn render_form_page() -> String {
    let academic = field_group("Academic Performance (Semester 1 & 2)", schema::ACADEMIC_FEATURES);
    let personal = field_group("Personal & Background", schema::PERSONAL_BACKGROUND_FEATURES);
    let enrollment = field_group("Enrollment & Financial", schema::ENROLLMENT_FINANCIAL_FEATURES);
    let external = field_group("External Economic Factors", schema::EXTERNAL_FEATURES);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Student Dropout Predictor</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 960px; margin: 40px auto; padding: 20px; }}
        .container {{ background: #f5f5f5; padding: 25px; border-radius: 10px; }}
        fieldset {{ margin: 15px 0; border: 1px solid #ccc; border-radius: 5px; }}
        .grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 10px 20px; }}
        .form-group label {{ display: block; margin-bottom: 4px; font-weight: bold; font-size: 13px; }}
        input, select, textarea {{ width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; }}
        button {{ background: #007bff; color: white; padding: 12px 24px; border: none; border-radius: 4px; cursor: pointer; margin: 5px; }}
        button:hover {{ background: #0056b3; }}
        .result {{ margin-top: 20px; padding: 20px; border-radius: 5px; display: none; }}
        .dropout {{ background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }}
        .non-dropout {{ background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }}
        .info {{ background: #d1ecf1; color: #0c5460; border: 1px solid #bee5eb; }}
        .error {{ background: #fff3cd; color: #856404; border: 1px solid #ffeaa7; }}
        .feature-section {{ background: #e8f5e8; padding: 20px; border-radius: 10px; margin: 20px 0; }}
        table {{ width: 100%; border-collapse: collapse; margin: 15px 0; }}
        th, td {{ padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Student Dropout Predictor</h1>
        <p>Enter a student's record to predict their final status (Dropout or Non-Dropout):</p>

        {academic}
        {personal}
        {enrollment}
        {external}

        <button onclick="predict()">Predict Status</button>
        <div id="result" class="result"></div>

        <div class="feature-section">
            <h3>Bulk Prediction (CSV)</h3>
            <p>Paste CSV rows using the <a href="/template.csv">template columns</a>.
               Categorical fields take integer codes, not labels.</p>
            <textarea id="batchData" rows="8" style="font-family: monospace;"
                placeholder="Paste CSV data here (first line must be the header row)"></textarea>
            <button onclick="processBatch()">Run Batch Prediction</button>
            <button onclick="exportBatch()">Download Results CSV</button>
            <div id="batch-result" class="result"></div>
        </div>
    </div>

    <script>
        function collectForm() {{
            const payload = {{}};
            document.querySelectorAll('[data-field]').forEach(el => {{
                const name = el.dataset.field;
                if (el.tagName === 'SELECT') {{
                    payload[name] = el.value;
                }} else {{
                    payload[name] = parseFloat(el.value || '0');
                }}
            }});
            return payload;
        }}

        async function predict() {{
            const resultDiv = document.getElementById('result');
            try {{
                const response = await fetch('/predict', {{
                    method: 'POST',
                    headers: {{'Content-Type': 'application/json'}},
                    body: JSON.stringify(collectForm())
                }});
                const data = await response.json();
                resultDiv.style.display = 'block';
                if (!response.ok) {{
                    resultDiv.className = 'result error';
                    resultDiv.innerHTML = `<p>${{data.error}}</p>`;
                    return;
                }}
                resultDiv.className = 'result ' +
                    (data.predicted_status === 'Dropout' ? 'dropout' : 'non-dropout');
                resultDiv.innerHTML = `
                    <h3>Prediction: ${{data.predicted_status}}</h3>
                    <p><strong>P(Non-Dropout):</strong> ${{(data.probability_non_dropout * 100).toFixed(1)}}%</p>
                    <p><strong>P(Dropout):</strong> ${{(data.probability_dropout * 100).toFixed(1)}}%</p>`;
            }} catch (error) {{
                resultDiv.style.display = 'block';
                resultDiv.className = 'result error';
                resultDiv.innerHTML = `<p>Error: ${{error.message}}</p>`;
            }}
        }}

        async function processBatch() {{
            const resultDiv = document.getElementById('batch-result');
            try {{
                const response = await fetch('/batch-predict', {{
                    method: 'POST',
                    headers: {{'Content-Type': 'text/csv'}},
                    body: document.getElementById('batchData').value
                }});
                const data = await response.json();
                resultDiv.style.display = 'block';
                if (!response.ok) {{
                    resultDiv.className = 'result error';
                    resultDiv.innerHTML = `<p>${{data.error}}</p>`;
                    return;
                }}
                if (data.rows === 0) {{
                    resultDiv.className = 'result info';
                    resultDiv.innerHTML = `<p>${{data.message}}</p>`;
                    return;
                }}
                resultDiv.className = 'result info';
                resultDiv.innerHTML = `
                    <h3>Batch Results</h3>
                    <p><strong>Rows:</strong> ${{data.rows}} |
                       <strong>Predicted dropouts:</strong> ${{data.dropout_count}}
                       (${{(data.dropout_rate * 100).toFixed(1)}}%)</p>
                    <table>
                        <thead><tr><th>#</th><th>Status</th><th>P(Non-Dropout)</th><th>P(Dropout)</th></tr></thead>
                        <tbody>
                            ${{data.predictions.map((p, i) => `
                                <tr>
                                    <td>${{i + 1}}</td>
                                    <td>${{p.predicted_status}}</td>
                                    <td>${{(p.probability_non_dropout * 100).toFixed(1)}}%</td>
                                    <td>${{(p.probability_dropout * 100).toFixed(1)}}%</td>
                                </tr>`).join('')}}
                        </tbody>
                    </table>`;
            }} catch (error) {{
                resultDiv.style.display = 'block';
                resultDiv.className = 'result error';
                resultDiv.innerHTML = `<p>Error: ${{error.message}}</p>`;
            }}
        }}

        async function exportBatch() {{
            const response = await fetch('/batch-predict/export', {{
                method: 'POST',
                headers: {{'Content-Type': 'text/csv'}},
                body: document.getElementById('batchData').value
            }});
            if (!response.ok) {{
                const data = await response.json();
                const resultDiv = document.getElementById('batch-result');
                resultDiv.style.display = 'block';
                resultDiv.className = 'result error';
                resultDiv.innerHTML = `<p>${{data.error}}</p>`;
                return;
            }}
            const blob = await response.blob();
            const link = document.createElement('a');
            link.href = URL.createObjectURL(blob);
            link.download = 'dropout_predictions.csv';
            link.click();
        }}
    </script>
</body>
</html>
"#
    )
}

fn render_unavailable_page(reason: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Student Dropout Predictor</title></head>
<body style="font-family: Arial, sans-serif; max-width: 700px; margin: 60px auto;">
    <h1>Student Dropout Predictor</h1>
    <p style="background: #f8d7da; color: #721c24; padding: 15px; border-radius: 5px;">
        The prediction pipeline could not be loaded, so predictions are unavailable:<br>
        <code>{reason}</code>
    </p>
</body>
</html>
"#
    )
}

async fn start_api(state: AppState) -> std::io::Result<()> {
    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/", web::get().to(serve_homepage))
            .route("/predict", web::post().to(predict))
            .route("/batch-predict", web::post().to(batch_predict))
            .route("/batch-predict/export", web::post().to(batch_export))
            .route("/template.csv", web::get().to(template))
            .route("/model/info", web::get().to(model_info))
            .route("/health", web::get().to(health_check))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let artifact_path = std::env::var("DROPOUT_PIPELINE")
        .unwrap_or_else(|_| model::DEFAULT_ARTIFACT_PATH.to_string());

    let state = match Pipeline::load(&artifact_path) {
        Ok(pipeline) => {
            info!(
                "loaded pipeline artifact {} from {artifact_path} ({} features)",
                pipeline.model_name,
                pipeline.n_features()
            );
            AppState {
                pipeline: Some(pipeline),
                load_error: None,
            }
        }
        Err(e) => {
            error!("{e}");
            AppState {
                pipeline: None,
                load_error: Some(e.to_string()),
            }
        }
    };

    info!("starting dropout predictor on http://127.0.0.1:8080");
    start_api(state).await
}
