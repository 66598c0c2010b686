use actix_web::{http::header::ContentType, web, HttpResponse};

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Company Registry</title>
</head>
<body>
    <h1>Company Registry</h1>
    <ul>
        <li><code>GET /api/companies</code> lists all companies</li>
        <li><code>POST /api/companies</code> registers a company</li>
        <li><code>GET /api/companies/{id}</code> shows a company</li>
        <li><code>PUT /api/companies/{id}</code> updates a company</li>
        <li><code>DELETE /api/companies/{id}</code> deletes a company</li>
        <li><code>POST /api/compare</code> fetches companies for comparison</li>
    </ul>
</body>
</html>
"#;

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_PAGE)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
