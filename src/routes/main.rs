use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

const INDEX_HTML: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
    <meta charset=\"utf-8\">\n\
    <title>Product Catalog Administration</title>\n\
</head>\n\
<body>\n\
    <h1>Product Catalog Administration</h1>\n\
    <p>Manage products via the REST API at <code>/products</code>.</p>\n\
</body>\n\
</html>\n";

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "OK" }))
}
