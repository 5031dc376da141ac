use actix_web::{get, web, HttpResponse, Scope};

// TODO: route /health once a real in-process check lands; the banner
// already advertises it to clients.
#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("API is running. Try /health")
}

pub fn root_scope() -> Scope {
    web::scope("")
        .service(index)
}
