use actix_web::{get, http::header, web, HttpResponse};

pub mod admin;
pub mod backend_health;
pub mod league;

/// The site root lands on the standings page
#[get("/")]
async fn home_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/league/standings"))
        .finish()
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home_redirect)
        .service(backend_health::backend_health);

    // Public read-only pages
    cfg.service(
        web::scope("/league")
            .service(league::get_standings)
            .service(league::get_schedule)
            .service(league::get_teams)
            .service(league::get_roster)
            .service(league::get_match_detail)
    );

    admin::init_admin_routes(cfg);
}
